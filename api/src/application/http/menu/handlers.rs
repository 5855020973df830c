pub mod approve_menu;
pub mod generate_menu;
pub mod get_alternatives;
pub mod get_current_menu;
pub mod get_menu;
pub mod get_menu_history;
pub mod lock_meal;
pub mod replace_meal;
