pub mod get_family;
pub mod save_family;
