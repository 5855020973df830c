pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod list_recipes;
pub mod update_recipe;
