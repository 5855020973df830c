pub mod authentication;
pub mod common;
pub mod family;
pub mod menu;
pub mod menu_generation;
pub mod rate_limit;
pub mod recipe;
