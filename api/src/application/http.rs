pub mod family;
pub mod health;
pub mod menu;
pub mod recipe;
pub mod server;
