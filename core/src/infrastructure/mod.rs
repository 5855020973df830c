pub mod family;
pub mod llm;
pub mod menu;
pub mod rate_limit;
pub mod recipe;
