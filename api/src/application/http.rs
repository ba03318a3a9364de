pub mod food_search;
pub mod health;
pub mod server;
