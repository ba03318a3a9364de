pub mod dto;
pub mod mappers;
pub mod open_food_facts_client;

pub use open_food_facts_client::OpenFoodFactsClient;
