//! Database module
//!
//! Contains the DynamoDB client wrapper and data access layer.

pub mod dynamodb;
pub mod models;
pub mod repositories;

pub use dynamodb::DynamoDbClient;
pub use models::Item;
pub use repositories::{ItemError, ItemRepository};
