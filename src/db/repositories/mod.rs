//! Data access layer
//!
//! Repositories wrap the DynamoDB client with typed, per-entity operations.

pub mod item;

pub use item::{ItemError, ItemRepository};
