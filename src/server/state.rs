//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::{create_dynamodb_client, Settings};
use crate::db::{DynamoDbClient, ItemRepository};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Holds the shared resources handlers need. Cheaply cloneable (via Arc)
/// and safe for concurrent use; no locking is required around the
/// DynamoDB client.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// DynamoDB client wrapper
    pub dynamodb: Arc<DynamoDbClient>,

    /// Item repository for CRUD operations
    pub items: ItemRepository,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// Initializes the DynamoDB client and repository. Table provisioning
    /// happens separately in `App::new` so that state construction stays
    /// side-effect free.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);
        let start_time = Instant::now();

        tracing::debug!(
            region = %settings.aws_region,
            endpoint = ?settings.dynamodb_endpoint_url,
            table = %settings.dynamodb_items_table,
            "Initializing DynamoDB client"
        );

        let sdk_client = create_dynamodb_client(&settings).await;
        let dynamodb = Arc::new(DynamoDbClient::new(settings.clone(), sdk_client));
        let items = ItemRepository::new(dynamodb.clone());

        tracing::info!("Application state initialized");

        Ok(Self {
            settings,
            dynamodb,
            items,
            start_time,
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
