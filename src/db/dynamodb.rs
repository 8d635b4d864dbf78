//! DynamoDB client wrapper
//!
//! This module wraps the AWS DynamoDB SDK client and owns the idempotent
//! table-provisioning logic run at startup.

use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbSdkClient;
use std::sync::Arc;

use crate::config::Settings;

/// Provisioned read capacity for the items table
const READ_CAPACITY_UNITS: i64 = 5;

/// Provisioned write capacity for the items table
const WRITE_CAPACITY_UNITS: i64 = 5;

/// DynamoDB client wrapper for database operations.
#[derive(Clone)]
pub struct DynamoDbClient {
    /// Application settings
    settings: Arc<Settings>,

    /// AWS DynamoDB SDK client
    client: DynamoDbSdkClient,
}

impl DynamoDbClient {
    /// Create a new DynamoDB client wrapper.
    ///
    /// # Arguments
    /// * `settings` - Application settings containing DynamoDB configuration
    /// * `client` - AWS DynamoDB SDK client
    pub fn new(settings: Arc<Settings>, client: DynamoDbSdkClient) -> Self {
        Self { settings, client }
    }

    /// Get a reference to the underlying AWS SDK client
    pub fn client(&self) -> &DynamoDbSdkClient {
        &self.client
    }

    /// Get the items table name
    pub fn items_table(&self) -> &str {
        &self.settings.dynamodb_items_table
    }

    /// Check if the DynamoDB connection is healthy
    ///
    /// Performs a simple list_tables operation to verify connectivity.
    pub async fn health_check(&self) -> bool {
        match self.client.list_tables().limit(1).send().await {
            Ok(_) => {
                tracing::debug!("DynamoDB health check passed");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "DynamoDB health check failed");
                false
            }
        }
    }

    /// Ensure the items table exists, creating it if absent.
    ///
    /// Safe to call on every process start: an existing table is left
    /// untouched. The table is never altered or dropped here. Any
    /// describe-table failure other than "resource not found" is fatal
    /// to startup.
    pub async fn ensure_items_table(&self) -> Result<()> {
        let table = self.items_table();

        match self.client.describe_table().table_name(table).send().await {
            Ok(_) => {
                tracing::info!(table = %table, "Table already exists");
                Ok(())
            }
            Err(err) => {
                let not_found = err
                    .as_service_error()
                    .map(|e| e.is_resource_not_found_exception())
                    .unwrap_or(false);

                if !not_found {
                    return Err(err).with_context(|| format!("failed to describe table {}", table));
                }

                self.create_items_table().await
            }
        }
    }

    /// Create the items table: single string partition key `ID`,
    /// fixed provisioned capacity.
    async fn create_items_table(&self) -> Result<()> {
        let table = self.items_table();

        self.client
            .create_table()
            .table_name(table)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("ID")
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("ID")
                    .key_type(KeyType::Hash)
                    .build()?,
            )
            .provisioned_throughput(
                ProvisionedThroughput::builder()
                    .read_capacity_units(READ_CAPACITY_UNITS)
                    .write_capacity_units(WRITE_CAPACITY_UNITS)
                    .build()?,
            )
            .send()
            .await
            .with_context(|| format!("failed to create table {}", table))?;

        tracing::info!(table = %table, "Table created successfully");

        Ok(())
    }
}
