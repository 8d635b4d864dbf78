//! Item repository
//!
//! Data access layer for item CRUD operations.

use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::models::Item;
use crate::db::DynamoDbClient;

/// Repository for item operations
#[derive(Clone)]
pub struct ItemRepository {
    client: Arc<DynamoDbClient>,
}

impl ItemRepository {
    /// Create a new item repository
    pub fn new(client: Arc<DynamoDbClient>) -> Self {
        Self { client }
    }

    /// Write an item unconditionally (full overwrite, no previous value returned)
    pub async fn put(&self, item: &Item) -> Result<(), ItemError> {
        self.client
            .client()
            .put_item()
            .table_name(self.client.items_table())
            .set_item(Some(item.to_dynamodb()))
            .send()
            .await
            .map_err(|e| ItemError::DynamoDb(e.to_string()))?;

        tracing::debug!(id = %item.id, "Item stored");

        Ok(())
    }

    /// Point lookup by primary key
    ///
    /// A missing record is `ItemError::NotFound`, distinct from transport
    /// or service failures.
    pub async fn get(&self, id: &str) -> Result<Item, ItemError> {
        let result = self
            .client
            .client()
            .get_item()
            .table_name(self.client.items_table())
            .key("ID", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| ItemError::DynamoDb(e.to_string()))?;

        item_from_lookup(id, result.item)
    }

    /// Overwrite `Name` and `Email` for an existing item.
    ///
    /// The key must already exist: the condition expression turns the
    /// implicit DynamoDB upsert into a not-found failure for absent keys.
    /// `Name` is a DynamoDB reserved word, hence the attribute name aliases.
    pub async fn update(&self, id: &str, name: &str, email: &str) -> Result<(), ItemError> {
        self.client
            .client()
            .update_item()
            .table_name(self.client.items_table())
            .key("ID", AttributeValue::S(id.to_string()))
            .update_expression("SET #name = :name, #email = :email")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", "ID")
            .expression_attribute_names("#name", "Name")
            .expression_attribute_names("#email", "Email")
            .expression_attribute_values(":name", AttributeValue::S(name.to_string()))
            .expression_attribute_values(":email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(|e| match e.as_service_error() {
                Some(service_err) => map_update_error(service_err),
                None => ItemError::DynamoDb(e.to_string()),
            })?;

        tracing::debug!(id = %id, "Item updated");

        Ok(())
    }

    /// Unconditional delete by key; succeeds even if the key does not exist
    pub async fn delete(&self, id: &str) -> Result<(), ItemError> {
        self.client
            .client()
            .delete_item()
            .table_name(self.client.items_table())
            .key("ID", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| ItemError::DynamoDb(e.to_string()))?;

        tracing::debug!(id = %id, "Item deleted");

        Ok(())
    }
}

/// Map a get-item result to the repository outcome: a missing record is
/// `NotFound`, a record with missing or mistyped attributes is `ParseError`.
fn item_from_lookup(
    id: &str,
    attributes: Option<HashMap<String, AttributeValue>>,
) -> Result<Item, ItemError> {
    let Some(attributes) = attributes else {
        return Err(ItemError::NotFound);
    };

    Item::from_dynamodb(&attributes)
        .ok_or_else(|| ItemError::ParseError(format!("malformed item record for id {}", id)))
}

/// Map an update-item service error to the repository outcome.
///
/// A failed `attribute_exists` condition means the key is absent and becomes
/// `NotFound`; every other service failure stays a backend error.
fn map_update_error(err: &UpdateItemError) -> ItemError {
    if err.is_conditional_check_failed_exception() {
        ItemError::NotFound
    } else {
        ItemError::DynamoDb(err.to_string())
    }
}

/// Errors that can occur during item operations
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("DynamoDB error: {0}")]
    DynamoDb(String),

    #[error("Item not found")]
    NotFound,

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ProvisionedThroughputExceededException,
    };

    #[test]
    fn test_error_display() {
        assert_eq!(ItemError::NotFound.to_string(), "Item not found");
        assert_eq!(
            ItemError::DynamoDb("timeout".to_string()).to_string(),
            "DynamoDB error: timeout"
        );
    }

    #[test]
    fn test_update_on_absent_key_is_not_found() {
        let err = UpdateItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder().build(),
        );

        assert!(matches!(map_update_error(&err), ItemError::NotFound));
    }

    #[test]
    fn test_update_throttling_is_backend_error() {
        let err = UpdateItemError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder().build(),
        );

        assert!(matches!(map_update_error(&err), ItemError::DynamoDb(_)));
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        assert!(matches!(
            item_from_lookup("u1", None),
            Err(ItemError::NotFound)
        ));
    }

    #[test]
    fn test_lookup_hit_parses_item() {
        let item = Item {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        };

        let parsed = item_from_lookup("u1", Some(item.to_dynamodb())).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_lookup_malformed_record_is_parse_error() {
        let attributes = HashMap::from([
            ("ID".to_string(), AttributeValue::S("u1".to_string())),
            ("Name".to_string(), AttributeValue::S("Alice".to_string())),
        ]);

        assert!(matches!(
            item_from_lookup("u1", Some(attributes)),
            Err(ItemError::ParseError(_))
        ));
    }
}
