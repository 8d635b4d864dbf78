//! Database models
//!
//! Record types stored in DynamoDB and their attribute-map conversions.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The sole record entity: a flat item keyed by `id`.
///
/// The HTTP surface uses lowercase field names; the DynamoDB attributes are
/// `ID` (partition key), `Name`, and `Email`. `email` is a generic secondary
/// field and is not validated as an email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Item {
    /// Parse an item from a DynamoDB attribute map
    ///
    /// Returns `None` if any attribute is missing or not a string.
    pub fn from_dynamodb(attributes: &HashMap<String, AttributeValue>) -> Option<Self> {
        Some(Self {
            id: attributes.get("ID")?.as_s().ok()?.clone(),
            name: attributes.get("Name")?.as_s().ok()?.clone(),
            email: attributes.get("Email")?.as_s().ok()?.clone(),
        })
    }

    /// Convert the item into a DynamoDB attribute map
    pub fn to_dynamodb(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("ID".to_string(), AttributeValue::S(self.id.clone())),
            ("Name".to_string(), AttributeValue::S(self.name.clone())),
            ("Email".to_string(), AttributeValue::S(self.email.clone())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_map_round_trip() {
        let item = Item {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        };

        let attributes = item.to_dynamodb();
        assert_eq!(attributes.len(), 3);

        let parsed = Item::from_dynamodb(&attributes).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_from_dynamodb_missing_attribute() {
        let attributes = HashMap::from([
            ("ID".to_string(), AttributeValue::S("u1".to_string())),
            ("Name".to_string(), AttributeValue::S("Alice".to_string())),
        ]);

        assert!(Item::from_dynamodb(&attributes).is_none());
    }

    #[test]
    fn test_from_dynamodb_wrong_type() {
        let attributes = HashMap::from([
            ("ID".to_string(), AttributeValue::S("u1".to_string())),
            ("Name".to_string(), AttributeValue::N("42".to_string())),
            ("Email".to_string(), AttributeValue::S("a@x.com".to_string())),
        ]);

        assert!(Item::from_dynamodb(&attributes).is_none());
    }

    #[test]
    fn test_json_decoding_defaults_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        assert_eq!(item.id, "u1");
        assert_eq!(item.name, "");
        assert_eq!(item.email, "");
    }

    #[test]
    fn test_json_decoding_requires_id() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"name":"Alice"}"#);
        assert!(result.is_err());
    }
}
