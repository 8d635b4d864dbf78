//! Item CRUD endpoints
//!
//! Each handler is a thin adapter: decode the request, perform exactly one
//! repository call, translate the outcome into an HTTP status.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::db::Item;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Plain success message body
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// POST /item
///
/// A malformed body is rejected with 400 rather than silently decoded
/// into zero-valued fields.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(item) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    state.items.put(&item).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Successfully added item")),
    ))
}

/// GET /item/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.get(&id).await?;

    Ok(Json(item))
}

/// PUT /item/:id
///
/// The path id identifies the record; an id in the body is ignored.
/// Updating a key that does not exist yields 404.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    state.items.update(&id, &body.name, &body.email).await?;

    Ok(Json(MessageResponse::new("Successfully updated item")))
}

/// DELETE /item/:id
///
/// Idempotent: deleting an absent key still reports success.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.items.delete(&id).await?;

    Ok(Json(MessageResponse::new("Successfully deleted item")))
}

/// Body for PUT /item/:id
///
/// Absent fields overwrite the stored attributes with empty values;
/// there is no read-before-write merge.
#[derive(Debug, serde::Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_defaults() {
        let body: UpdateItemRequest = serde_json::from_str("{}").unwrap();
        assert!(body.id.is_none());
        assert_eq!(body.name, "");
        assert_eq!(body.email, "");
    }

    #[test]
    fn test_update_request_full_body() {
        let body: UpdateItemRequest =
            serde_json::from_str(r#"{"id":"u1","name":"Alice2","email":"a2@x.com"}"#).unwrap();
        assert_eq!(body.id.as_deref(), Some("u1"));
        assert_eq!(body.name, "Alice2");
        assert_eq!(body.email, "a2@x.com");
    }
}
