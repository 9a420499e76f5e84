//! Item CRUD endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::error;

use super::AppState;
use crate::error::ApiError;
use keygate_core::Item;

pub(super) async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(item) = payload.map_err(|e| ApiError::bad_request("error creating item", e))?;

    state.keygate.items.create(&item).await.map_err(|e| {
        error!("Failed to store item {}: {}", item.id, e);
        ApiError::Internal("error storing item")
    })?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub(super) async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.keygate.items.get(&id).await.map_err(|e| {
        error!("Failed to retrieve item {}: {}", id, e);
        ApiError::Internal("error retrieving item")
    })?;

    item.map(Json).ok_or(ApiError::NotFound)
}

/// Overwrite the value at the path id; the echoed body is the request body as sent
pub(super) async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(item) = payload.map_err(|e| {
        ApiError::bad_request("failed to decode the request body for item update", e)
    })?;

    state.keygate.items.put(&id, &item.value).await.map_err(|e| {
        error!("Failed to update item {}: {}", id, e);
        ApiError::Internal("error updating item")
    })?;

    Ok(Json(item))
}

pub(super) async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.keygate.items.delete(&id).await.map_err(|e| {
        error!("Failed to delete item {}: {}", id, e);
        ApiError::Internal("error deleting item")
    })?;

    Ok(StatusCode::NO_CONTENT)
}
