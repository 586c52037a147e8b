use super::extract::{ItemBody, ItemId};
use crate::db::DbItem;
use crate::error::ItemstoreError;
use crate::server::router::AppState;
use axum::{Json, extract::State};

/// POST /items/
///
/// Responds 200 with the stored item, including the id SQLite assigned.
pub async fn create_item(
    State(state): State<AppState>,
    ItemBody(payload): ItemBody,
) -> Result<Json<DbItem>, ItemstoreError> {
    let item = state.store.create(payload).await?;
    Ok(Json(item))
}

/// GET /items/{item_id}
pub async fn read_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<DbItem>, ItemstoreError> {
    let item = state.store.get(id).await?;
    Ok(Json(item))
}

/// GET /items/
///
/// An empty table yields `[]`, never an error.
pub async fn read_all_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<DbItem>>, ItemstoreError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// PUT /items/{item_id}
///
/// The write is attempted unconditionally; 404 comes from the confirming read.
pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ItemBody(payload): ItemBody,
) -> Result<Json<DbItem>, ItemstoreError> {
    let item = state.store.update(id, payload).await?;
    Ok(Json(item))
}

/// DELETE /items/{item_id}
///
/// Returns the item as it was just before deletion.
pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<DbItem>, ItemstoreError> {
    let item = state.store.delete(id).await?;
    Ok(Json(item))
}
