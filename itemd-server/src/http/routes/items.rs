//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Item, ItemRepo, Session};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ItemTitle;

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
        }
    }
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: i32,
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    // Rejecting bad input must not cost a session
    let title = ItemTitle::new(&req.title)?;

    let mut session = Session::acquire(&state.pool).await?;
    let item = ItemRepo::new(&mut session)
        .create(title, req.description)
        .await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /items - list all items, newest first
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let mut session = Session::acquire(&state.pool).await?;
    let items = ItemRepo::new(&mut session).list().await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// DELETE /items/{id} - delete an item by id
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut session = Session::acquire(&state.pool).await?;
    ItemRepo::new(&mut session).delete(id).await?;
    session.commit().await?;

    Ok(Json(DeleteResponse { deleted: true, id }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", delete(delete_item))
}
