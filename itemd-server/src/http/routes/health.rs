//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::{ItemRepo, Session};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /health/db - succeeds iff the store answers a trivial query
async fn health_db(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let mut session = Session::acquire(&state.pool).await?;
    ItemRepo::new(&mut session).probe().await?;

    Ok(Json(HealthResponse { ok: true }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health/db", get(health_db))
}
