use super::{store_failure, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

#[tracing::instrument(skip(state))]
pub async fn report(
    State(state): State<Arc<AppState>>,
) -> Result<axum::Json<common::Report>, StatusCode> {
    let games = state.store.list_all().await.map_err(store_failure)?;
    tracing::info!("Computing stats over {} games", games.len());

    Ok(axum::Json(analysis::report(&games, &state.tracker)))
}
