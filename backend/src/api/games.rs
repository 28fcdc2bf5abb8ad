use super::{store_failure, AppState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/list", axum::routing::get(list))
        .route("/history", axum::routing::get(history))
        .route("/add", axum::routing::post(add))
        .route("/:id", axum::routing::delete(remove))
}

#[tracing::instrument(skip(state))]
async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<axum::Json<Vec<common::GameRecord>>, StatusCode> {
    let games = state.store.list_all().await.map_err(store_failure)?;
    tracing::info!("Listing {} games", games.len());

    Ok(axum::Json(games))
}

#[tracing::instrument(skip(state))]
async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<axum::Json<Vec<common::GameSummary>>, StatusCode> {
    let games = state.store.list_all().await.map_err(store_failure)?;

    Ok(axum::Json(
        games.iter().map(analysis::standings::summary).collect(),
    ))
}

#[tracing::instrument(skip(state))]
async fn add(
    State(state): State<Arc<AppState>>,
    axum::Json(game): axum::Json<common::NewGame>,
) -> Result<(StatusCode, axum::Json<common::GameCreated>), (StatusCode, &'static str)> {
    if game.entries.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "A game needs at least one player"));
    }

    let id = state
        .store
        .insert(game.entries)
        .await
        .map_err(|e| (store_failure(e), "Storing the game failed"))?;
    tracing::info!("Added game {}", id);

    Ok((StatusCode::CREATED, axum::Json(common::GameCreated { id })))
}

#[tracing::instrument(skip(state))]
async fn remove(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> StatusCode {
    match state.store.delete_by_id(id).await {
        Ok(true) => {
            tracing::info!("Deleted game {}", id);
            StatusCode::NO_CONTENT
        }
        Ok(false) => {
            tracing::warn!("Game {} does not exist", id);
            StatusCode::NOT_FOUND
        }
        Err(e) => store_failure(e),
    }
}
