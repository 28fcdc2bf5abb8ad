use axum::extract::State;
use std::sync::Arc;

pub mod games;
pub mod stats;

pub struct AppState {
    pub store: Box<dyn crate::store::GameStore>,
    pub tracker: common::TrackerConfig,
}

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(welcome))
        .route("/config", axum::routing::get(config))
        .route("/stats", axum::routing::get(stats::report))
        .nest("/games", games::router())
        .with_state(Arc::new(state))
}

async fn welcome() -> axum::Json<common::ApiInfo> {
    axum::Json(common::ApiInfo {
        message: "Welcome to 7 Wonders Tracker API".to_owned(),
    })
}

async fn config(State(state): State<Arc<AppState>>) -> axum::Json<common::TrackerConfig> {
    axum::Json(state.tracker.clone())
}

fn store_failure(e: crate::store::StoreError) -> axum::http::StatusCode {
    tracing::error!("Accessing game store: {:?}", e);
    axum::http::StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
pub(crate) fn test_state(players: &[&str]) -> Arc<AppState> {
    Arc::new(AppState {
        store: Box::new(crate::store::MemoryStore::new()),
        tracker: common::TrackerConfig {
            players: players.iter().map(|p| p.to_string()).collect(),
            civilizations: crate::config::DEFAULT_CIVILIZATIONS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        },
    })
}
