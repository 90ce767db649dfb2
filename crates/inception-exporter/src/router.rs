//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let metrics_path = state.cfg().web.telemetry_path.clone();
    Router::new()
        .route("/", get(ops::landing))
        .route(&metrics_path, get(ops::metrics))
        .with_state(state)
}
