//! HTTP endpoints.
//!
//! - `/`               : landing page linking to the metrics path
//! - `<telemetry_path>`: Prometheus text format (one upstream poll per request)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::{render, TEXT_CONTENT_TYPE};

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.cfg().web.telemetry_path))
}

fn landing_page(metrics_path: &str) -> String {
    format!(
        "<html>\n\
         <head><title>Prometheus Inception Exporter</title></head>\n\
         <body>\n\
         <h1>Prometheus Inception Exporter</h1>\n\
         <p><a href='{metrics_path}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Always 200: upstream failures degrade the body, never the status.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let samples = state.collectors().gather().await;
    let body = render(&samples);

    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body).into_response()
}
