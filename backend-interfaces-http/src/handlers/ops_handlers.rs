use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::commands::feed_commands;
use backend_application::AppState;
use backend_domain::EventLog;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Debug, serde::Deserialize)]
pub struct AutoRefreshPayload {
    pub on: bool,
}

pub async fn set_auto_refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AutoRefreshPayload>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    feed_commands::set_auto_refresh(&state, payload.on);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn manual_refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<EventLog>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = feed_commands::manual_refresh(&state).await;
    Ok(Json(events))
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> StatusCode {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    match timeout(timeout_duration, state.qr_registry.read()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
