use axum::Router;

use backend_application::AppState;

use crate::handlers::{event_handlers, ops_handlers, qr_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/events",
            axum::routing::get(event_handlers::list_events),
        )
        .route(
            "/v1/events/stats",
            axum::routing::get(event_handlers::event_stats),
        )
        .route(
            "/v1/qr-codes",
            axum::routing::get(qr_handlers::list_qr_codes).post(qr_handlers::create_qr_code),
        )
        .route(
            "/v1/qr-codes/stats",
            axum::routing::get(qr_handlers::qr_stats),
        )
        .route(
            "/v1/qr-codes/:id/toggle",
            axum::routing::post(qr_handlers::toggle_qr_code),
        )
        .route(
            "/v1/qr-codes/:id/scan",
            axum::routing::post(qr_handlers::record_scan),
        )
        .route(
            "/v1/scans/recent",
            axum::routing::get(qr_handlers::recent_scans),
        )
        .route(
            "/v1/sessions/occupancy",
            axum::routing::get(qr_handlers::session_occupancy),
        )
        .route(
            "/v1/feed/auto-refresh",
            axum::routing::put(ops_handlers::set_auto_refresh),
        )
        .route(
            "/v1/feed/refresh",
            axum::routing::post(ops_handlers::manual_refresh),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
