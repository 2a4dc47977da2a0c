use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::qr_commands;
use backend_application::queries::qr_queries;
use backend_application::AppState;
use backend_domain::{
    QrCategory, QrCode, QrCodeDraft, QrFilter, QrStats, QrStatusFilter, ScanActor, ScanRecord,
    SessionOccupancy,
};

use crate::error::HttpError;
use crate::handlers::event_handlers::unset_or;
use crate::middleware::authorize;

#[derive(Debug, Default, serde::Deserialize)]
pub struct QrListQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ScanPayload {
    pub actor: ScanActor,
    #[serde(default)]
    pub device_info: Option<String>,
}

fn parse_filter(query: QrListQuery) -> Result<QrFilter, HttpError> {
    let category = match unset_or(&query.category) {
        None => None,
        Some(raw) => Some(
            QrCategory::parse(raw)
                .ok_or_else(|| HttpError::BadRequest(format!("unknown category '{}'", raw)))?,
        ),
    };
    let status = match unset_or(&query.status) {
        None => None,
        Some(raw) => Some(
            QrStatusFilter::parse(raw)
                .ok_or_else(|| HttpError::BadRequest(format!("unknown status '{}'", raw)))?,
        ),
    };
    Ok(QrFilter {
        query: query.query,
        category,
        status,
    })
}

pub async fn list_qr_codes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<QrListQuery>,
) -> Result<Json<Vec<QrCode>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let filter = parse_filter(query)?;
    let codes = qr_queries::list_qr_codes(&state, filter).await;
    Ok(Json(codes))
}

pub async fn create_qr_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<QrCodeDraft>,
) -> Result<(StatusCode, Json<QrCode>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let code = qr_commands::create_qr_code(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(code)))
}

pub async fn toggle_qr_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<QrCode>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let code = qr_commands::toggle_qr_active(&state, &id).await?;
    Ok(Json(code))
}

pub async fn record_scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<ScanPayload>,
) -> Result<Json<ScanRecord>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let scan = qr_commands::record_scan(&state, &id, payload.actor, payload.device_info).await?;
    Ok(Json(scan))
}

pub async fn qr_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<QrStats>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let stats = qr_queries::registry_stats(&state).await;
    Ok(Json(stats))
}

pub async fn recent_scans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ScanRecord>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let scans = qr_queries::recent_scans(&state).await;
    Ok(Json(scans))
}

pub async fn session_occupancy(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SessionOccupancy>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let sessions = qr_queries::list_session_occupancy(&state).await;
    Ok(Json(sessions))
}
