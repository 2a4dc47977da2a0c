use backend_domain::{
    filter_qr_codes, qr_stats, session_occupancy, QrCode, QrFilter, QrStats, ScanRecord,
    SessionOccupancy,
};

use crate::AppState;

pub async fn list_qr_codes(state: &AppState, filter: QrFilter) -> Vec<QrCode> {
    let registry = state.qr_registry.read().await;
    filter_qr_codes(registry.codes(), &filter)
}

pub async fn recent_scans(state: &AppState) -> Vec<ScanRecord> {
    state.scan_log.read().await.snapshot()
}

pub async fn registry_stats(state: &AppState) -> QrStats {
    let registry = state.qr_registry.read().await;
    qr_stats(registry.codes())
}

pub async fn list_session_occupancy(state: &AppState) -> Vec<SessionOccupancy> {
    let registry = state.qr_registry.read().await;
    session_occupancy(registry.codes())
}
