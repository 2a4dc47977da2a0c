// Shared fixtures for command/query tests

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use backend_domain::{
    now_utc, BoundedStream, QrCategory, QrCodeDraft, QrRegistry, Randomness, RuntimeConfig,
};
use tokio::sync::RwLock;

use crate::{AppState, Metrics};

/// Deterministic stand-in for the feed's random draws: always picks index 0
/// and answers the unique-visitor coin flip with a fixed value.
pub struct FixedRandomness {
    unique: bool,
}

impl FixedRandomness {
    pub fn unique() -> Self {
        Self { unique: true }
    }

    pub fn repeat() -> Self {
        Self { unique: false }
    }
}

impl Randomness for FixedRandomness {
    fn pick_index(&self, _len: usize) -> usize {
        0
    }

    fn chance(&self, _probability: f64) -> bool {
        self.unique
    }
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        public_base_url: "https://venuepulse.app".to_string(),
        event_log_capacity: 50,
        scan_log_capacity: 10,
        event_feed_interval_seconds: 10,
        scan_feed_interval_seconds: 8,
        unique_scan_probability: 0.7,
        manual_refresh_delay_ms: 0,
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn test_state(randomness: impl Randomness + 'static) -> AppState {
    let config = test_config();
    AppState {
        event_log: Arc::new(RwLock::new(BoundedStream::new(config.event_log_capacity))),
        scan_log: Arc::new(RwLock::new(BoundedStream::new(config.scan_log_capacity))),
        qr_registry: Arc::new(RwLock::new(QrRegistry::default())),
        randomness: Arc::new(randomness),
        metrics: Arc::new(Metrics::default()),
        live: Arc::new(AtomicBool::new(true)),
        config,
    }
}

/// State with a single active QR code already registered.
pub async fn seeded_state(randomness: impl Randomness + 'static) -> AppState {
    let state = test_state(randomness);
    state
        .qr_registry
        .write()
        .await
        .create(
            QrCodeDraft {
                name: "Main Entrance Check-in".to_string(),
                category: QrCategory::Checkin,
                description: "Primary entry point".to_string(),
                location: "Main Entrance".to_string(),
                expires_at: None,
                metadata: None,
            },
            &state.config.public_base_url,
            now_utc(),
        )
        .expect("seed qr code");
    state
}
