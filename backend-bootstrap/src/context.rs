use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::{now_utc, BoundedStream, QrRegistry};
use backend_infrastructure::{seed_event_log, seed_qr_codes, seed_scan_log, AppConfig, ThreadRandomness};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let mut event_log = BoundedStream::new(runtime_config.event_log_capacity);
        let mut scan_log = BoundedStream::new(runtime_config.scan_log_capacity);
        let mut registry = QrRegistry::default();

        if config.seed_demo_data {
            let now = now_utc();
            let codes = seed_qr_codes(&runtime_config.public_base_url, now);
            // Seed vectors are already newest first.
            scan_log = BoundedStream::with_entries(
                runtime_config.scan_log_capacity,
                seed_scan_log(&codes, now),
            );
            event_log =
                BoundedStream::with_entries(runtime_config.event_log_capacity, seed_event_log(now));
            registry = QrRegistry::from_codes(codes);
            info!(
                qr_codes = registry.len(),
                events = event_log.len(),
                scans = scan_log.len(),
                "seeded demo data"
            );
        }

        let state = AppState {
            config: runtime_config,
            event_log: Arc::new(RwLock::new(event_log)),
            scan_log: Arc::new(RwLock::new(scan_log)),
            qr_registry: Arc::new(RwLock::new(registry)),
            randomness: Arc::new(ThreadRandomness),
            metrics: Arc::new(Metrics::default()),
            live: Arc::new(AtomicBool::new(true)),
        };

        Ok(Self { state })
    }
}
