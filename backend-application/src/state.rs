use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use backend_domain::{BoundedStream, EventLog, QrRegistry, Randomness, RuntimeConfig, ScanRecord};
use tokio::sync::RwLock;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_log: Arc<RwLock<BoundedStream<EventLog>>>,
    pub scan_log: Arc<RwLock<BoundedStream<ScanRecord>>>,
    pub qr_registry: Arc<RwLock<QrRegistry>>,
    pub randomness: Arc<dyn Randomness>,
    pub metrics: Arc<Metrics>,
    /// Live/paused toggle for the simulated feed; pausing keeps buffers intact.
    pub live: Arc<AtomicBool>,
}
