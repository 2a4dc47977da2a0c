// Runtime configuration shared across layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub public_base_url: String,
    pub event_log_capacity: usize,
    pub scan_log_capacity: usize,
    pub event_feed_interval_seconds: u64,
    pub scan_feed_interval_seconds: u64,
    pub unique_scan_probability: f64,
    pub manual_refresh_delay_ms: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
