use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub public_base_url: String,
    pub event_log_capacity: usize,
    pub scan_log_capacity: usize,
    pub event_feed_interval_seconds: u64,
    pub scan_feed_interval_seconds: u64,
    pub unique_scan_probability: f64,
    pub manual_refresh_delay_ms: u64,
    pub seed_demo_data: bool,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            public_base_url: "https://venuepulse.app".to_string(),
            event_log_capacity: 50,
            scan_log_capacity: 10,
            event_feed_interval_seconds: 10,
            scan_feed_interval_seconds: 8,
            unique_scan_probability: 0.7,
            manual_refresh_delay_ms: 1000,
            seed_demo_data: true,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("VENUEPULSE_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        self.public_base_url = self.public_base_url.trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.public_base_url.trim().is_empty() {
            return Err(anyhow!("public_base_url must not be empty"));
        }
        if self.event_log_capacity == 0 || self.scan_log_capacity == 0 {
            return Err(anyhow!("stream capacities must be greater than 0"));
        }
        if self.event_feed_interval_seconds == 0 || self.scan_feed_interval_seconds == 0 {
            return Err(anyhow!("feed intervals must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.unique_scan_probability) {
            return Err(anyhow!("unique_scan_probability must be within 0.0..=1.0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            public_base_url: self.public_base_url.clone(),
            event_log_capacity: self.event_log_capacity,
            scan_log_capacity: self.scan_log_capacity,
            event_feed_interval_seconds: self.event_feed_interval_seconds,
            scan_feed_interval_seconds: self.scan_feed_interval_seconds,
            unique_scan_probability: self.unique_scan_probability,
            manual_refresh_delay_ms: self.manual_refresh_delay_ms,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("VENUEPULSE_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("VENUEPULSE_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("VENUEPULSE_PUBLIC_BASE_URL") {
            self.public_base_url = value;
        }
        if let Ok(value) = env::var("VENUEPULSE_EVENT_LOG_CAPACITY") {
            self.event_log_capacity = value.parse().unwrap_or(self.event_log_capacity);
        }
        if let Ok(value) = env::var("VENUEPULSE_SCAN_LOG_CAPACITY") {
            self.scan_log_capacity = value.parse().unwrap_or(self.scan_log_capacity);
        }
        if let Ok(value) = env::var("VENUEPULSE_EVENT_FEED_INTERVAL_SECONDS") {
            self.event_feed_interval_seconds =
                value.parse().unwrap_or(self.event_feed_interval_seconds);
        }
        if let Ok(value) = env::var("VENUEPULSE_SCAN_FEED_INTERVAL_SECONDS") {
            self.scan_feed_interval_seconds =
                value.parse().unwrap_or(self.scan_feed_interval_seconds);
        }
        if let Ok(value) = env::var("VENUEPULSE_UNIQUE_SCAN_PROBABILITY") {
            self.unique_scan_probability = value.parse().unwrap_or(self.unique_scan_probability);
        }
        if let Ok(value) = env::var("VENUEPULSE_MANUAL_REFRESH_DELAY_MS") {
            self.manual_refresh_delay_ms = value.parse().unwrap_or(self.manual_refresh_delay_ms);
        }
        if let Ok(value) = env::var("VENUEPULSE_SEED_DEMO_DATA") {
            self.seed_demo_data = value.parse().unwrap_or(self.seed_demo_data);
        }
        if let Ok(value) = env::var("VENUEPULSE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("VENUEPULSE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = AppConfig::default();
        config.validate().expect("defaults valid");
        assert_eq!(config.event_log_capacity, 50);
        assert_eq!(config.scan_log_capacity, 10);
    }

    #[test]
    fn normalize_blanks_empty_token_and_trims_base_url() {
        let mut config = AppConfig {
            api_token: Some("   ".to_string()),
            public_base_url: "https://venuepulse.app/".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.api_token.is_none());
        assert_eq!(config.public_base_url, "https://venuepulse.app");
    }

    #[test]
    fn validate_rejects_out_of_range_probability() {
        let config = AppConfig {
            unique_scan_probability: 1.5,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_capacity() {
        let config = AppConfig {
            event_log_capacity: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
