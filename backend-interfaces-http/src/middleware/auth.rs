use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: token.map(ToString::to_string),
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

    #[test]
    fn no_configured_token_allows_all() {
        assert!(authorize(&config(None), &HeaderMap::new()));
    }

    #[test]
    fn configured_token_requires_matching_bearer() {
        let config = config(Some("secret"));
        assert!(!authorize(&config, &HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        assert!(!authorize(&config, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&config, &headers));
    }

    #[test]
    fn bare_or_empty_bearer_is_rejected() {
        let config = config(Some("secret"));
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("secret"));
        assert!(!authorize(&config, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert!(!authorize(&config, &headers));
    }
}
