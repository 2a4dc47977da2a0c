use chrono::{DateTime, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Relative-age bucket for display: "just now", minutes, hours, then the
/// calendar date.
pub fn format_relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(timestamp).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn relative_age_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 14, 30, 0).unwrap();
        assert_eq!(format_relative_age(now - Duration::seconds(30), now), "just now");
        assert_eq!(format_relative_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative_age(now - Duration::minutes(125), now), "2h ago");
        assert_eq!(
            format_relative_age(now - Duration::days(3), now),
            "2024-01-17"
        );
    }
}
