// Aggregation service
// Summary statistics over stream/registry snapshots; empty inputs degrade to
// zeroes, never to errors or NaN

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::QrCode;
use crate::entities::EventLog;
use crate::value_objects::{EventCategory, Occupancy};

#[derive(Debug, Clone, Serialize)]
pub struct EventLogStats {
    pub total: usize,
    pub checkins: usize,
    pub qr_scans: usize,
    pub errors: usize,
    pub by_category: HashMap<String, usize>,
}

pub fn event_log_stats(events: &[EventLog]) -> EventLogStats {
    let mut by_category: HashMap<String, usize> = HashMap::new();
    for event in events {
        *by_category.entry(event.category.as_str().to_string()).or_default() += 1;
    }
    let count = |category: EventCategory| {
        by_category.get(category.as_str()).copied().unwrap_or_default()
    };
    EventLogStats {
        total: events.len(),
        checkins: count(EventCategory::Checkin),
        qr_scans: count(EventCategory::QrScan),
        errors: count(EventCategory::Error),
        by_category,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QrStats {
    pub total_codes: usize,
    pub active_codes: usize,
    pub total_scans: u64,
    pub total_unique_scans: u64,
    pub unique_ratio: f64,
}

pub fn qr_stats(codes: &[QrCode]) -> QrStats {
    let total_scans: u64 = codes.iter().map(|code| code.total_scans).sum();
    let total_unique_scans: u64 = codes.iter().map(|code| code.unique_scans).sum();
    let unique_ratio = if total_scans == 0 {
        0.0
    } else {
        total_unique_scans as f64 / total_scans as f64
    };
    QrStats {
        total_codes: codes.len(),
        active_codes: codes.iter().filter(|code| code.is_active).count(),
        total_scans,
        total_unique_scans,
        unique_ratio,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionOccupancy {
    pub qr_code_id: String,
    pub session: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ref: Option<String>,
    pub attendees: u64,
    pub capacity: u32,
    pub percentage: f64,
    pub tier: Occupancy,
}

/// Occupancy rows for every code carrying a capacity in its metadata.
/// Unique scans stand in for the attendee count.
pub fn session_occupancy(codes: &[QrCode]) -> Vec<SessionOccupancy> {
    codes
        .iter()
        .filter_map(|code| {
            let metadata = code.metadata.as_ref()?;
            let capacity = metadata.capacity.filter(|capacity| *capacity > 0)?;
            let attendees = code.unique_scans;
            let percentage = attendees as f64 / capacity as f64 * 100.0;
            Some(SessionOccupancy {
                qr_code_id: code.id.clone(),
                session: code.name.clone(),
                session_ref: metadata.session_ref.clone(),
                attendees,
                capacity,
                percentage,
                tier: Occupancy::from_percentage(percentage),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{QrMetadata, QrRegistry, QrCodeDraft};
    use crate::value_objects::{QrCategory, Severity};
    use chrono::Utc;

    fn event(category: EventCategory) -> EventLog {
        EventLog {
            id: "e".to_string(),
            timestamp: Utc::now(),
            category,
            actor: None,
            action: String::new(),
            details: String::new(),
            location: None,
            session_ref: None,
            severity: Severity::Low,
        }
    }

    fn code(name: &str, capacity: Option<u32>) -> QrCode {
        let mut registry = QrRegistry::default();
        registry
            .create(
                QrCodeDraft {
                    name: name.to_string(),
                    category: QrCategory::Session,
                    description: String::new(),
                    location: String::new(),
                    expires_at: None,
                    metadata: capacity.map(|capacity| QrMetadata {
                        session_ref: None,
                        capacity: Some(capacity),
                        max_scans_per_user: None,
                    }),
                },
                "https://venuepulse.app",
                Utc::now(),
            )
            .expect("create")
    }

    #[test]
    fn event_stats_tolerate_empty_streams() {
        let stats = event_log_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.checkins, 0);
        assert_eq!(stats.qr_scans, 0);
        assert_eq!(stats.errors, 0);
    }

    #[test]
    fn event_stats_count_per_category() {
        let events = vec![
            event(EventCategory::Checkin),
            event(EventCategory::Checkin),
            event(EventCategory::QrScan),
            event(EventCategory::Error),
            event(EventCategory::System),
        ];
        let stats = event_log_stats(&events);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.checkins, 2);
        assert_eq!(stats.qr_scans, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.by_category.get("system"), Some(&1));
    }

    #[test]
    fn qr_stats_on_empty_registry_have_zero_ratio() {
        let stats = qr_stats(&[]);
        assert_eq!(stats.total_scans, 0);
        assert_eq!(stats.unique_ratio, 0.0);
        assert!(stats.unique_ratio.is_finite());
    }

    #[test]
    fn qr_stats_sum_counters_and_actives() {
        let mut first = code("Keynote", None);
        first.total_scans = 100;
        first.unique_scans = 80;
        let mut second = code("Workshop", None);
        second.total_scans = 100;
        second.unique_scans = 60;
        second.is_active = false;

        let stats = qr_stats(&[first, second]);
        assert_eq!(stats.total_codes, 2);
        assert_eq!(stats.active_codes, 1);
        assert_eq!(stats.total_scans, 200);
        assert_eq!(stats.total_unique_scans, 140);
        assert!((stats.unique_ratio - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn occupancy_skips_codes_without_capacity() {
        let with_capacity = code("Keynote", Some(100));
        let without = code("Feedback", None);
        let rows = session_occupancy(&[with_capacity, without]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].session, "Keynote");
    }

    #[test]
    fn occupancy_percentage_drives_the_tier() {
        let mut session = code("Keynote", Some(100));
        session.unique_scans = 95;
        let rows = session_occupancy(&[session]);
        assert_eq!(rows[0].percentage, 95.0);
        assert_eq!(rows[0].tier, Occupancy::Full);
    }
}
