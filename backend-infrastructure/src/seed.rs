// Demo seed data
// Mirrors the state of a mid-sized conference a few hours into its first day.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use backend_domain::{
    slugify, EventActor, EventCategory, EventLog, QrCategory, QrCode, QrMetadata, ScanActor,
    ScanRecord, Severity,
};

fn seed_code(
    base_url: &str,
    now: DateTime<Utc>,
    name: &str,
    category: QrCategory,
    description: &str,
    location: &str,
    is_active: bool,
    total_scans: u64,
    unique_scans: u64,
    expires_at: Option<DateTime<Utc>>,
    metadata: Option<QrMetadata>,
) -> QrCode {
    QrCode {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        target_url: format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            category.as_str(),
            slugify(name)
        ),
        is_active,
        created_at: now - Duration::days(3),
        expires_at,
        location: location.to_string(),
        total_scans,
        unique_scans,
        last_scanned_at: (total_scans > 0).then(|| now - Duration::minutes(2)),
        metadata,
    }
}

pub fn seed_qr_codes(base_url: &str, now: DateTime<Utc>) -> Vec<QrCode> {
    vec![
        seed_code(
            base_url,
            now,
            "Main Entrance Check-in",
            QrCategory::Checkin,
            "Primary check-in point for all attendees",
            "Main Entrance",
            true,
            1234,
            892,
            None,
            None,
        ),
        seed_code(
            base_url,
            now,
            "Opening Keynote",
            QrCategory::Session,
            "Session check-in for the opening keynote",
            "Main Hall",
            true,
            856,
            823,
            Some(now + Duration::hours(6)),
            Some(QrMetadata {
                session_ref: Some("keynote".to_string()),
                capacity: Some(1000),
                max_scans_per_user: Some(1),
            }),
        ),
        seed_code(
            base_url,
            now,
            "Tech Talk A",
            QrCategory::Session,
            "Session check-in for the afternoon tech talk",
            "Room 101",
            true,
            245,
            230,
            Some(now + Duration::hours(8)),
            Some(QrMetadata {
                session_ref: Some("tech-talk-a".to_string()),
                capacity: Some(300),
                max_scans_per_user: Some(1),
            }),
        ),
        seed_code(
            base_url,
            now,
            "Feedback Collection",
            QrCategory::Feedback,
            "Post-session feedback survey",
            "All Rooms",
            true,
            456,
            398,
            None,
            None,
        ),
        seed_code(
            base_url,
            now,
            "Networking Lounge",
            QrCategory::Networking,
            "Contact exchange in the networking area",
            "Lounge",
            false,
            123,
            98,
            None,
            None,
        ),
    ]
}

fn seed_event(
    now: DateTime<Utc>,
    minutes_ago: i64,
    category: EventCategory,
    actor: Option<(&str, &str)>,
    action: &str,
    details: &str,
    location: Option<&str>,
    session_ref: Option<&str>,
    severity: Severity,
) -> EventLog {
    EventLog {
        id: Uuid::new_v4().to_string(),
        timestamp: now - Duration::minutes(minutes_ago),
        category,
        actor: actor.map(|(name, email)| EventActor {
            name: name.to_string(),
            email: email.to_string(),
            avatar_ref: None,
        }),
        action: action.to_string(),
        details: details.to_string(),
        location: location.map(ToString::to_string),
        session_ref: session_ref.map(ToString::to_string),
        severity,
    }
}

/// Newest first, matching stream insertion order.
pub fn seed_event_log(now: DateTime<Utc>) -> Vec<EventLog> {
    vec![
        seed_event(
            now,
            1,
            EventCategory::Checkin,
            Some(("Ayşe Yılmaz", "ayse@example.com")),
            "Event Check-in",
            "Checked in at the main entrance",
            Some("Main Entrance"),
            None,
            Severity::Low,
        ),
        seed_event(
            now,
            4,
            EventCategory::QrScan,
            Some(("Mehmet Can", "mehmet@example.com")),
            "QR Code Scan",
            "Scanned 'Opening Keynote'",
            Some("Main Hall"),
            Some("keynote"),
            Severity::Low,
        ),
        seed_event(
            now,
            9,
            EventCategory::SessionJoin,
            Some(("Elif Demir", "elif@example.com")),
            "Session Join",
            "Joined 'Tech Talk A'",
            Some("Room 101"),
            Some("tech-talk-a"),
            Severity::Low,
        ),
        seed_event(
            now,
            15,
            EventCategory::Error,
            None,
            "Scan Failure",
            "QR scan rejected: code expired",
            Some("Side Entrance"),
            None,
            Severity::High,
        ),
        seed_event(
            now,
            22,
            EventCategory::System,
            None,
            "Feed Restarted",
            "Ingestion feed reconnected after a dropped subscription",
            None,
            None,
            Severity::Medium,
        ),
        seed_event(
            now,
            35,
            EventCategory::Admin,
            Some(("Ali Rıza", "ali@example.com")),
            "QR Code Deactivated",
            "Deactivated 'Networking Lounge'",
            Some("Lounge"),
            None,
            Severity::Medium,
        ),
        seed_event(
            now,
            48,
            EventCategory::Checkout,
            Some(("John Doe", "john@example.com")),
            "Event Check-out",
            "Checked out at the main entrance",
            Some("Main Entrance"),
            None,
            Severity::Low,
        ),
        seed_event(
            now,
            63,
            EventCategory::SessionLeave,
            Some(("Jane Smith", "jane@example.com")),
            "Session Leave",
            "Left 'Opening Keynote' early",
            Some("Main Hall"),
            Some("keynote"),
            Severity::Low,
        ),
    ]
}

/// Newest first; references the first three seeded codes.
pub fn seed_scan_log(codes: &[QrCode], now: DateTime<Utc>) -> Vec<ScanRecord> {
    let visitors = [
        ("John Doe", "john@example.com", "iPhone 15 Pro"),
        ("Jane Smith", "jane@example.com", "Samsung Galaxy S24"),
        ("Bob Wilson", "bob@example.com", "MacBook Pro"),
    ];
    codes
        .iter()
        .take(visitors.len())
        .zip(visitors.iter())
        .enumerate()
        .map(|(index, (code, (name, email, device)))| ScanRecord {
            id: Uuid::new_v4().to_string(),
            qr_code_id: code.id.clone(),
            actor: ScanActor {
                id: format!("visitor-{}", Uuid::new_v4()),
                name: name.to_string(),
                email: email.to_string(),
            },
            timestamp: now - Duration::minutes(2 * (index as i64 + 1)),
            location: code.location.clone(),
            device_info: Some(device.to_string()),
        })
        .collect()
}
