// Event category value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Checkin,
    Checkout,
    QrScan,
    SessionJoin,
    SessionLeave,
    System,
    Error,
    Admin,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Checkin => "checkin",
            EventCategory::Checkout => "checkout",
            EventCategory::QrScan => "qr_scan",
            EventCategory::SessionJoin => "session_join",
            EventCategory::SessionLeave => "session_leave",
            EventCategory::System => "system",
            EventCategory::Error => "error",
            EventCategory::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "checkin" => Some(EventCategory::Checkin),
            "checkout" => Some(EventCategory::Checkout),
            "qr_scan" => Some(EventCategory::QrScan),
            "session_join" => Some(EventCategory::SessionJoin),
            "session_leave" => Some(EventCategory::SessionLeave),
            "system" => Some(EventCategory::System),
            "error" => Some(EventCategory::Error),
            "admin" => Some(EventCategory::Admin),
            _ => None,
        }
    }
}
