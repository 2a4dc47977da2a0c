// QR code category value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrCategory {
    Checkin,
    Session,
    Feedback,
    Networking,
    Custom,
}

impl QrCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrCategory::Checkin => "checkin",
            QrCategory::Session => "session",
            QrCategory::Feedback => "feedback",
            QrCategory::Networking => "networking",
            QrCategory::Custom => "custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "checkin" => Some(QrCategory::Checkin),
            "session" => Some(QrCategory::Session),
            "feedback" => Some(QrCategory::Feedback),
            "networking" => Some(QrCategory::Networking),
            "custom" => Some(QrCategory::Custom),
            _ => None,
        }
    }
}
