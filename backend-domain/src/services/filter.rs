// Filter service
// Conjunction of independent predicates over a stream or registry snapshot;
// an unset predicate always passes

use serde::Deserialize;

use crate::entities::{EventLog, QrCode};
use crate::value_objects::{EventCategory, QrCategory, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrStatusFilter {
    Active,
    Inactive,
}

impl QrStatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(QrStatusFilter::Active),
            "inactive" => Some(QrStatusFilter::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub query: Option<String>,
    pub category: Option<EventCategory>,
    pub severity: Option<Severity>,
}

impl EventFilter {
    pub fn matches(&self, event: &EventLog) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if event.severity != severity {
                return false;
            }
        }
        match needle(&self.query) {
            None => true,
            Some(needle) => {
                contains_ci(&event.action, &needle)
                    || contains_ci(&event.details, &needle)
                    || event.actor.as_ref().is_some_and(|actor| {
                        contains_ci(&actor.name, &needle) || contains_ci(&actor.email, &needle)
                    })
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QrFilter {
    pub query: Option<String>,
    pub category: Option<QrCategory>,
    pub status: Option<QrStatusFilter>,
}

impl QrFilter {
    pub fn matches(&self, code: &QrCode) -> bool {
        if let Some(category) = self.category {
            if code.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            let wanted = status == QrStatusFilter::Active;
            if code.is_active != wanted {
                return false;
            }
        }
        match needle(&self.query) {
            None => true,
            Some(needle) => {
                contains_ci(&code.name, &needle)
                    || contains_ci(&code.description, &needle)
                    || contains_ci(&code.location, &needle)
            }
        }
    }
}

pub fn filter_events(events: &[EventLog], filter: &EventFilter) -> Vec<EventLog> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

pub fn filter_qr_codes(codes: &[QrCode], filter: &QrFilter) -> Vec<QrCode> {
    codes
        .iter()
        .filter(|code| filter.matches(code))
        .cloned()
        .collect()
}

fn needle(query: &Option<String>) -> Option<String> {
    let raw = query.as_deref()?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
