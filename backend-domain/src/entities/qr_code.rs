// QR code entity and registry
// Definitions are mutated in place by create / toggle / scan only; no delete

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::QrCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scans_per_user: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCode {
    pub id: String,
    pub name: String,
    pub category: QrCategory,
    pub description: String,
    pub target_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub location: String,
    pub total_scans: u64,
    pub unique_scans: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scanned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QrMetadata>,
}

impl QrCode {
    pub fn unique_ratio(&self) -> f64 {
        if self.total_scans == 0 {
            0.0
        } else {
            self.unique_scans as f64 / self.total_scans as f64
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QrCodeDraft {
    pub name: String,
    pub category: QrCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<QrMetadata>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("qr code name must not be empty")]
    EmptyName,
    #[error("qr code '{0}' not found")]
    NotFound(String),
    #[error("qr code '{0}' is inactive")]
    InactiveTarget(String),
}

#[derive(Debug, Clone, Default)]
pub struct QrRegistry {
    codes: Vec<QrCode>,
}

impl QrRegistry {
    pub fn from_codes(codes: Vec<QrCode>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[QrCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QrCode> {
        self.codes.iter().find(|code| code.id == id)
    }

    pub fn create(
        &mut self,
        draft: QrCodeDraft,
        base_url: &str,
        now: DateTime<Utc>,
    ) -> Result<QrCode, RegistryError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let code = QrCode {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: draft.category,
            description: draft.description,
            target_url: format!(
                "{}/{}/{}",
                base_url.trim_end_matches('/'),
                draft.category.as_str(),
                slugify(name)
            ),
            is_active: true,
            created_at: now,
            expires_at: draft.expires_at,
            location: draft.location,
            total_scans: 0,
            unique_scans: 0,
            last_scanned_at: None,
            metadata: draft.metadata,
        };
        self.codes.push(code.clone());
        Ok(code)
    }

    pub fn toggle_active(&mut self, id: &str) -> Result<QrCode, RegistryError> {
        let code = self
            .codes
            .iter_mut()
            .find(|code| code.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        code.is_active = !code.is_active;
        Ok(code.clone())
    }

    /// Bumps the scan counters of an active code. Maintains
    /// `unique_scans <= total_scans`.
    pub fn record_scan(
        &mut self,
        id: &str,
        unique: bool,
        now: DateTime<Utc>,
    ) -> Result<QrCode, RegistryError> {
        let code = self
            .codes
            .iter_mut()
            .find(|code| code.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        if !code.is_active {
            return Err(RegistryError::InactiveTarget(id.to_string()));
        }
        code.total_scans += 1;
        if unique {
            code.unique_scans += 1;
        }
        code.last_scanned_at = Some(now);
        Ok(code.clone())
    }
}

/// Lowercases and collapses whitespace runs to hyphens.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
