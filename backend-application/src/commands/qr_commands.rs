use tracing::info;
use uuid::Uuid;

use backend_domain::{
    now_utc, EventActor, EventCategory, EventLog, QrCode, QrCodeDraft, ScanActor, ScanRecord,
    Severity,
};

use crate::{AppError, AppState};

pub async fn create_qr_code(state: &AppState, draft: QrCodeDraft) -> Result<QrCode, AppError> {
    let mut registry = state.qr_registry.write().await;
    let code = registry
        .create(draft, &state.config.public_base_url, now_utc())
        .map_err(|err| {
            state.metrics.record_command_error();
            AppError::from(err)
        })?;
    info!("created qr code '{}' ({})", code.name, code.id);
    Ok(code)
}

pub async fn toggle_qr_active(state: &AppState, id: &str) -> Result<QrCode, AppError> {
    let mut registry = state.qr_registry.write().await;
    let code = registry.toggle_active(id).map_err(|err| {
        state.metrics.record_command_error();
        AppError::from(err)
    })?;
    info!(
        "qr code '{}' is now {}",
        code.id,
        if code.is_active { "active" } else { "inactive" }
    );
    Ok(code)
}

/// Records one scan against an active QR code: counters move in the registry,
/// a ScanRecord lands in the scan stream, and a qr_scan entry lands in the
/// event log. Fails without touching any stream when the code is unknown or
/// inactive.
pub async fn record_scan(
    state: &AppState,
    qr_code_id: &str,
    actor: ScanActor,
    device_info: Option<String>,
) -> Result<ScanRecord, AppError> {
    let now = now_utc();
    let unique = state
        .randomness
        .chance(state.config.unique_scan_probability);

    let code = {
        let mut registry = state.qr_registry.write().await;
        registry.record_scan(qr_code_id, unique, now).map_err(|err| {
            state.metrics.record_command_error();
            AppError::from(err)
        })?
    };

    let scan = ScanRecord {
        id: Uuid::new_v4().to_string(),
        qr_code_id: qr_code_id.to_string(),
        actor,
        timestamp: now,
        location: code.location.clone(),
        device_info,
    };
    state.scan_log.write().await.push(scan.clone());

    let event = EventLog {
        id: Uuid::new_v4().to_string(),
        timestamp: now,
        category: EventCategory::QrScan,
        actor: Some(EventActor {
            name: scan.actor.name.clone(),
            email: scan.actor.email.clone(),
            avatar_ref: None,
        }),
        action: "QR Code Scan".to_string(),
        details: format!("Scanned '{}'", code.name),
        location: Some(code.location),
        session_ref: code.metadata.and_then(|metadata| metadata.session_ref),
        severity: Severity::Low,
    };
    state.event_log.write().await.push(event);

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_state, test_state, FixedRandomness};
    use backend_domain::QrCategory;

    fn draft(name: &str) -> QrCodeDraft {
        QrCodeDraft {
            name: name.to_string(),
            category: QrCategory::Checkin,
            description: "test".to_string(),
            location: "Main Entrance".to_string(),
            expires_at: None,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_url_and_zeroed_counters() {
        let state = test_state(FixedRandomness::unique());
        let code = create_qr_code(&state, draft("Workshop Check-in"))
            .await
            .expect("create");
        assert!(code.target_url.ends_with("/checkin/workshop-check-in"));
        assert!(code.is_active);
        assert_eq!(code.total_scans, 0);
    }

    #[tokio::test]
    async fn create_with_empty_name_is_validation_error() {
        let state = test_state(FixedRandomness::unique());
        let err = create_qr_code(&state, draft("")).await.expect_err("reject");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn record_scan_appends_to_both_streams() {
        let state = seeded_state(FixedRandomness::unique()).await;
        let id = state.qr_registry.read().await.codes()[0].id.clone();

        let scan = record_scan(
            &state,
            &id,
            ScanActor {
                id: "user1".to_string(),
                name: "Ayşe Yılmaz".to_string(),
                email: "ayse.yilmaz@teknosoft.com".to_string(),
            },
            Some("iPhone 15 Pro".to_string()),
        )
        .await
        .expect("scan");

        assert_eq!(scan.qr_code_id, id);
        let scans = state.scan_log.read().await.snapshot();
        assert_eq!(scans.len(), 1);
        let events = state.event_log.read().await.snapshot();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, EventCategory::QrScan);

        let code = state.qr_registry.read().await.get(&id).cloned().expect("code");
        assert_eq!(code.total_scans, 1);
        assert_eq!(code.unique_scans, 1);
    }

    #[tokio::test]
    async fn repeat_visitor_branch_skips_unique_counter() {
        let state = seeded_state(FixedRandomness::repeat()).await;
        let id = state.qr_registry.read().await.codes()[0].id.clone();
        record_scan(
            &state,
            &id,
            ScanActor {
                id: "user2".to_string(),
                name: "Mehmet Can".to_string(),
                email: "mehmet.can@tasarimci.com".to_string(),
            },
            None,
        )
        .await
        .expect("scan");
        let code = state.qr_registry.read().await.get(&id).cloned().expect("code");
        assert_eq!(code.total_scans, 1);
        assert_eq!(code.unique_scans, 0);
    }

    #[tokio::test]
    async fn scan_against_inactive_code_mutates_nothing() {
        let state = seeded_state(FixedRandomness::unique()).await;
        let id = state.qr_registry.read().await.codes()[0].id.clone();
        toggle_qr_active(&state, &id).await.expect("deactivate");

        let err = record_scan(
            &state,
            &id,
            ScanActor {
                id: "user3".to_string(),
                name: "Elif Demir".to_string(),
                email: "elif.demir@girisim.io".to_string(),
            },
            None,
        )
        .await
        .expect_err("inactive");
        assert!(matches!(err, AppError::InactiveTarget(_)));
        assert!(state.scan_log.read().await.is_empty());
        assert!(state.event_log.read().await.is_empty());
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_not_found() {
        let state = test_state(FixedRandomness::unique());
        let err = toggle_qr_active(&state, "missing").await.expect_err("absent");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
