// Simulated feed ticks
// A background feed must never crash the dashboard: every failure inside a
// tick degrades to a skip, observable through the metrics counters.

use std::sync::atomic::Ordering;

use tracing::{debug, info, warn};
use uuid::Uuid;

use backend_domain::{now_utc, EventActor, EventCategory, EventLog, ScanActor, Severity};

use crate::commands::qr_commands;
use crate::AppState;

const FEED_CATEGORIES: [EventCategory; 4] = [
    EventCategory::Checkin,
    EventCategory::Checkout,
    EventCategory::QrScan,
    EventCategory::SessionJoin,
];
const FEED_ACTORS: [&str; 4] = ["Ayşe Yılmaz", "Mehmet Can", "Elif Demir", "Ali Rıza"];
const FEED_LOCATIONS: [&str; 3] = ["Main Entrance", "Room 101", "Room 205"];
const SCAN_VISITORS: [&str; 4] = ["John Doe", "Jane Smith", "Bob Wilson", "Alice Brown"];
const SCAN_DEVICES: [&str; 4] = ["iPhone 15", "Samsung Galaxy S24", "MacBook Pro", "iPad Air"];

/// Synthesizes one event-log entry from the fixed candidate pools.
pub async fn event_feed_tick(state: &AppState) {
    state.metrics.record_tick();
    if !state.live.load(Ordering::Relaxed) {
        debug!("event tick skipped: feed paused");
        return;
    }

    let category = FEED_CATEGORIES[state.randomness.pick_index(FEED_CATEGORIES.len())];
    let name = FEED_ACTORS[state.randomness.pick_index(FEED_ACTORS.len())];
    let location = FEED_LOCATIONS[state.randomness.pick_index(FEED_LOCATIONS.len())];

    let event = EventLog {
        id: Uuid::new_v4().to_string(),
        timestamp: now_utc(),
        category,
        actor: Some(EventActor {
            name: name.to_string(),
            email: "attendee@example.com".to_string(),
            avatar_ref: None,
        }),
        action: "Live Event".to_string(),
        details: "Simulated real-time activity record".to_string(),
        location: Some(location.to_string()),
        session_ref: None,
        severity: Severity::Low,
    };
    state.event_log.write().await.push(event);
    state.metrics.record_event_synthesized();
}

/// Picks one registry entry at random and records a scan against it. Ticks
/// against an empty registry or an inactive pick are no-ops.
pub async fn scan_feed_tick(state: &AppState) {
    state.metrics.record_tick();
    if !state.live.load(Ordering::Relaxed) {
        debug!("scan tick skipped: feed paused");
        return;
    }

    let target = {
        let registry = state.qr_registry.read().await;
        if registry.is_empty() {
            None
        } else {
            let codes = registry.codes();
            let code = &codes[state.randomness.pick_index(codes.len())];
            code.is_active.then(|| code.id.clone())
        }
    };
    let Some(qr_code_id) = target else {
        state.metrics.record_tick_skipped();
        debug!("scan tick skipped: no active qr target");
        return;
    };

    let visitor = SCAN_VISITORS[state.randomness.pick_index(SCAN_VISITORS.len())];
    let device = SCAN_DEVICES[state.randomness.pick_index(SCAN_DEVICES.len())];
    let actor = ScanActor {
        id: format!("visitor-{}", Uuid::new_v4()),
        name: visitor.to_string(),
        email: "visitor@example.com".to_string(),
    };

    match qr_commands::record_scan(state, &qr_code_id, actor, Some(device.to_string())).await {
        Ok(_) => state.metrics.record_scan_synthesized(),
        Err(err) => {
            state.metrics.record_tick_skipped();
            warn!("scan tick skipped: {}", err);
        }
    }
}

pub fn set_auto_refresh(state: &AppState, on: bool) {
    state.live.store(on, Ordering::Relaxed);
    info!("feed {}", if on { "live" } else { "paused" });
}

pub fn auto_refresh(state: &AppState) -> bool {
    state.live.load(Ordering::Relaxed)
}

/// Manual refresh with the dashboard's simulated fetch latency; returns the
/// event-log snapshot once the delay elapses.
pub async fn manual_refresh(state: &AppState) -> Vec<backend_domain::EventLog> {
    let delay = std::time::Duration::from_millis(state.config.manual_refresh_delay_ms);
    tokio::time::sleep(delay).await;
    state.event_log.read().await.snapshot()
}
