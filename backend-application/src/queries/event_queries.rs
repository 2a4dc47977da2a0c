use serde::Serialize;

use backend_domain::{
    event_log_stats, filter_events, format_relative_age, now_utc, EventFilter, EventLog,
    EventLogStats,
};

use crate::AppState;

/// Event record decorated with its display age at query time.
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub record: EventLog,
    pub relative_age: String,
}

pub async fn list_events(state: &AppState, filter: EventFilter) -> Vec<EventView> {
    let now = now_utc();
    let snapshot = state.event_log.read().await.snapshot();
    filter_events(&snapshot, &filter)
        .into_iter()
        .map(|record| EventView {
            relative_age: format_relative_age(record.timestamp, now),
            record,
        })
        .collect()
}

pub async fn event_stats(state: &AppState) -> EventLogStats {
    let snapshot = state.event_log.read().await.snapshot();
    event_log_stats(&snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::feed_commands;
    use crate::test_support::{test_state, FixedRandomness};
    use backend_domain::EventCategory;

    #[tokio::test]
    async fn fresh_events_read_as_just_now() {
        let state = test_state(FixedRandomness::unique());
        feed_commands::event_feed_tick(&state).await;

        let events = list_events(&state, EventFilter::default()).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].relative_age, "just now");
    }

    #[tokio::test]
    async fn filter_narrows_the_view() {
        let state = test_state(FixedRandomness::unique());
        feed_commands::event_feed_tick(&state).await;

        let miss = list_events(
            &state,
            EventFilter {
                category: Some(EventCategory::Admin),
                ..EventFilter::default()
            },
        )
        .await;
        assert!(miss.is_empty());

        let stats = event_stats(&state).await;
        assert_eq!(stats.total, 1);
    }
}
