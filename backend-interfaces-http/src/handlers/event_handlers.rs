use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::event_queries::{self, EventView};
use backend_application::AppState;
use backend_domain::{EventCategory, EventFilter, EventLogStats, Severity};

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Debug, Default, serde::Deserialize)]
pub struct EventListQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
}

/// Missing parameters and the dashboard's "all" sentinel both mean unset;
/// anything else must name a known variant.
fn parse_filter(query: EventListQuery) -> Result<EventFilter, HttpError> {
    let category = match unset_or(&query.category) {
        None => None,
        Some(raw) => Some(
            EventCategory::parse(raw)
                .ok_or_else(|| HttpError::BadRequest(format!("unknown category '{}'", raw)))?,
        ),
    };
    let severity = match unset_or(&query.severity) {
        None => None,
        Some(raw) => Some(
            Severity::parse(raw)
                .ok_or_else(|| HttpError::BadRequest(format!("unknown severity '{}'", raw)))?,
        ),
    };
    Ok(EventFilter {
        query: query.query,
        category,
        severity,
    })
}

pub(crate) fn unset_or(value: &Option<String>) -> Option<&str> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(raw)
    }
}

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventView>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let filter = parse_filter(query)?;
    let events = event_queries::list_events(&state, filter).await;
    Ok(Json(events))
}

pub async fn event_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<EventLogStats>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let stats = event_queries::event_stats(&state).await;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_and_absence_both_mean_unset() {
        let filter = parse_filter(EventListQuery {
            query: None,
            category: Some("all".to_string()),
            severity: None,
        })
        .expect("parse");
        assert!(filter.category.is_none());
        assert!(filter.severity.is_none());
    }

    #[test]
    fn known_variants_parse() {
        let filter = parse_filter(EventListQuery {
            query: Some("keynote".to_string()),
            category: Some("qr_scan".to_string()),
            severity: Some("high".to_string()),
        })
        .expect("parse");
        assert_eq!(filter.category, Some(EventCategory::QrScan));
        assert_eq!(filter.severity, Some(Severity::High));
        assert_eq!(filter.query.as_deref(), Some("keynote"));
    }

    #[test]
    fn unknown_category_is_a_bad_request() {
        let err = parse_filter(EventListQuery {
            query: None,
            category: Some("bogus".to_string()),
            severity: None,
        })
        .expect_err("reject");
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
