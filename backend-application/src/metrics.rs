use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    feed_ticks: AtomicU64,
    events_synthesized: AtomicU64,
    scans_synthesized: AtomicU64,
    ticks_skipped: AtomicU64,
    command_errors: AtomicU64,
}

impl Metrics {
    pub fn record_tick(&self) {
        self.feed_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_synthesized(&self) {
        self.events_synthesized.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan_synthesized(&self) {
        self.scans_synthesized.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tick_skipped(&self) {
        self.ticks_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_command_error(&self) {
        self.command_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ticks_skipped(&self) -> u64 {
        self.ticks_skipped.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let ticks = self.feed_ticks.load(Ordering::Relaxed);
        let events = self.events_synthesized.load(Ordering::Relaxed);
        let scans = self.scans_synthesized.load(Ordering::Relaxed);
        let skipped = self.ticks_skipped.load(Ordering::Relaxed);
        let errors = self.command_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE venuepulse_feed_ticks_total counter\n\
venuepulse_feed_ticks_total {}\n\
# TYPE venuepulse_events_synthesized_total counter\n\
venuepulse_events_synthesized_total {}\n\
# TYPE venuepulse_scans_synthesized_total counter\n\
venuepulse_scans_synthesized_total {}\n\
# TYPE venuepulse_ticks_skipped_total counter\n\
venuepulse_ticks_skipped_total {}\n\
# TYPE venuepulse_command_errors_total counter\n\
venuepulse_command_errors_total {}\n",
            ticks, events, scans, skipped, errors
        )
    }
}
