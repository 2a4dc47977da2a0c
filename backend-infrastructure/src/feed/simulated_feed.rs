// Simulated ingestion source
// Two independent interval loops drive the event and scan feeds; the first
// immediate interval tick is consumed so ticks start one period after subscribe.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use backend_application::commands::feed_commands;
use backend_application::AppState;
use backend_domain::IngestionSource;

pub struct SimulatedFeed {
    state: AppState,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl SimulatedFeed {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tasks: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IngestionSource for SimulatedFeed {
    async fn subscribe(&self) -> anyhow::Result<()> {
        let event_state = self.state.clone();
        let event_period = Duration::from_secs(event_state.config.event_feed_interval_seconds);
        let event_task = tokio::spawn(async move {
            let mut ticker = interval(event_period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                feed_commands::event_feed_tick(&event_state).await;
            }
        });

        let scan_state = self.state.clone();
        let scan_period = Duration::from_secs(scan_state.config.scan_feed_interval_seconds);
        let scan_task = tokio::spawn(async move {
            let mut ticker = interval(scan_period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                feed_commands::scan_feed_tick(&scan_state).await;
            }
        });

        let mut tasks = self.tasks.lock().await;
        tasks.push(event_task);
        tasks.push(scan_task);
        info!(
            event_interval_seconds = self.state.config.event_feed_interval_seconds,
            scan_interval_seconds = self.state.config.scan_feed_interval_seconds,
            "simulated feed subscribed"
        );
        Ok(())
    }

    async fn cancel(&self) {
        let mut tasks = self.tasks.lock().await;
        for task in tasks.drain(..) {
            task.abort();
        }
        info!("simulated feed cancelled");
    }
}
