//! Periodic refresh source.
//!
//! The display owns the ticker: it is started when the watch enters
//! `Running`, stopped when it leaves, and aborted on drop so no task
//! outlives the app on any exit path.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct Ticker {
    interval: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(interval: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            interval,
            tx,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn the tick task. No-op if it is already running.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let tx = self.tx.clone();
        let period = self.interval;
        tracing::debug!(interval_ms = period.as_millis() as u64, "ticker started");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            // Late ticks are dropped, never bunched up
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    tracing::debug!("ticker stopping (receiver dropped)");
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
