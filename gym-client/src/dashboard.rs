//! Dashboard Service
//!
//! Composition point for the live operational view: owns the summary
//! reconciler and the notification emitter, drains the event channel
//! fed by the stream client, and fetches authoritative snapshots.

use std::time::Duration;
use tokio::sync::mpsc;

use crate::{ClientResult, HttpClient, NotificationEmitter, SummaryReconciler};
use shared::message::AccessEventMessage;
use shared::models::OperationalSummary;

/// Live operational summary view
#[derive(Debug)]
pub struct DashboardService {
    http: HttpClient,
    reconciler: SummaryReconciler,
    emitter: NotificationEmitter,
}

impl DashboardService {
    pub fn new(http: HttpClient, emitter: NotificationEmitter) -> Self {
        Self {
            http,
            reconciler: SummaryReconciler::new(),
            emitter,
        }
    }

    /// Fetch a fresh snapshot and install it as the new baseline.
    ///
    /// Failures propagate to the caller (manual refresh shows an
    /// inline error with a retry affordance); the cached summary is
    /// left untouched.
    pub async fn refresh(&mut self) -> ClientResult<OperationalSummary> {
        let snapshot = self.http.dashboard_summary().await?;
        self.reconciler.replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Apply one live event: adjust the summary and raise a notice.
    pub fn apply(&mut self, event: &AccessEventMessage) {
        self.reconciler.apply_event(event);
        self.emitter.notify(event);
    }

    /// The reconciled summary, if a snapshot has ever loaded
    pub fn summary(&self) -> Option<&OperationalSummary> {
        self.reconciler.summary()
    }

    /// The currently visible notice, if any
    pub fn current_notice(&self) -> Option<String> {
        self.emitter.current()
    }

    /// Drain live events until the channel closes, optionally
    /// refreshing the snapshot on an interval.
    ///
    /// The first interval tick fires immediately, covering the initial
    /// load. Periodic refresh failures are logged and skipped — the
    /// worst outcome is a temporarily stale summary.
    pub async fn run(
        &mut self,
        mut events: mpsc::Receiver<AccessEventMessage>,
        refresh_every: Option<Duration>,
    ) {
        let mut ticker = refresh_every.map(tokio::time::interval);
        if let Some(t) = ticker.as_mut() {
            t.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        }

        loop {
            match ticker.as_mut() {
                Some(ticker) => {
                    tokio::select! {
                        maybe = events.recv() => match maybe {
                            Some(event) => self.apply(&event),
                            None => break,
                        },
                        _ = ticker.tick() => {
                            if let Err(e) = self.refresh().await {
                                tracing::warn!(error = %e, "periodic summary refresh failed");
                            }
                        }
                    }
                }
                None => match events.recv().await {
                    Some(event) => self.apply(&event),
                    None => break,
                },
            }
        }

        tracing::debug!("event channel closed, dashboard loop ending");
    }
}
