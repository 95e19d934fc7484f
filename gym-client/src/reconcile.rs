//! Summary Reconciler
//!
//! Single owner of the cached Operational Summary. Two update kinds:
//! `replace` installs an authoritative snapshot, `apply_event` nudges
//! `entries_today` for live ENTRY events. A later `replace` always
//! supersedes any prior local adjustment, so every refresh restores
//! eventual consistency no matter what arrived (or got lost) in
//! between.
//!
//! No event deduplication is performed: the transport is assumed to
//! deliver each access event at most once. Redelivery inflates the
//! counter until the next snapshot.

use shared::message::AccessEventMessage;
use shared::models::{AccessKind, OperationalSummary};

/// Holds and mutates the cached Operational Summary
#[derive(Debug, Default)]
pub struct SummaryReconciler {
    current: Option<OperationalSummary>,
}

impl SummaryReconciler {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Unconditionally install a freshly fetched snapshot
    pub fn replace(&mut self, snapshot: OperationalSummary) {
        self.current = Some(snapshot);
    }

    /// Apply one live access event.
    ///
    /// Before any snapshot has loaded there is nothing to adjust, so
    /// the event is discarded. Only ENTRY events change the summary;
    /// exits, payments and signups wait for the next snapshot.
    pub fn apply_event(&mut self, event: &AccessEventMessage) {
        let Some(summary) = self.current.as_mut() else {
            tracing::debug!("no snapshot loaded yet, discarding live event");
            return;
        };

        if event.kind == AccessKind::Entry {
            summary.entries_today += 1;
        }
    }

    /// The reconciled summary, if a snapshot has ever loaded
    pub fn summary(&self) -> Option<&OperationalSummary> {
        self.current.as_ref()
    }
}
