//! Notification Emitter
//!
//! Turns accepted access events into a transient, auto-dismissing
//! notice. At most one notice is visible; a newer event preempts the
//! text and restarts the dismiss timer. Emission never blocks the
//! reconciler.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shared::message::AccessEventMessage;

/// Single-slot, auto-dismissing notification surface
#[derive(Debug, Clone)]
pub struct NotificationEmitter {
    visible: Arc<Mutex<Option<String>>>,
    generation: Arc<AtomicU64>,
    ttl: Duration,
}

impl NotificationEmitter {
    /// Create an emitter whose notices stay visible for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            visible: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Show a notice for this event, preempting any visible one.
    ///
    /// The dismiss timer restarts from now; earlier notices are simply
    /// dropped from display.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime; the dismiss timer
    /// is spawned onto it.
    pub fn notify(&self, event: &AccessEventMessage) {
        let text = format!(
            "{} registered a {} event.",
            event.display_name(),
            event.kind
        );
        self.show(text);
    }

    fn show(&self, text: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.visible.lock().unwrap() = Some(text);

        let visible = self.visible.clone();
        let latest = self.generation.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // Only the most recent notice may clear the slot.
            if latest.load(Ordering::SeqCst) == generation {
                visible.lock().unwrap().take();
            }
        });
    }

    /// The currently visible notice text, if any
    pub fn current(&self) -> Option<String> {
        self.visible.lock().unwrap().clone()
    }
}
