//! Event Stream Client
//!
//! Maintains exactly one logical subscription to the facility-wide
//! access-event topic, tolerant of network interruption, and delivers
//! well-formed events to the single registered handler channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::ClientConfig;
use crate::stream::transport::{StreamEndpoint, Transport};
use crate::stream::StreamError;
use shared::message::{AccessEventMessage, Frame, FrameKind};

/// Connection lifecycle of the stream client
///
/// `Closed` is terminal and reachable only via [`EventStreamClient::disconnect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
    Closed,
}

type HandlerSlot = Arc<Mutex<Option<mpsc::Sender<AccessEventMessage>>>>;

/// Client for the live access-event stream
///
/// Reconnects forever on a fixed delay; transport loss is invisible to
/// the caller beyond a gap in delivery. A closed client cannot be
/// reused — build a new one.
#[derive(Debug)]
pub struct EventStreamClient {
    endpoint: StreamEndpoint,
    reconnect_delay: Duration,
    state_tx: watch::Sender<ConnectionState>,
    handler: HandlerSlot,
    shutdown: CancellationToken,
    started: AtomicBool,
}

impl EventStreamClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: StreamEndpoint, reconnect_delay: Duration) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            endpoint,
            reconnect_delay,
            state_tx,
            handler: Arc::new(Mutex::new(None)),
            shutdown: CancellationToken::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Create a client from configuration (requires `stream_addr`)
    pub fn from_config(config: &ClientConfig) -> Result<Self, StreamError> {
        let addr = config.stream_addr.clone().ok_or_else(|| {
            StreamError::Connection("stream client requires a stream_addr".to_string())
        })?;
        Ok(Self::new(StreamEndpoint::Tcp(addr), config.reconnect_delay))
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        *self.state_tx.borrow()
    }

    /// Watch connection state transitions
    pub fn state_changes(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    /// Connect and subscribe to `topic`, delivering decoded events to
    /// `handler`.
    ///
    /// Idempotent: calling while already connecting/connected replaces
    /// the handler without opening a second transport. Exactly one
    /// handler is active at a time.
    pub async fn connect(
        &self,
        topic: &str,
        handler: mpsc::Sender<AccessEventMessage>,
    ) -> Result<(), StreamError> {
        if self.shutdown.is_cancelled() {
            return Err(StreamError::Closed);
        }

        *self.handler.lock().await = Some(handler);

        if self.started.swap(true, Ordering::SeqCst) {
            // Already running; only the handler was replaced.
            return Ok(());
        }

        self.set_state(ConnectionState::Connecting);

        let endpoint = self.endpoint.clone();
        let topic = topic.to_string();
        let delay = self.reconnect_delay;
        let state_tx = self.state_tx.clone();
        let handler = self.handler.clone();
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            run_loop(endpoint, topic, delay, state_tx, handler, shutdown).await;
        });

        Ok(())
    }

    /// Tear down the connection.
    ///
    /// After this returns, the registered handler receives no further
    /// events, even if frames were in flight. The client is `Closed`
    /// permanently.
    pub async fn disconnect(&self) {
        self.shutdown.cancel();
        // Delivery holds the handler lock, so taking it here waits out
        // any in-flight send before we return.
        self.handler.lock().await.take();
        self.state_tx.send_replace(ConnectionState::Closed);
    }

    fn set_state(&self, state: ConnectionState) {
        if !self.shutdown.is_cancelled() {
            self.state_tx.send_replace(state);
        }
    }
}

async fn run_loop(
    endpoint: StreamEndpoint,
    topic: String,
    delay: Duration,
    state_tx: watch::Sender<ConnectionState>,
    handler: HandlerSlot,
    shutdown: CancellationToken,
) {
    let set_state = |state: ConnectionState| {
        if !shutdown.is_cancelled() {
            state_tx.send_replace(state);
        }
    };

    loop {
        if shutdown.is_cancelled() {
            return;
        }
        set_state(ConnectionState::Connecting);

        let opened = tokio::select! {
            _ = shutdown.cancelled() => return,
            opened = endpoint.open() => opened,
        };

        match opened {
            Ok(transport) => {
                if let Err(e) = transport.write_frame(&Frame::subscribe(&topic)).await {
                    tracing::warn!(error = %e, "failed to subscribe, will reconnect");
                } else {
                    set_state(ConnectionState::Connected);
                    tracing::info!(topic = %topic, "subscribed to access-event stream");
                    read_until_error(transport.as_ref(), &handler, &shutdown).await;
                    if shutdown.is_cancelled() {
                        let _ = transport.close().await;
                        return;
                    }
                }
                let _ = transport.close().await;
            }
            Err(e) => {
                tracing::info!(error = %e, "stream connect failed");
            }
        }

        set_state(ConnectionState::Reconnecting);
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
    }
}

/// Pump frames off the transport until it fails or we are shut down
async fn read_until_error(
    transport: &dyn Transport,
    handler: &HandlerSlot,
    shutdown: &CancellationToken,
) {
    loop {
        let frame = tokio::select! {
            _ = shutdown.cancelled() => return,
            frame = transport.read_frame() => frame,
        };

        match frame {
            Ok(frame) => match frame.kind {
                FrameKind::Event => match frame.parse_payload::<AccessEventMessage>() {
                    Ok(event) => {
                        if !deliver(handler, shutdown, event).await {
                            return;
                        }
                    }
                    Err(e) => {
                        // Malformed payloads never close the stream.
                        tracing::warn!(error = %e, "dropping malformed access event payload");
                    }
                },
                FrameKind::Ping => {}
                FrameKind::Subscribe => {
                    tracing::debug!("ignoring unexpected subscribe frame from broker");
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "stream transport lost, scheduling reconnect");
                return;
            }
        }
    }
}

/// Hand one event to the registered handler.
///
/// Returns `false` when the client was shut down. The handler lock is
/// held across the send so a completed delivery always precedes
/// `disconnect()` returning; the send itself races the shutdown token,
/// so a full channel cannot wedge teardown — on cancellation the event
/// is abandoned before it was ever enqueued.
async fn deliver(
    handler: &HandlerSlot,
    shutdown: &CancellationToken,
    event: AccessEventMessage,
) -> bool {
    let guard = handler.lock().await;
    if shutdown.is_cancelled() {
        return false;
    }
    if let Some(tx) = guard.as_ref() {
        tokio::select! {
            _ = shutdown.cancelled() => return false,
            sent = tx.send(event) => {
                if sent.is_err() {
                    tracing::debug!("event receiver dropped, discarding event");
                }
            }
        }
    }
    true
}
