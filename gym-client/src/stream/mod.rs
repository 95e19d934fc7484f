//! Live access-event stream
//!
//! Owns the broker connection, the reconnection policy, and the topic
//! subscription. Connection failures are never surfaced to the caller;
//! the only observable effect of connectivity loss is a gap in event
//! delivery until reconnection succeeds.

pub mod client;
pub mod transport;

pub use client::{ConnectionState, EventStreamClient};
pub use transport::{MemoryHub, MemoryTransport, StreamEndpoint, TcpTransport, Transport};

use thiserror::Error;

/// Stream transport error type
#[derive(Debug, Error)]
pub enum StreamError {
    /// Connection failed or was lost
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O error on the transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The client was explicitly shut down and cannot be reused
    #[error("Stream client is closed")]
    Closed,
}
