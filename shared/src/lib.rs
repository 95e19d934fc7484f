//! Shared types for the gym admin client
//!
//! Domain models exchanged with the backend REST API and the wire
//! types for the live access-event stream.

pub mod message;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Stream re-exports (for convenient access)
pub use message::{AccessEventMessage, Frame, FrameKind};
