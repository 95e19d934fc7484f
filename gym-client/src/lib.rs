//! Gym Client - admin client core for the gym backend
//!
//! REST calls for members, memberships, payments and access logs, plus
//! the real-time pieces behind the dashboard: the access-event stream
//! client, the summary reconciler, and the notification emitter.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod notify;
pub mod reconcile;
pub mod session;
pub mod stream;

pub use config::ClientConfig;
pub use dashboard::DashboardService;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use lifecycle::SubscriptionService;
pub use notify::NotificationEmitter;
pub use reconcile::SummaryReconciler;
pub use session::{ACCESS_TOPIC, Session};

// Stream types and client
pub use stream::{
    ConnectionState, EventStreamClient, MemoryHub, StreamEndpoint, StreamError,
};

// Re-export shared types for convenience
pub use shared::message::{AccessEventMessage, Frame, FrameKind};
