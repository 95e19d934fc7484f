//! Data models
//!
//! Shared between the client library and any server-side tooling.
//! Field names serialize as camelCase to match the backend API.
//! All IDs are `i64` (backend INTEGER PRIMARY KEY).

pub mod access;
pub mod auth;
pub mod gym;
pub mod member;
pub mod membership;
pub mod payment;
pub mod subscription;
pub mod summary;

// Re-exports
pub use access::*;
pub use auth::*;
pub use gym::*;
pub use member::*;
pub use membership::*;
pub use payment::*;
pub use subscription::*;
pub use summary::*;
