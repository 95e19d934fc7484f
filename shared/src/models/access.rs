//! Access Event Model
//!
//! A single recorded entry or exit at the facility. The log is
//! append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry/exit discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessKind {
    Entry,
    Exit,
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Entry => write!(f, "ENTRY"),
            AccessKind::Exit => write!(f, "EXIT"),
        }
    }
}

/// A recorded access event (`GET /access/user/{id}` rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEvent {
    pub id: i64,
    pub access_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: AccessKind,
    pub source: Option<String>,
}

/// Register access payload (`POST /access`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccessRequest {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: AccessKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
