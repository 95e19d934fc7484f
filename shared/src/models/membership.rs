//! Membership Plan Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Membership plan from the catalog
///
/// Subscriptions embed the live plan object as the server returns it;
/// price and duration are never snapshotted on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration_days: u32,
    pub price: Decimal,
}

/// Create plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    pub description: Option<String>,
    pub duration_days: u32,
    pub price: Decimal,
}
