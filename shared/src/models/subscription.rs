//! Subscription Model
//!
//! A member's binding to a membership plan for a bounded validity
//! window. The backend owns the lifecycle: the client never computes
//! `end_date` or re-derives `status` from dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::member::MemberRef;
use super::membership::MembershipPlan;

/// Lifecycle state as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

impl SubscriptionStatus {
    /// Display mapping: Active gets an affirmative indicator, anything
    /// else is shown literally.
    pub fn display_label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active ✔",
            SubscriptionStatus::Expired => "EXPIRED",
            SubscriptionStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A member's current (or past) subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    #[serde(rename = "user")]
    pub member: MemberRef,
    pub membership: MembershipPlan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub auto_renew: bool,
    pub status: SubscriptionStatus,
}

/// Assign plan payload (`POST /subscriptions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPlanRequest {
    pub user_id: i64,
    pub membership_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(SubscriptionStatus::Active.display_label(), "Active ✔");
        assert_eq!(SubscriptionStatus::Expired.display_label(), "EXPIRED");
        assert_eq!(SubscriptionStatus::Cancelled.display_label(), "CANCELLED");
    }

    #[test]
    fn status_wire_format_is_uppercase() {
        let json = serde_json::to_string(&SubscriptionStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");

        let parsed: SubscriptionStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, SubscriptionStatus::Cancelled);
    }

    #[test]
    fn subscription_parses_backend_shape() {
        let json = r#"{
            "id": 12,
            "user": { "id": 3, "name": "Ana", "email": "ana@example.com" },
            "membership": {
                "id": 1,
                "name": "Monthly",
                "description": null,
                "durationDays": 30,
                "price": 450.0
            },
            "startDate": "2026-08-01",
            "endDate": "2026-08-31",
            "autoRenew": true,
            "status": "ACTIVE"
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.member.id, 3);
        assert_eq!(sub.membership.duration_days, 30);
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }
}
