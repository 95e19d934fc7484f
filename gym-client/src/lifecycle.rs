//! Subscription Lifecycle Service
//!
//! Read/write operations over a member's current subscription. The
//! backend owns the lifecycle entirely: this service performs no date
//! math and no status recomputation — whatever `status` the server
//! transmits is the truth, even if local clocks disagree.

use crate::{ClientResult, HttpClient, Session};
use shared::models::{AssignPlanRequest, Subscription};

/// Service over the subscription endpoints
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    http: HttpClient,
}

impl SubscriptionService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The member's current subscription, or `None` when the backend
    /// reports no active one. `None` is a valid outcome, not an error.
    pub async fn current(&self, member_id: i64) -> ClientResult<Option<Subscription>> {
        self.http.current_subscription(member_id).await
    }

    /// Assign a plan to a member.
    ///
    /// On success the returned subscription is the member's new current
    /// one; the server retires the previous subscription itself — the
    /// client never cancels it.
    pub async fn assign(
        &self,
        session: &Session,
        member_id: i64,
        plan_id: i64,
        auto_renew: bool,
    ) -> ClientResult<Subscription> {
        let request = AssignPlanRequest {
            user_id: member_id,
            membership_id: plan_id,
            auto_renew: Some(auto_renew),
        };

        let subscription = self.http.assign_plan(&request).await?;
        tracing::info!(
            admin = %session.user().name,
            member_id,
            plan = %subscription.membership.name,
            status = subscription.status.display_label(),
            "assigned membership plan"
        );
        Ok(subscription)
    }
}
