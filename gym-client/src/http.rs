//! HTTP client for the backend REST API
//!
//! Thin typed wrapper over `reqwest`. Every call is a single
//! request/response with a bounded timeout; failures map to a typed
//! [`ClientError`] and are never retried here.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use shared::models::{
    AccessEvent, AssignPlanRequest, AuthUser, CreateGymInfoRequest, CreatePaymentRequest,
    CreatePlanRequest, GymInfo, LoginRequest, Member, MembershipPlan, Payment,
    RegisterAccessRequest, RegisterMemberRequest, Subscription, UpdateGymInfoRequest,
};

/// HTTP client for making network requests to the gym backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthUser> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("auth/login", &request).await
    }

    /// Register a new member
    pub async fn register_member(&self, request: &RegisterMemberRequest) -> ClientResult<Member> {
        self.post("auth/register", request).await
    }

    // ========== Members API ==========

    /// List all members
    pub async fn members(&self) -> ClientResult<Vec<Member>> {
        self.get("users").await
    }

    // ========== Dashboard API ==========

    /// Fetch a full, authoritative Operational Summary snapshot
    pub async fn dashboard_summary(&self) -> ClientResult<shared::models::OperationalSummary> {
        self.get("dashboard/summary").await
    }

    // ========== Subscriptions API ==========

    /// Get the backend's notion of a member's active subscription.
    ///
    /// Absence is a valid outcome (`Ok(None)`), distinct from a
    /// transport or server failure.
    pub async fn current_subscription(&self, member_id: i64) -> ClientResult<Option<Subscription>> {
        match self
            .get(&format!("subscriptions/user/{member_id}/current"))
            .await
        {
            Ok(subscription) => Ok(Some(subscription)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Assign a membership plan to a member
    pub async fn assign_plan(&self, request: &AssignPlanRequest) -> ClientResult<Subscription> {
        self.post("subscriptions", request).await
    }

    // ========== Payments API ==========

    /// Record a payment.
    ///
    /// A non-positive amount is rejected here, before any request goes
    /// out.
    pub async fn create_payment(&self, request: &CreatePaymentRequest) -> ClientResult<Payment> {
        if request.amount <= Decimal::ZERO {
            return Err(ClientError::Validation(
                "payment amount must be positive".to_string(),
            ));
        }
        self.post("payments", request).await
    }

    /// List a member's payments
    pub async fn payments_for_member(&self, member_id: i64) -> ClientResult<Vec<Payment>> {
        self.get(&format!("payments/user/{member_id}")).await
    }

    // ========== Access API ==========

    /// Register a manual entry/exit event
    pub async fn register_access(
        &self,
        request: &RegisterAccessRequest,
    ) -> ClientResult<AccessEvent> {
        self.post("access", request).await
    }

    /// List a member's access log
    pub async fn access_log_for_member(&self, member_id: i64) -> ClientResult<Vec<AccessEvent>> {
        self.get(&format!("access/user/{member_id}")).await
    }

    // ========== Membership Catalog API (plain CRUD) ==========

    /// List membership plans
    pub async fn membership_plans(&self) -> ClientResult<Vec<MembershipPlan>> {
        self.get("memberships").await
    }

    /// Create a membership plan
    pub async fn create_plan(&self, request: &CreatePlanRequest) -> ClientResult<MembershipPlan> {
        self.post("memberships", request).await
    }

    // ========== Gym Info API (plain CRUD) ==========

    /// Fetch the facility profile for an administrator, if any
    pub async fn gym_info(&self, user_id: i64) -> ClientResult<Option<GymInfo>> {
        let all: Vec<GymInfo> = self.get(&format!("gym/info?userId={user_id}")).await?;
        Ok(all.into_iter().next())
    }

    /// Create the facility profile
    pub async fn create_gym_info(&self, request: &CreateGymInfoRequest) -> ClientResult<GymInfo> {
        self.post("gym/info", request).await
    }

    /// Update the facility profile
    pub async fn update_gym_info(&self, request: &UpdateGymInfoRequest) -> ClientResult<GymInfo> {
        self.put("gym/info", request).await
    }
}
