// gym-client/tests/rest_api.rs
// Typed REST client against an in-process mock backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal_macros::dec;
use serde_json::json;

use gym_client::{ClientConfig, ClientError, Session, SubscriptionService};
use shared::models::{CreatePaymentRequest, LoginRequest, PaymentMethod, SubscriptionStatus};

#[derive(Clone, Default)]
struct MockState {
    payment_requests: Arc<AtomicUsize>,
}

fn subscription_json(member_id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": 42,
        "user": { "id": member_id, "name": "Ana Torres", "email": "ana@example.com" },
        "membership": {
            "id": 1,
            "name": "Monthly",
            "description": "30-day access",
            "durationDays": 30,
            "price": 450.0
        },
        "startDate": "2026-08-01",
        "endDate": "2026-08-31",
        "autoRenew": false,
        "status": status
    })
}

async fn login(Json(req): Json<LoginRequest>) -> Response {
    if req.password == "secret" {
        Json(json!({ "id": 1, "name": "Ana Torres", "email": req.email })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "bad credentials").into_response()
    }
}

async fn summary() -> Json<serde_json::Value> {
    Json(json!({
        "entriesToday": 4,
        "paymentsTodayAmount": 1200,
        "newClientsToday": 2,
        "activeClients": 87,
        "expiringMembershipsNext7Days": 5,
        "paymentsThisMonthAmount": 18600.50
    }))
}

async fn current_subscription(Path(id): Path<i64>) -> Response {
    if id == 7 {
        Json(subscription_json(7, "ACTIVE")).into_response()
    } else {
        (StatusCode::NOT_FOUND, "no active subscription").into_response()
    }
}

// Returns a status the client would never compute on its own, to prove
// the transmitted value is passed through verbatim.
async fn assign(Json(req): Json<serde_json::Value>) -> Json<serde_json::Value> {
    let member_id = req["userId"].as_i64().unwrap();
    Json(subscription_json(member_id, "CANCELLED"))
}

async fn create_payment(
    State(state): State<MockState>,
    Json(req): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    state.payment_requests.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "id": 9,
        "userId": req["userId"],
        "userMembershipId": null,
        "amount": req["amount"],
        "method": req["method"],
        "reference": null,
        "paymentDate": "2026-08-30T10:00:00Z",
        "createdAt": "2026-08-30T10:00:00Z"
    }))
}

async fn serve(state: MockState) -> SocketAddr {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/dashboard/summary", get(summary))
        .route("/api/subscriptions/user/{id}/current", get(current_subscription))
        .route("/api/subscriptions", post(assign))
        .route("/api/payments", post(create_payment))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client(state: MockState) -> gym_client::HttpClient {
    let addr = serve(state).await;
    ClientConfig::new(format!("http://{addr}/api")).build_http_client()
}

#[tokio::test]
async fn login_builds_a_session() {
    let http = client(MockState::default()).await;

    let session = Session::login(&http, "ana@example.com", "secret").await.unwrap();
    assert_eq!(session.user().id, 1);
    assert_eq!(session.first_name(), "Ana");

    let err = Session::login(&http, "ana@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn summary_snapshot_parses_all_fields() {
    let http = client(MockState::default()).await;

    let summary = http.dashboard_summary().await.unwrap();
    assert_eq!(summary.entries_today, 4);
    assert_eq!(summary.payments_today_amount, dec!(1200));
    assert_eq!(summary.expiring_memberships_next7_days, 5);
    assert_eq!(summary.payments_this_month_amount, dec!(18600.50));
}

#[tokio::test]
async fn absent_subscription_is_none_not_an_error() {
    let http = client(MockState::default()).await;
    let service = SubscriptionService::new(http);

    assert!(service.current(1).await.unwrap().is_none());

    let current = service.current(7).await.unwrap().unwrap();
    assert_eq!(current.status, SubscriptionStatus::Active);
    assert_eq!(current.status.display_label(), "Active ✔");
    assert_eq!(current.membership.price, dec!(450));
}

#[tokio::test]
async fn assign_passes_server_status_through_verbatim() {
    let http = client(MockState::default()).await;
    let service = SubscriptionService::new(http.clone());
    let session = Session::login(&http, "ana@example.com", "secret").await.unwrap();

    let subscription = service.assign(&session, 7, 1, true).await.unwrap();
    // The server said CANCELLED for a brand-new subscription; the
    // client reports exactly that, with no recomputation from dates.
    assert_eq!(subscription.status, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn nonpositive_payment_never_reaches_the_network() {
    let state = MockState::default();
    let http = client(state.clone()).await;

    let mut request = CreatePaymentRequest {
        user_id: 7,
        user_membership_id: None,
        amount: dec!(0),
        method: PaymentMethod::Cash,
        reference: None,
    };

    let err = http.create_payment(&request).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(state.payment_requests.load(Ordering::SeqCst), 0);

    request.amount = dec!(350);
    let payment = http.create_payment(&request).await.unwrap();
    assert_eq!(payment.amount, dec!(350));
    assert_eq!(state.payment_requests.load(Ordering::SeqCst), 1);
}
