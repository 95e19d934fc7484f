//! Payment Model
//!
//! Payments are append-only; this client never edits or deletes them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method accepted at the front desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Other,
}

/// A recorded payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub user_membership_id: Option<i64>,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub reference: Option<String>,
    pub payment_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Create payment payload (`POST /payments`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_membership_id: Option<i64>,
    pub amount: Decimal,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
