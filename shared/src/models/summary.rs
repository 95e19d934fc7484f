//! Operational Summary Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate dashboard figures (`GET /dashboard/summary`)
///
/// Never persisted locally: it is either a full snapshot fetched from
/// the backend or that snapshot incrementally adjusted by live entry
/// events until the next snapshot arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSummary {
    // Today
    pub entries_today: u64,
    pub payments_today_amount: Decimal,
    pub new_clients_today: u64,

    // Overall
    pub active_clients: u64,
    pub expiring_memberships_next7_days: u64,

    // Month
    pub payments_this_month_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_field_names_match_backend() {
        let json = r#"{
            "entriesToday": 4,
            "paymentsTodayAmount": 1200,
            "newClientsToday": 2,
            "activeClients": 87,
            "expiringMembershipsNext7Days": 5,
            "paymentsThisMonthAmount": 18600.50
        }"#;

        let summary: OperationalSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.entries_today, 4);
        assert_eq!(summary.payments_today_amount, dec!(1200));
        assert_eq!(summary.expiring_memberships_next7_days, 5);
        assert_eq!(summary.payments_this_month_amount, dec!(18600.50));
    }
}
