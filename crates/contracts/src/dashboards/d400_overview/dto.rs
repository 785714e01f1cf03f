use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a004_payment::PaymentMethod;
use crate::shared::number_parse::deserialize_lenient_f64;

/// Resposta de `GET /dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub active_subscriptions: u64,
    /// Receita recorrente mensal, em centavos
    #[serde(default)]
    pub monthly_revenue_cents: i64,
    #[serde(default)]
    pub appointments_today: u64,
    #[serde(default)]
    pub payments_this_month: u64,
    /// Percentual, ex.: `4.2`
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub churn_rate: f64,
    #[serde(default)]
    pub recent_payments: Vec<RecentPayment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPayment {
    pub id: String,
    pub customer_name: String,
    pub plan_name: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_tolerate_missing_and_string_fields() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "total_customers": 310,
            "monthly_revenue_cents": 2787000,
            "churn_rate": "4.20"
        }))
        .unwrap();
        assert_eq!(stats.total_customers, 310);
        assert_eq!(stats.active_subscriptions, 0);
        assert_eq!(stats.churn_rate, 4.2);
        assert!(stats.recent_payments.is_empty());
    }
}
