use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a004_payment::Payment;
use crate::shared::csv::CsvExportable;
use crate::shared::masks::mask_cpf;
use crate::shared::money::format_brl;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Pending,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 4] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Pending,
        SubscriptionStatus::PastDue,
        SubscriptionStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Ativa",
            SubscriptionStatus::Pending => "Pendente",
            SubscriptionStatus::PastDue => "Em atraso",
            SubscriptionStatus::Canceled => "Cancelada",
        }
    }

    pub fn badge_modifier(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "success",
            SubscriptionStatus::Pending => "info",
            SubscriptionStatus::PastDue => "warning",
            SubscriptionStatus::Canceled => "neutral",
        }
    }

    pub fn can_cancel(&self) -> bool {
        !matches!(self, SubscriptionStatus::Canceled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCustomerRef {
    pub id: String,
    pub name: String,
    pub cpf: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlanRef {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

/// Assinatura de um cliente em um plano
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub customer: SubscriptionCustomerRef,
    pub plan: SubscriptionPlanRef,
    pub status: SubscriptionStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub next_billing_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
}

/// `GET /subscriptions/{id}`: assinatura com histórico de pagamentos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDetail {
    #[serde(flatten)]
    pub subscription: Subscription,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl SubscriptionDetail {
    /// Soma dos pagamentos com status `paid`.
    pub fn total_paid_cents(&self) -> i64 {
        use crate::domain::a004_payment::PaymentStatus;
        self.payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.amount_cents)
            .sum()
    }
}

impl CsvExportable for Subscription {
    fn headers() -> Vec<&'static str> {
        vec!["Cliente", "CPF", "Plano", "Valor", "Status", "Início", "Próxima cobrança"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.customer.name.clone(),
            mask_cpf(&self.customer.cpf),
            self.plan.name.clone(),
            format_brl(self.plan.price_cents),
            self.status.label().to_string(),
            self.started_at.format("%d/%m/%Y").to_string(),
            self.next_billing_at
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionFilter {
    pub status: Option<SubscriptionStatus>,
    pub search: String,
}

/// Query string de `GET /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl SubscriptionFilter {
    pub fn to_query(&self, page: PageRequest) -> SubscriptionQuery {
        let search = self.search.trim();
        SubscriptionQuery {
            status: self.status.map(|s| s.as_str().to_string()),
            search: (!search.is_empty()).then(|| search.to_string()),
            page: page.wire_page(),
            limit: page.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_json() -> serde_json::Value {
        json!({
            "id": "sub-1",
            "customer": {"id": "c1", "name": "Rafael", "cpf": "52998224725"},
            "plan": {"id": "p1", "name": "Clube Corte", "price_cents": 8990},
            "status": "past_due",
            "started_at": "2024-01-10T10:00:00Z",
            "next_billing_at": "2024-07-10T10:00:00Z",
            "payments": [
                {"id": "pay-1", "subscription_id": "sub-1", "amount_cents": 8990,
                 "method": "pix", "status": "paid", "paid_at": "2024-05-10T10:00:00Z"},
                {"id": "pay-2", "subscription_id": "sub-1", "amount_cents": 8990,
                 "method": "credit_card", "status": "failed", "paid_at": "2024-06-10T10:00:00Z"}
            ]
        })
    }

    #[test]
    fn test_detail_flattens_subscription() {
        let detail: SubscriptionDetail = serde_json::from_value(detail_json()).unwrap();
        assert_eq!(detail.subscription.status, SubscriptionStatus::PastDue);
        assert_eq!(detail.payments.len(), 2);
        assert_eq!(detail.total_paid_cents(), 8990);
        assert!(detail.subscription.status.can_cancel());
    }

    #[test]
    fn test_csv_row() {
        let detail: SubscriptionDetail = serde_json::from_value(detail_json()).unwrap();
        let row = detail.subscription.to_csv_row();
        assert_eq!(row[1], "529.982.247-25");
        assert_eq!(row[3], "R$ 89,90");
        assert_eq!(row[4], "Em atraso");
        assert_eq!(row[6], "10/07/2024");
    }

    #[test]
    fn test_query() {
        let filter = SubscriptionFilter {
            status: Some(SubscriptionStatus::Canceled),
            search: String::new(),
        };
        assert_eq!(
            serde_json::to_value(filter.to_query(PageRequest::new(0, 10))).unwrap(),
            json!({"status": "canceled", "page": 1, "limit": 10})
        );
    }
}
