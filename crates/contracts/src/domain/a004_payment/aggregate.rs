use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::csv::CsvExportable;
use crate::shared::money::format_brl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Pix,
    CreditCard,
    DebitCard,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Pix,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CreditCard => "Cartão de crédito",
            PaymentMethod::DebitCard => "Cartão de débito",
            PaymentMethod::Cash => "Dinheiro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pago",
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::Failed => "Falhou",
            PaymentStatus::Refunded => "Estornado",
        }
    }

    pub fn badge_modifier(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "success",
            PaymentStatus::Pending => "warning",
            PaymentStatus::Failed => "error",
            PaymentStatus::Refunded => "neutral",
        }
    }
}

/// Pagamento de uma assinatura
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub subscription_id: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl CsvExportable for Payment {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Assinatura", "Valor", "Forma", "Status", "Data", "Referência"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.subscription_id.clone(),
            format_brl(self.amount_cents),
            self.method.label().to_string(),
            self.status.label().to_string(),
            self.paid_at.format("%d/%m/%Y").to_string(),
            self.reference.clone().unwrap_or_default(),
        ]
    }
}

/// Registro manual de pagamento (`POST /payments`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentDto {
    pub subscription_id: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub paid_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CreatePaymentDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.subscription_id.trim().is_empty() {
            return Err("Assinatura não informada".to_string());
        }
        if self.amount_cents <= 0 {
            return Err("Valor deve ser maior que zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payment_payload() {
        let dto = CreatePaymentDto {
            subscription_id: "sub-1".into(),
            amount_cents: 8990,
            method: PaymentMethod::CreditCard,
            paid_at: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            reference: None,
        };
        assert_eq!(dto.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "subscription_id": "sub-1",
                "amount_cents": 8990,
                "method": "credit_card",
                "paid_at": "2024-06-03"
            })
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let dto = CreatePaymentDto {
            subscription_id: "sub-1".into(),
            amount_cents: 0,
            method: PaymentMethod::Pix,
            paid_at: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            reference: None,
        };
        assert_eq!(dto.validate(), Err("Valor deve ser maior que zero".into()));
    }

    #[test]
    fn test_payment_csv_row() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "pay-9",
            "subscription_id": "sub-1",
            "amount_cents": 123456,
            "method": "pix",
            "status": "paid",
            "paid_at": "2024-06-03T15:00:00Z"
        }))
        .unwrap();
        assert_eq!(
            payment.to_csv_row(),
            vec!["pay-9", "sub-1", "R$ 1.234,56", "PIX", "Pago", "03/06/2024", ""]
        );
    }
}
