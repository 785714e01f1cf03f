use serde::{Deserialize, Serialize};

use crate::shared::money::format_brl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Mensal",
            BillingCycle::Quarterly => "Trimestral",
            BillingCycle::Yearly => "Anual",
        }
    }
}

/// Plano de assinatura
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    pub billing_cycle: BillingCycle,
    /// `None` = serviços ilimitados no ciclo
    #[serde(default)]
    pub services_per_cycle: Option<u32>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Plan {
    /// `R$ 89,90 / Mensal`
    pub fn price_label(&self) -> String {
        format!("{} / {}", format_brl(self.price_cents), self.billing_cycle.label())
    }

    pub fn services_label(&self) -> String {
        match self.services_per_cycle {
            Some(n) => n.to_string(),
            None => "Ilimitado".to_string(),
        }
    }
}

/// Formulário de criação/edição (`POST /plans`, `PUT /plans/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_cents: i64,
    pub billing_cycle: BillingCycle,
    pub services_per_cycle: Option<u32>,
    pub active: bool,
}

impl PlanDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do plano é obrigatório".to_string());
        }
        if self.price_cents <= 0 {
            return Err("Preço deve ser maior que zero".to_string());
        }
        if self.services_per_cycle == Some(0) {
            return Err("Quantidade de serviços deve ser maior que zero".to_string());
        }
        Ok(())
    }
}

impl From<Plan> for PlanDto {
    fn from(p: Plan) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            description: p.description,
            price_cents: p.price_cents,
            billing_cycle: p.billing_cycle,
            services_per_cycle: p.services_per_cycle,
            active: p.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_labels() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "p1",
            "name": "Corte ilimitado",
            "price_cents": 8990,
            "billing_cycle": "monthly"
        }))
        .unwrap();
        assert!(plan.active);
        assert_eq!(plan.price_label(), "R$ 89,90 / Mensal");
        assert_eq!(plan.services_label(), "Ilimitado");
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = PlanDto {
            name: "Barba".into(),
            price_cents: 4500,
            services_per_cycle: Some(4),
            active: true,
            ..Default::default()
        };
        assert_eq!(dto.validate(), Ok(()));
        dto.price_cents = 0;
        assert!(dto.validate().is_err());
        dto.price_cents = 100;
        dto.services_per_cycle = Some(0);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_cycle_wire_names() {
        assert_eq!(BillingCycle::from_wire("yearly"), Some(BillingCycle::Yearly));
        assert_eq!(serde_json::to_value(BillingCycle::Quarterly).unwrap(), json!("quarterly"));
    }
}
