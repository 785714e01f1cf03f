//! Campos do diálogo de plano como texto, convertidos para `PlanDto` ao
//! salvar.

use contracts::domain::a002_plan::{BillingCycle, Plan, PlanDto};
use contracts::shared::money::{cents_to_input, parse_brl_to_cents};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanFormFields {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub billing_cycle: String,
    /// Vazio = ilimitado
    pub services: String,
    pub active: bool,
}

impl PlanFormFields {
    pub fn blank() -> Self {
        Self {
            billing_cycle: BillingCycle::default().as_str().to_string(),
            active: true,
            ..Default::default()
        }
    }

    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            id: Some(plan.id.clone()),
            name: plan.name.clone(),
            description: plan.description.clone().unwrap_or_default(),
            price: cents_to_input(plan.price_cents),
            billing_cycle: plan.billing_cycle.as_str().to_string(),
            services: plan
                .services_per_cycle
                .map(|n| n.to_string())
                .unwrap_or_default(),
            active: plan.active,
        }
    }

    pub fn to_dto(&self) -> Result<PlanDto, String> {
        let price_cents = parse_brl_to_cents(&self.price)?;
        let services = self.services.trim();
        let services_per_cycle = if services.is_empty() {
            None
        } else {
            Some(
                services
                    .parse::<u32>()
                    .map_err(|_| format!("Quantidade de serviços inválida: {}", services))?,
            )
        };
        let description = self.description.trim();
        let dto = PlanDto {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price_cents,
            billing_cycle: BillingCycle::from_wire(&self.billing_cycle).unwrap_or_default(),
            services_per_cycle,
            active: self.active,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_to_dto() {
        let mut form = PlanFormFields::blank();
        form.name = " Barba ".into();
        form.price = "R$ 49,90".into();
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.name, "Barba");
        assert_eq!(dto.price_cents, 4990);
        assert_eq!(dto.billing_cycle, BillingCycle::Monthly);
        assert_eq!(dto.services_per_cycle, None);
        assert_eq!(dto.description, None);
        assert!(dto.active);
    }

    #[test]
    fn test_invalid_fields() {
        let mut form = PlanFormFields::blank();
        form.name = "Plano".into();
        form.price = "abc".into();
        assert!(form.to_dto().is_err());

        form.price = "10".into();
        form.services = "dois".into();
        assert_eq!(
            form.to_dto().unwrap_err(),
            "Quantidade de serviços inválida: dois"
        );

        form.services = "0".into();
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_edit_round_trip_keeps_id() {
        let plan = Plan {
            id: "p9".into(),
            name: "Corte + barba".into(),
            description: None,
            price_cents: 12990,
            billing_cycle: BillingCycle::Quarterly,
            services_per_cycle: Some(8),
            active: false,
        };
        let form = PlanFormFields::from_plan(&plan);
        assert_eq!(form.price, "129,90");
        assert_eq!(form.services, "8");
        let dto = form.to_dto().unwrap();
        assert_eq!(dto, PlanDto::from(plan));
    }
}
