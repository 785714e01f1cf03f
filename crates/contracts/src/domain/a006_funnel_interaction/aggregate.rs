use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::shared::csv::CsvExportable;

// ============================================================================
// Screen
// ============================================================================

/// Tela do fluxo de cadastro em que o visitante está.
///
/// O servidor é dono da lista de telas; qualquer nome desconhecido vira
/// `Other` em vez de falhar a desserialização da página inteira.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunnelScreen {
    SignupStart,
    CpfEntry,
    PersonalDetails,
    ClientCreation,
    PlanSelection,
    PaymentStart,
    PaymentCompleted,
    Other(String),
}

impl FunnelScreen {
    /// Ordem fixa das etapas exibidas na linha do tempo.
    pub const TEMPLATE: [FunnelScreen; 7] = [
        FunnelScreen::SignupStart,
        FunnelScreen::CpfEntry,
        FunnelScreen::PersonalDetails,
        FunnelScreen::ClientCreation,
        FunnelScreen::PlanSelection,
        FunnelScreen::PaymentStart,
        FunnelScreen::PaymentCompleted,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FunnelScreen::SignupStart => "signup_start",
            FunnelScreen::CpfEntry => "cpf_entry",
            FunnelScreen::PersonalDetails => "personal_details",
            FunnelScreen::ClientCreation => "client_creation",
            FunnelScreen::PlanSelection => "plan_selection",
            FunnelScreen::PaymentStart => "payment_start",
            FunnelScreen::PaymentCompleted => "payment_completed",
            FunnelScreen::Other(name) => name,
        }
    }

    pub fn from_wire(name: &str) -> Self {
        match name {
            "signup_start" => FunnelScreen::SignupStart,
            "cpf_entry" => FunnelScreen::CpfEntry,
            "personal_details" => FunnelScreen::PersonalDetails,
            "client_creation" => FunnelScreen::ClientCreation,
            "plan_selection" => FunnelScreen::PlanSelection,
            "payment_start" => FunnelScreen::PaymentStart,
            "payment_completed" => FunnelScreen::PaymentCompleted,
            other => FunnelScreen::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FunnelScreen::SignupStart => "Início do cadastro",
            FunnelScreen::CpfEntry => "CPF",
            FunnelScreen::PersonalDetails => "Dados pessoais",
            FunnelScreen::ClientCreation => "Criação do cliente",
            FunnelScreen::PlanSelection => "Escolha do plano",
            FunnelScreen::PaymentStart => "Início do pagamento",
            FunnelScreen::PaymentCompleted => "Pagamento concluído",
            FunnelScreen::Other(name) => name,
        }
    }

    /// Posição da tela no template, `None` para telas fora dele.
    pub fn template_index(&self) -> Option<usize> {
        Self::TEMPLATE.iter().position(|s| s == self)
    }
}

impl Serialize for FunnelScreen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FunnelScreen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(FunnelScreen::from_wire(&name))
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl FunnelStatus {
    pub const ALL: [FunnelStatus; 3] = [
        FunnelStatus::InProgress,
        FunnelStatus::Completed,
        FunnelStatus::Abandoned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStatus::InProgress => "in_progress",
            FunnelStatus::Completed => "completed",
            FunnelStatus::Abandoned => "abandoned",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FunnelStatus::InProgress => "Em andamento",
            FunnelStatus::Completed => "Concluído",
            FunnelStatus::Abandoned => "Abandonado",
        }
    }

    /// Modificador BEM do badge (`badge--info` etc).
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            FunnelStatus::InProgress => "info",
            FunnelStatus::Completed => "success",
            FunnelStatus::Abandoned => "error",
        }
    }
}

// ============================================================================
// Interaction
// ============================================================================

/// Dados livres registrados no acesso (geolocalização, navegador...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionMetadata {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub accessed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InteractionMetadata {
    /// `"Cidade/UF"`, o que estiver disponível, ou `"-"`.
    pub fn location_label(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{}/{}", city, state),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

/// Registro de interação do funil. Somente leitura no cliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelInteraction {
    pub id: String,
    pub flow_token: String,
    pub current_screen: FunnelScreen,
    pub status: FunnelStatus,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_cpf: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub metadata: InteractionMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FunnelInteraction {
    pub fn display_name(&self) -> String {
        self.customer_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Visitante anônimo".to_string())
    }
}

impl CsvExportable for FunnelInteraction {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Token do fluxo",
            "Tela atual",
            "Status",
            "Nome",
            "CPF",
            "Telefone",
            "E-mail",
            "Local",
            "Criado em",
            "Atualizado em",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.flow_token.clone(),
            self.current_screen.label().to_string(),
            self.status.label().to_string(),
            self.customer_name.clone().unwrap_or_default(),
            self.customer_cpf.clone().unwrap_or_default(),
            self.customer_phone.clone().unwrap_or_default(),
            self.customer_email.clone().unwrap_or_default(),
            self.metadata.location_label(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}

/// Resposta de `GET /funnel/interactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionListResponse {
    #[serde(default)]
    pub interactions: Vec<FunnelInteraction>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "int-1",
            "flow_token": "ft-abc",
            "current_screen": "plan_selection",
            "status": "abandoned",
            "customer_name": "Carlos Souza",
            "metadata": {
                "city": "Campinas",
                "state": "SP",
                "accessed_at": "2024-05-01T12:00:00Z",
                "referrer": "instagram"
            },
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:07:30Z"
        })
    }

    #[test]
    fn test_deserialize_interaction() {
        let it: FunnelInteraction = serde_json::from_value(sample()).unwrap();
        assert_eq!(it.current_screen, FunnelScreen::PlanSelection);
        assert_eq!(it.status, FunnelStatus::Abandoned);
        assert_eq!(it.metadata.location_label(), "Campinas/SP");
        assert_eq!(it.metadata.extra.get("referrer"), Some(&json!("instagram")));
        assert_eq!(it.customer_cpf, None);
    }

    #[test]
    fn test_unknown_screen_is_kept() {
        let mut raw = sample();
        raw["current_screen"] = json!("upsell_offer");
        let it: FunnelInteraction = serde_json::from_value(raw).unwrap();
        assert_eq!(it.current_screen, FunnelScreen::Other("upsell_offer".into()));
        assert_eq!(it.current_screen.template_index(), None);
        assert_eq!(serde_json::to_value(&it.current_screen).unwrap(), json!("upsell_offer"));
    }

    #[test]
    fn test_template_order() {
        assert_eq!(FunnelScreen::SignupStart.template_index(), Some(0));
        assert_eq!(FunnelScreen::PersonalDetails.template_index(), Some(2));
        assert_eq!(FunnelScreen::PaymentCompleted.template_index(), Some(6));
        for screen in FunnelScreen::TEMPLATE.iter() {
            assert_eq!(&FunnelScreen::from_wire(screen.as_str()), screen);
        }
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(FunnelStatus::from_wire("in_progress"), Some(FunnelStatus::InProgress));
        assert_eq!(FunnelStatus::from_wire("done"), None);
        assert_eq!(serde_json::to_value(FunnelStatus::Abandoned).unwrap(), json!("abandoned"));
    }

    #[test]
    fn test_list_response_defaults() {
        let resp: InteractionListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.interactions.is_empty());
        assert_eq!(resp.total, 0);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut it: FunnelInteraction = serde_json::from_value(sample()).unwrap();
        assert_eq!(it.display_name(), "Carlos Souza");
        it.customer_name = Some("  ".into());
        assert_eq!(it.display_name(), "Visitante anônimo");
    }
}
