use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::csv::CsvExportable;
use crate::shared::masks::{is_valid_cpf, is_valid_phone, mask_cpf, mask_phone, only_digits};
use crate::shared::pagination::PageRequest;

/// Resumo da assinatura ativa mostrado na busca de clientes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSubscriptionSummary {
    pub subscription_id: String,
    pub plan_name: String,
    pub status: String,
}

/// Cliente da barbearia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Somente dígitos, como o servidor guarda
    pub cpf: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub active_subscription: Option<ActiveSubscriptionSummary>,
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["Nome", "CPF", "Telefone", "E-mail", "Nascimento", "Plano", "Cadastro"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            mask_cpf(&self.cpf),
            mask_phone(&self.phone),
            self.email.clone().unwrap_or_default(),
            self.birth_date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
            self.active_subscription
                .as_ref()
                .map(|s| s.plan_name.clone())
                .unwrap_or_default(),
            self.created_at.format("%d/%m/%Y").to_string(),
        ]
    }
}

/// Resposta de `GET /customers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerListResponse {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub total: u64,
}

/// Query string de `GET /customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl CustomerQuery {
    pub fn new(search: &str, page: PageRequest) -> Self {
        let search = search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            page: page.wire_page(),
            limit: page.page_size,
        }
    }
}

/// Formulário de cadastro (`POST /customers`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerDto {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl CreateCustomerDto {
    /// Primeira mensagem de erro do formulário, se houver.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 3 {
            return Err("Nome deve ter ao menos 3 caracteres".to_string());
        }
        if !is_valid_cpf(&self.cpf) {
            return Err("CPF inválido".to_string());
        }
        if !is_valid_phone(&self.phone) {
            return Err("Telefone deve ter DDD e 8 ou 9 dígitos".to_string());
        }
        if let Some(email) = self.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !email.contains('@') {
                return Err("E-mail inválido".to_string());
            }
        }
        Ok(())
    }

    /// Versão enviada à API: documentos sem máscara, campos vazios omitidos.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            cpf: only_digits(&self.cpf),
            phone: only_digits(&self.phone),
            email: self
                .email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            birth_date: self.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_query_omits_blank_search() {
        let q = CustomerQuery::new("   ", PageRequest::new(2, 50));
        assert_eq!(q.search, None);
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 50);
        assert_eq!(
            CustomerQuery::new(" ana ", PageRequest::default()).search.as_deref(),
            Some("ana")
        );
    }

    fn form() -> CreateCustomerDto {
        CreateCustomerDto {
            name: " Ana Lima ".into(),
            cpf: "529.982.247-25".into(),
            phone: "(11) 91234-5678".into(),
            email: Some("  ".into()),
            birth_date: None,
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(form().validate(), Ok(()));

        let mut bad = form();
        bad.cpf = "123.456.789-01".into();
        assert_eq!(bad.validate(), Err("CPF inválido".into()));

        let mut bad = form();
        bad.email = Some("ana.lima".into());
        assert_eq!(bad.validate(), Err("E-mail inválido".into()));

        let mut bad = form();
        bad.name = "Al".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_normalized_payload() {
        let payload = serde_json::to_value(form().normalized()).unwrap();
        assert_eq!(
            payload,
            json!({"name": "Ana Lima", "cpf": "52998224725", "phone": "11912345678"})
        );
    }

    #[test]
    fn test_csv_row_is_masked() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "c1",
            "name": "Ana Lima",
            "cpf": "52998224725",
            "phone": "11912345678",
            "created_at": "2024-02-10T09:00:00Z",
            "active_subscription": {"subscription_id": "s1", "plan_name": "Clube Barba", "status": "active"}
        }))
        .unwrap();
        let row = customer.to_csv_row();
        assert_eq!(row[1], "529.982.247-25");
        assert_eq!(row[2], "(11) 91234-5678");
        assert_eq!(row[5], "Clube Barba");
        assert_eq!(row[6], "10/02/2024");
    }
}
