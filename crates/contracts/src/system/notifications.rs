use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notificação exibida no sino do cabeçalho
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// `payment`, `subscription`, `appointment`, `system`...
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn icon_name(&self) -> &'static str {
        match self.kind.as_str() {
            "payment" => "dollar-sign",
            "subscription" => "repeat",
            "appointment" => "calendar",
            _ => "bell",
        }
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unread_count() {
        let items: Vec<Notification> = serde_json::from_value(json!([
            {"id": "1", "title": "Pagamento", "message": "PIX recebido", "kind": "payment",
             "created_at": "2024-06-01T10:00:00Z"},
            {"id": "2", "title": "Agenda", "message": "Novo horário", "kind": "appointment",
             "read": true, "created_at": "2024-06-01T11:00:00Z"},
            {"id": "3", "title": "Aviso", "message": "Manutenção", "created_at": "2024-06-01T12:00:00Z"}
        ]))
        .unwrap();
        assert_eq!(unread_count(&items), 2);
        assert_eq!(items[0].icon_name(), "dollar-sign");
        assert_eq!(items[2].icon_name(), "bell");
    }
}
