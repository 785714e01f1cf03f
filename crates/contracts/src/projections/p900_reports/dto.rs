use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Customers,
    Subscriptions,
    Payments,
    Appointments,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Customers,
        ReportKind::Subscriptions,
        ReportKind::Payments,
        ReportKind::Appointments,
    ];

    /// Segmento da URL `GET /reports/{slug}`
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Customers => "customers",
            ReportKind::Subscriptions => "subscriptions",
            ReportKind::Payments => "payments",
            ReportKind::Appointments => "appointments",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Customers => "Clientes",
            ReportKind::Subscriptions => "Assinaturas",
            ReportKind::Payments => "Pagamentos",
            ReportKind::Appointments => "Agendamentos",
        }
    }

    /// Prefixo do arquivo exportado
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ReportKind::Customers => "relatorio_clientes",
            ReportKind::Subscriptions => "relatorio_assinaturas",
            ReportKind::Payments => "relatorio_pagamentos",
            ReportKind::Appointments => "relatorio_agendamentos",
        }
    }
}

/// Período do relatório (`?from=&to=`), ambos inclusivos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.from > self.to {
            return Err("Data inicial deve ser anterior à final".to_string());
        }
        Ok(())
    }
}

/// Linhas do relatório: objetos planos, colunas na ordem do servidor.
pub type ReportRows = Vec<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ReportKind::from_slug("revenue"), None);
    }

    #[test]
    fn test_period_validation() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        assert!(ReportQuery { from: d(1), to: d(30) }.validate().is_ok());
        assert!(ReportQuery { from: d(2), to: d(1) }.validate().is_err());
    }
}
