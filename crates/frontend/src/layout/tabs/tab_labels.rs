//! Títulos das abas.

pub const SUBSCRIPTION_DETAIL_PREFIX: &str = "a003_subscription_detail_";
pub const PAYMENT_NEW_PREFIX: &str = "a004_payment_new_";

/// Título legível da aba para a chave; chaves desconhecidas ficam como estão.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Visão geral",
        "d401_funnel_analytics" => "Análise do funil",
        "a001_customer" => "Clientes",
        "a001_customer_new" => "Novo cliente",
        "a002_plan" => "Planos",
        "a003_subscription" => "Assinaturas",
        "a004_payment_new" => "Registrar pagamento",
        "a005_appointment" => "Agenda",
        "a006_funnel_interaction" => "Interações do funil",
        "p900_reports" => "Relatórios",
        k if k.starts_with(SUBSCRIPTION_DETAIL_PREFIX) => "Assinatura",
        k if k.starts_with(PAYMENT_NEW_PREFIX) => "Registrar pagamento",
        _ => "Página",
    }
}

/// `"Assinatura · João Silva"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_customer"), "Clientes");
        assert_eq!(tab_label_for_key("a003_subscription_detail_abc"), "Assinatura");
        assert_eq!(tab_label_for_key("a004_payment_new_abc"), "Registrar pagamento");
        assert_eq!(tab_label_for_key("nope"), "Página");
        assert_eq!(detail_tab_label("Assinatura", "João"), "Assinatura · João");
    }
}
