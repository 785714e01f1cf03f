//! Categorias de página para as abas.
//!
//! Toda página renderizada numa aba declara:
//!   - `id` no formato `{entity}--{category}` (ex.: `"a001_customer--list"`)
//!   - `data-page-category` com uma das constantes abaixo
//!
//! O separador `--` permite copiar o id no inspetor do navegador e achar o
//! diretório `domain/a001_customer/` na busca do editor.

/// Lista com filtros/paginação.
pub const PAGE_CAT_LIST: &str = "list";

/// Formulário ou detalhe de um registro.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Painel analítico.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Relatório exportável.
pub const PAGE_CAT_REPORT: &str = "report";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_REPORT,
];

/// Confere se o id da página segue o formato `{entity}--{category}`.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_customer--list"));
        assert!(is_valid_page_id("d401_funnel_analytics--dashboard"));
        assert!(!is_valid_page_id("a001_customer"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("report"));
        assert!(!is_known_category("usecase"));
    }
}
