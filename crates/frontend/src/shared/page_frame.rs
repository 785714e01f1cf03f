//! PageFrame — wrapper raiz de toda página exibida numa aba.
//!
//! Garante no elemento raiz:
//!   - `id`                  — `"{entity}--{category}"`, ex.: `"a001_customer--list"`
//!   - `data-page-category`  — uma das constantes PAGE_CAT_*

use super::page_standard::*;
use leptos::prelude::*;

/// Adiciona o modificador BEM conforme a categoria:
/// - `list`, `report` → `page`
/// - `detail`         → `page page--detail`
/// - `dashboard`      → `page page--dashboard`
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// Uma das constantes PAGE_CAT_* de `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "bad page category: {category}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
