use leptos::prelude::*;
use thaw::*;

/// Cor do thaw `Badge` para o modificador de status vindo de `contracts`
/// (`success`, `warning`, `error`, `info`, `primary`, `neutral`).
pub fn badge_color(modifier: &str) -> BadgeColor {
    match modifier {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "error" => BadgeColor::Danger,
        "info" => BadgeColor::Informative,
        "primary" => BadgeColor::Brand,
        _ => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(label: &'static str, modifier: &'static str) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(modifier)>
            {label}
        </Badge>
    }
}
