use crate::shared::icons::icon;
use contracts::shared::money::{format_brl, format_count, format_percent};
use leptos::prelude::*;

/// Como o valor de um `StatCard` é exibido.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    /// Valor em centavos → `R$ 1.234,56`
    MoneyCents,
    Count,
    Percent { decimals: usize },
}

pub fn format_stat(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::MoneyCents => format_brl(value.round() as i64),
        StatFormat::Count => format_count(value.max(0.0).round() as u64),
        StatFormat::Percent { decimals } => format_percent(value, decimals),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

#[component]
pub fn StatCard(
    /// Rótulo acima do valor
    label: &'static str,
    /// Nome do ícone em `icons::icon`
    icon_name: &'static str,
    /// `None` enquanto carrega ou após erro
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(optional, into)]
    tone: Signal<StatTone>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let tone_class = move || match tone.get() {
        StatTone::Success => "stat-card stat-card--success",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Error => "stat-card stat-card--error",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_stat(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(123456.0, StatFormat::MoneyCents), "R$ 1.234,56");
        assert_eq!(format_stat(1530.0, StatFormat::Count), "1.530");
        assert_eq!(format_stat(4.5, StatFormat::Percent { decimals: 1 }), "4,5%");
    }
}
