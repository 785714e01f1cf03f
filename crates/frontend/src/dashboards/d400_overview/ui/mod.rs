use crate::dashboards::d400_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ErrorBox, PageHeader, StatCard, StatFormat, StatTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::DashboardStats;
use contracts::shared::money::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Churn acima disso aparece em alerta.
const CHURN_WARNING_PERCENT: f64 = 5.0;

fn churn_tone(rate: Option<f64>) -> StatTone {
    match rate {
        Some(r) if r > CHURN_WARNING_PERCENT => StatTone::Warning,
        Some(_) => StatTone::Success,
        None => StatTone::Neutral,
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_stats().await {
                Ok(data) => {
                    set_stats.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    let stat = move |f: fn(&DashboardStats) -> f64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f)))
    };
    let churn = stat(|s| s.churn_rate);

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Visão geral".to_string() icon_name="layout-dashboard">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    loading=loading
                >
                    {icon("refresh")}
                    " Atualizar"
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            <div class="stat-grid">
                <StatCard
                    label="Clientes"
                    icon_name="users"
                    value=stat(|s| s.total_customers as f64)
                    format=StatFormat::Count
                />
                <StatCard
                    label="Assinaturas ativas"
                    icon_name="repeat"
                    value=stat(|s| s.active_subscriptions as f64)
                    format=StatFormat::Count
                />
                <StatCard
                    label="Receita recorrente (mês)"
                    icon_name="dollar-sign"
                    value=stat(|s| s.monthly_revenue_cents as f64)
                    format=StatFormat::MoneyCents
                    tone=StatTone::Success
                />
                <StatCard
                    label="Agendamentos hoje"
                    icon_name="calendar"
                    value=stat(|s| s.appointments_today as f64)
                    format=StatFormat::Count
                />
                <StatCard
                    label="Pagamentos no mês"
                    icon_name="credit-card"
                    value=stat(|s| s.payments_this_month as f64)
                    format=StatFormat::Count
                />
                <StatCard
                    label="Churn"
                    icon_name="activity"
                    value=churn
                    format=StatFormat::Percent { decimals: 1 }
                    tone=Signal::derive(move || churn_tone(churn.get()))
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Pagamentos recentes"</h3>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| tabs_store.open_tab("a003_subscription", "Assinaturas")
                    >
                        "Ver assinaturas"
                    </Button>
                </div>
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Plano"</th>
                            <th class="table__header-cell">"Forma"</th>
                            <th class="table__header-cell table__header-cell--right">"Valor"</th>
                            <th class="table__header-cell">"Data"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let payments = stats.with(|s| {
                                s.as_ref().map(|s| s.recent_payments.clone()).unwrap_or_default()
                            });
                            if payments.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            "Nenhum pagamento recente."
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            payments.into_iter().map(|p| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{p.customer_name}</td>
                                    <td class="table__cell">{p.plan_name}</td>
                                    <td class="table__cell">{p.method.label()}</td>
                                    <td class="table__cell table__cell--right">{format_brl(p.amount_cents)}</td>
                                    <td class="table__cell">{format_datetime(p.paid_at)}</td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_churn_tone() {
        assert_eq!(churn_tone(None), StatTone::Neutral);
        assert_eq!(churn_tone(Some(2.0)), StatTone::Success);
        assert_eq!(churn_tone(Some(5.0)), StatTone::Success);
        assert_eq!(churn_tone(Some(7.5)), StatTone::Warning);
    }
}
