//! Registro de conteúdo das abas: tab.key → View.

use super::tab_labels::{PAYMENT_NEW_PREFIX, SUBSCRIPTION_DETAIL_PREFIX};
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_funnel_analytics::ui::FunnelAnalyticsDashboard;
use crate::domain::a001_customer::ui::form::CustomerForm;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_plan::ui::list::PlanList;
use crate::domain::a003_subscription::ui::details::SubscriptionDetails;
use crate::domain::a003_subscription::ui::list::SubscriptionList;
use crate::domain::a004_payment::ui::form::PaymentForm;
use crate::domain::a005_appointment::ui::calendar::AppointmentCalendar;
use crate::domain::a006_funnel_interaction::ui::list::InteractionList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_reports::ui::ReportsPage;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d401_funnel_analytics" => view! { <FunnelAnalyticsDashboard /> }.into_any(),
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a001_customer_new" => view! { <CustomerForm on_close=on_close /> }.into_any(),
        "a002_plan" => view! { <PlanList /> }.into_any(),
        "a003_subscription" => view! { <SubscriptionList /> }.into_any(),
        "a004_payment_new" => view! { <PaymentForm on_close=on_close /> }.into_any(),
        "a005_appointment" => view! { <AppointmentCalendar /> }.into_any(),
        "a006_funnel_interaction" => view! { <InteractionList /> }.into_any(),
        "p900_reports" => view! { <ReportsPage /> }.into_any(),

        k if k.starts_with(SUBSCRIPTION_DETAIL_PREFIX) => {
            let id = k.trim_start_matches(SUBSCRIPTION_DETAIL_PREFIX).to_string();
            log!("✅ Creating SubscriptionDetails for: {}", id);
            view! { <SubscriptionDetails id=id tab_key=k.to_string() on_close=on_close /> }.into_any()
        }
        k if k.starts_with(PAYMENT_NEW_PREFIX) => {
            let subscription_id = k.trim_start_matches(PAYMENT_NEW_PREFIX).to_string();
            view! { <PaymentForm subscription_id=subscription_id on_close=on_close /> }.into_any()
        }

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">"Página não encontrada"</div> }.into_any()
        }
    }
}
