//! Detalhe de uma assinatura: dados, histórico de pagamentos e cancelamento.

use crate::domain::a003_subscription::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_label, PAYMENT_NEW_PREFIX};
use crate::shared::components::{ErrorBox, PageHeader, StatusBadge};
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_subscription::SubscriptionDetail;
use contracts::shared::masks::mask_cpf;
use contracts::shared::money::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SubscriptionDetails(id: String, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let id = StoredValue::new(id);
    let tab_key = StoredValue::new(tab_key);
    let (detail, set_detail) = signal(None::<SubscriptionDetail>);
    let (error, set_error) = signal(None::<String>);
    let (canceling, set_canceling) = signal(false);

    let load = move || {
        let id = id.get_value();
        spawn_local(async move {
            match api::fetch_subscription(&id).await {
                Ok(d) => {
                    tabs_store.update_tab_title(
                        &tab_key.get_value(),
                        &detail_tab_label("Assinatura", &d.subscription.customer.name),
                    );
                    set_detail.set(Some(d));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch subscription {} failed: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let cancel = move |_| {
        let Some(name) = detail.with_untracked(|d| d.as_ref().map(|d| d.subscription.customer.name.clone())) else {
            return;
        };
        if !confirm(&format!("Cancelar a assinatura de {}?", name)) {
            return;
        }
        set_canceling.set(true);
        spawn_local(async move {
            match api::cancel_subscription(&id.get_value()).await {
                Ok(()) => load(),
                Err(e) => alert(&format!("Erro ao cancelar: {}", e)),
            }
            set_canceling.set(false);
        });
    };

    let register_payment = move |_| {
        let name = detail
            .with_untracked(|d| d.as_ref().map(|d| d.subscription.customer.name.clone()))
            .unwrap_or_default();
        tabs_store.open_tab(
            &format!("{}{}", PAYMENT_NEW_PREFIX, id.get_value()),
            &detail_tab_label("Pagamento", &name),
        );
    };

    load();

    let can_cancel = Signal::derive(move || {
        detail.with(|d| d.as_ref().is_some_and(|d| d.subscription.status.can_cancel()))
    });

    view! {
        <PageFrame page_id="a003_subscription--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title="Assinatura".to_string()
                subtitle=Signal::derive(move || detail.with(|d| d.as_ref().map(|d| d.subscription.plan.name.clone())))
                icon_name="repeat"
            >
                <Button appearance=ButtonAppearance::Primary on_click=register_payment>
                    {icon("credit-card")}
                    " Registrar pagamento"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=cancel
                    disabled=Signal::derive(move || !can_cancel.get() || canceling.get())
                    loading=canceling
                >
                    "Cancelar assinatura"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Fechar"
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            {move || detail.get().map(|d| {
                let sub = d.subscription.clone();
                let total_paid = d.total_paid_cents();
                view! {
                    <div class="card">
                        <dl class="details-list">
                            <dt>"Cliente"</dt>
                            <dd>{sub.customer.name.clone()}" · "{mask_cpf(&sub.customer.cpf)}</dd>
                            <dt>"Plano"</dt>
                            <dd>{sub.plan.name.clone()}" · "{format_brl(sub.plan.price_cents)}</dd>
                            <dt>"Status"</dt>
                            <dd><StatusBadge label=sub.status.label() modifier=sub.status.badge_modifier() /></dd>
                            <dt>"Início"</dt>
                            <dd>{format_datetime(sub.started_at)}</dd>
                            <dt>"Próxima cobrança"</dt>
                            <dd>{format_opt_datetime(sub.next_billing_at)}</dd>
                            {sub.canceled_at.map(|at| view! {
                                <dt>"Cancelada em"</dt>
                                <dd>{format_datetime(at)}</dd>
                            })}
                            <dt>"Total pago"</dt>
                            <dd>{format_brl(total_paid)}</dd>
                        </dl>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Pagamentos"</h3>
                        </div>
                        <table class="table__data">
                            <thead>
                                <tr>
                                    <th class="table__header-cell">"Data"</th>
                                    <th class="table__header-cell table__header-cell--right">"Valor"</th>
                                    <th class="table__header-cell">"Forma"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Referência"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if d.payments.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="5">
                                                "Nenhum pagamento registrado."
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    d.payments.into_iter().map(|p| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_datetime(p.paid_at)}</td>
                                            <td class="table__cell table__cell--right">{format_brl(p.amount_cents)}</td>
                                            <td class="table__cell">{p.method.label()}</td>
                                            <td class="table__cell">
                                                <StatusBadge label=p.status.label() modifier=p.status.badge_modifier() />
                                            </td>
                                            <td class="table__cell">{p.reference.unwrap_or_default()}</td>
                                        </tr>
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }
            })}
        </PageFrame>
    }
}
