pub mod state;

use self::state::create_state;
use crate::domain::a003_subscription::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_label, SUBSCRIPTION_DETAIL_PREFIX};
use crate::shared::components::{ErrorBox, PageHeader, PaginationControls, StatusBadge};
use crate::shared::config::page_size;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{alert_on_error, export_csv};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_subscription::{SubscriptionFilter, SubscriptionStatus};
use contracts::shared::masks::mask_cpf;
use contracts::shared::money::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SubscriptionList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let state = create_state(page_size());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let status_input = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());

    let load_data = move || {
        let (filter, page) = state.with_untracked(|s| (s.filter.clone(), s.page_request()));
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_subscriptions(&filter, page).await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.subscriptions;
                        s.total_count = resp.total;
                        s.is_loaded = true;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch subscriptions failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let apply_filters = move || {
        let filter = SubscriptionFilter {
            status: SubscriptionStatus::from_wire(&status_input.get_untracked()),
            search: search_input.get_untracked(),
        };
        state.update(|s| s.apply_filter(filter));
        load_data();
    };

    let open_detail = move |id: String, customer_name: String| {
        let key = format!("{}{}", SUBSCRIPTION_DETAIL_PREFIX, id);
        tabs_store.open_tab(&key, &detail_tab_label("Assinatura", &customer_name));
    };

    let export = move |_| {
        let items = state.with_untracked(|s| s.items.clone());
        alert_on_error(export_csv(&items, "assinaturas"));
    };

    load_data();

    view! {
        <PageFrame page_id="a003_subscription--list" category=PAGE_CAT_LIST>
            <PageHeader title="Assinaturas".to_string() icon_name="repeat">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data() loading=loading>
                    {icon("refresh")}
                    " Atualizar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " CSV"
                </Button>
            </PageHeader>

            <form
                class="filter-bar"
                on:submit=move |ev| {
                    ev.prevent_default();
                    apply_filters();
                }
            >
                <select
                    class="filter-bar__select"
                    prop:value=move || status_input.get()
                    on:change=move |ev| {
                        status_input.set(event_target_value(&ev));
                        apply_filters();
                    }
                >
                    <option value="">"Todos os status"</option>
                    {SubscriptionStatus::ALL.into_iter().map(|st| view! {
                        <option value=st.as_str()>{st.label()}</option>
                    }).collect_view()}
                </select>
                <div class="filter-bar__search">
                    {icon("search")}
                    <Input value=search_input placeholder="Cliente, CPF ou plano" />
                </div>
                <Button button_type=ButtonType::Submit appearance=ButtonAppearance::Secondary>
                    "Filtrar"
                </Button>
            </form>

            <ErrorBox error=error />

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Plano"</th>
                            <th class="table__header-cell table__header-cell--right">"Valor"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Início"</th>
                            <th class="table__header-cell">"Próxima cobrança"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && state.with(|s| s.is_loaded) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "Nenhuma assinatura encontrada."
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            items.into_iter().map(|sub| {
                                let id = sub.id.clone();
                                let customer_name = sub.customer.name.clone();
                                let status = sub.status;
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| open_detail(id.clone(), customer_name.clone())
                                    >
                                        <td class="table__cell">
                                            <div>{sub.customer.name.clone()}</div>
                                            <div class="table__cell-secondary">{mask_cpf(&sub.customer.cpf)}</div>
                                        </td>
                                        <td class="table__cell">{sub.plan.name.clone()}</td>
                                        <td class="table__cell table__cell--right">{format_brl(sub.plan.price_cents)}</td>
                                        <td class="table__cell">
                                            <StatusBadge label=status.label() modifier=status.badge_modifier() />
                                        </td>
                                        <td class="table__cell">{format_datetime(sub.started_at)}</td>
                                        <td class="table__cell">
                                            {sub.next_billing_at.map(format_datetime).unwrap_or_else(|| "—".to_string())}
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page: usize| {
                    state.update(|s| s.page = page);
                    load_data();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load_data();
                })
            />
        </PageFrame>
    }
}
