pub mod state;

use self::state::create_state;
use crate::domain::a001_customer::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_label, SUBSCRIPTION_DETAIL_PREFIX};
use crate::shared::components::{ErrorBox, PageHeader, PaginationControls};
use crate::shared::config::page_size;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::{alert_on_error, export_csv};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::masks::{mask_cpf, mask_phone};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let state = create_state(page_size());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let search_input = RwSignal::new(String::new());

    let load_data = move || {
        let (search, page) = state.with_untracked(|s| (s.search.clone(), s.page_request()));
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_customers(&search, page).await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.customers;
                        s.total_count = resp.total;
                        s.is_loaded = true;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch customers failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    });
    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        load_data();
    });

    let export = move |_| {
        let items = state.with_untracked(|s| s.items.clone());
        alert_on_error(export_csv(&items, "clientes"));
    };

    load_data();

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clientes".to_string() icon_name="users">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| tabs_store.open_tab("a001_customer_new", "Novo cliente")
                >
                    {icon("user-plus")}
                    " Novo cliente"
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
                    let text = search_input.get_untracked();
                    state.update(|s| s.apply_search(&text));
                    load_data();
                }
            >
                <div class="filter-bar__search">
                    {icon("search")}
                    <Input value=search_input placeholder="Nome, CPF ou telefone" />
                </div>
                <Button button_type=ButtonType::Submit appearance=ButtonAppearance::Secondary loading=loading>
                    "Buscar"
                </Button>
            </form>

            <ErrorBox error=error />

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"CPF"</th>
                            <th class="table__header-cell">"Telefone"</th>
                            <th class="table__header-cell">"E-mail"</th>
                            <th class="table__header-cell">"Nascimento"</th>
                            <th class="table__header-cell">"Assinatura"</th>
                            <th class="table__header-cell">"Cadastro"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && state.with(|s| s.is_loaded) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            "Nenhum cliente encontrado."
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            items.into_iter().map(|c| {
                                let name = c.name.clone();
                                let subscription = c.active_subscription.clone().map(|sub| {
                                    let key = format!("{}{}", SUBSCRIPTION_DETAIL_PREFIX, sub.subscription_id);
                                    let title = detail_tab_label("Assinatura", &name);
                                    view! {
                                        <a
                                            href="#"
                                            class="table__link"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                tabs_store.open_tab(&key, &title);
                                            }
                                        >
                                            {sub.plan_name}
                                        </a>
                                    }
                                });
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.name}</td>
                                        <td class="table__cell">{mask_cpf(&c.cpf)}</td>
                                        <td class="table__cell">{mask_phone(&c.phone)}</td>
                                        <td class="table__cell">{c.email.unwrap_or_default()}</td>
                                        <td class="table__cell">{c.birth_date.map(format_date).unwrap_or_default()}</td>
                                        <td class="table__cell">
                                            {subscription.map(|v| v.into_any()).unwrap_or_else(|| {
                                                view! { <span class="table__cell-secondary">"Sem assinatura"</span> }.into_any()
                                            })}
                                        </td>
                                        <td class="table__cell">{format_datetime(c.created_at)}</td>
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
                on_page_change=go_to_page
                on_page_size_change=change_page_size
            />
        </PageFrame>
    }
}
