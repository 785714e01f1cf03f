pub mod state;

use self::state::create_state;
use super::timeline::InteractionTimeline;
use crate::domain::a006_funnel_interaction::api;
use crate::shared::components::{
    ErrorBox, PageHeader, PaginationControls, StatusBadge, TableCheckbox, TableHeaderCheckbox,
};
use crate::shared::config::page_size;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::export::{alert_on_error, export_csv};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_funnel_interaction::{
    FunnelInteraction, FunnelScreen, FunnelStatus, InteractionFilter,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Lista de interações do funil com filtros, exclusão em lote e linha do
/// tempo do registro selecionado.
#[component]
pub fn InteractionList() -> impl IntoView {
    let state = create_state(page_size());
    let (loading, set_loading) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let opened = RwSignal::new(None::<FunnelInteraction>);

    // Campos do formulário de filtro; só viram filtro ao aplicar.
    let status_input = RwSignal::new(String::new());
    let screen_input = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());

    let load_data = move || {
        let (filter, page) = state.with_untracked(|s| (s.filter.clone(), s.page_request()));
        set_loading.set(true);
        spawn_local(async move {
            let mut page = page;
            loop {
                match api::fetch_interactions(&filter, page).await {
                    Ok(resp) => {
                        let mut refetch = false;
                        state.update(|s| refetch = s.apply_page(resp.interactions, resp.total));
                        set_error.set(None);
                        if refetch {
                            page = state.with_untracked(|s| s.page_request());
                            log::debug!("page past the end, refetching page {}", page.wire_page());
                            continue;
                        }
                    }
                    Err(e) => {
                        log::error!("fetch interactions failed: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
                break;
            }
            set_loading.set(false);
        });
    };

    let apply_filters = move || {
        let filter = InteractionFilter {
            status: FunnelStatus::from_wire(&status_input.get_untracked()),
            screen: {
                let raw = screen_input.get_untracked();
                (!raw.is_empty()).then(|| FunnelScreen::from_wire(&raw))
            },
            search: search_input.get_untracked().trim().to_string(),
        };
        state.update(|s| s.apply_filter(filter));
        load_data();
    };

    let clear_filters = move |_| {
        status_input.set(String::new());
        screen_input.set(String::new());
        search_input.set(String::new());
        state.update(|s| s.apply_filter(InteractionFilter::default()));
        load_data();
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

    let after_delete = move |deleted: Vec<String>| {
        let open_id = opened.with_untracked(|o| o.as_ref().map(|i| i.id.clone()));
        let mut close_timeline = false;
        state.update(|s| close_timeline = s.after_delete(&deleted, open_id.as_deref()));
        if close_timeline {
            opened.set(None);
        }
        load_data();
    };

    let delete_one = move |item: FunnelInteraction| {
        let msg = format!("Excluir a interação de \"{}\"?", item.display_name());
        if !confirm(&msg) {
            return;
        }
        spawn_local(async move {
            match api::delete_interaction(&item.id).await {
                Ok(()) => after_delete(vec![item.id]),
                Err(e) => {
                    log::error!("delete interaction {} failed: {}", item.id, e);
                    alert(&format!("Erro ao excluir: {}", e));
                    load_data();
                }
            }
        });
    };

    let delete_selected = move |_| {
        let ids = state.with_untracked(|s| s.selected_in_order());
        if ids.is_empty() {
            return;
        }
        let msg = format!("Excluir {} interação(ões) selecionada(s)?", ids.len());
        if !confirm(&msg) {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let outcome = api::delete_interactions(&ids).await;
            log::info!(
                "bulk delete: {} ok, {} failed",
                outcome.succeeded,
                outcome.failed
            );
            set_deleting.set(false);
            alert(&outcome.delete_summary());
            after_delete(ids);
        });
    };

    let export = move |_| {
        let items = state.with_untracked(|s| s.items.clone());
        if items.is_empty() {
            alert("Nada para exportar nesta página.");
            return;
        }
        alert_on_error(export_csv(&items, "interacoes_funil"));
    };

    let selected_count = Signal::derive(move || state.with(|s| s.selected_ids.len()));

    load_data();

    view! {
        <PageFrame page_id="a006_funnel_interaction--list" category=PAGE_CAT_LIST>
            <PageHeader title="Funil de cadastro".to_string() icon_name="filter">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Atualizar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=delete_selected
                    disabled=Signal::derive(move || selected_count.get() == 0 || deleting.get())
                    loading=deleting
                >
                    {icon("delete")}
                    {move || format!(" Excluir ({})", selected_count.get())}
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
                    {FunnelStatus::ALL.into_iter().map(|st| view! {
                        <option value=st.as_str()>{st.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-bar__select"
                    prop:value=move || screen_input.get()
                    on:change=move |ev| {
                        screen_input.set(event_target_value(&ev));
                        apply_filters();
                    }
                >
                    <option value="">"Todas as telas"</option>
                    {FunnelScreen::TEMPLATE.iter().map(|sc| view! {
                        <option value=sc.as_str().to_string()>{sc.label().to_string()}</option>
                    }).collect_view()}
                </select>
                <div class="filter-bar__search">
                    {icon("search")}
                    <Input value=search_input placeholder="Nome, CPF, telefone ou e-mail" />
                </div>
                <Button button_type=ButtonType::Submit appearance=ButtonAppearance::Secondary>
                    "Filtrar"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                    {icon("x")}
                    " Limpar"
                </Button>
            </form>

            <ErrorBox error=error />

            <div class="split-view">
                <div class="split-view__main">
                    <div class="table-container">
                        <table class="table__data">
                            <thead>
                                <tr>
                                    <TableHeaderCheckbox
                                        all_checked=Signal::derive(move || state.with(|s| s.all_on_page_selected()))
                                        on_change=Callback::new(move |checked| state.update(|s| s.set_all_on_page(checked)))
                                    />
                                    <th class="table__header-cell">"Cliente"</th>
                                    <th class="table__header-cell">"Tela atual"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Local"</th>
                                    <th class="table__header-cell">"Início"</th>
                                    <th class="table__header-cell">"Atualizado"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let items = state.with(|s| s.items.clone());
                                    if items.is_empty() && state.with(|s| s.is_loaded) {
                                        return view! {
                                            <tr>
                                                <td class="table__cell table__cell--empty" colspan="8">
                                                    "Nenhuma interação encontrada."
                                                </td>
                                            </tr>
                                        }.into_any();
                                    }
                                    items.into_iter().map(|item| {
                                        let id = item.id.clone();
                                        let id_sel = id.clone();
                                        let id_row = id.clone();
                                        let item_open = item.clone();
                                        let item_del = item.clone();
                                        let status = item.status;
                                        view! {
                                            <tr
                                                class="table__row"
                                                class:table__row--selected=move || {
                                                    opened.with(|o| o.as_ref().is_some_and(|i| i.id == id_row))
                                                }
                                                on:click=move |_| opened.set(Some(item_open.clone()))
                                            >
                                                <TableCheckbox
                                                    checked=Signal::derive(move || state.with(|s| s.selected_ids.contains(&id_sel)))
                                                    on_change=Callback::new(move |checked| state.update(|s| s.toggle(&id, checked)))
                                                />
                                                <td class="table__cell">
                                                    <div>{item.display_name()}</div>
                                                    <div class="table__cell-secondary">
                                                        {item.customer_email.clone().or(item.customer_phone.clone()).unwrap_or_default()}
                                                    </div>
                                                </td>
                                                <td class="table__cell">{item.current_screen.label().to_string()}</td>
                                                <td class="table__cell">
                                                    <StatusBadge label=status.label() modifier=status.badge_modifier() />
                                                </td>
                                                <td class="table__cell">{item.metadata.location_label()}</td>
                                                <td class="table__cell">{format_datetime(item.created_at)}</td>
                                                <td class="table__cell">{format_datetime(item.updated_at)}</td>
                                                <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                                    <button
                                                        class="button button--icon"
                                                        title="Excluir"
                                                        on:click=move |_| delete_one(item_del.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
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
                        on_page_change=go_to_page
                        on_page_size_change=change_page_size
                    />
                </div>

                {move || opened.get().map(|item| view! {
                    <aside class="split-view__side">
                        <InteractionTimeline
                            interaction=item
                            on_close=Callback::new(move |_| opened.set(None))
                        />
                    </aside>
                })}
            </div>

            <Show when=move || loading.get() && !state.with(|s| s.is_loaded)>
                <Spinner />
            </Show>
        </PageFrame>
    }
}
