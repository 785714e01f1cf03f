mod form_state;

use self::form_state::PlanFormFields;
use crate::domain::a002_plan::api;
use crate::shared::components::{ErrorBox, PageHeader, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_plan::{BillingCycle, Plan};
use contracts::shared::money::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PlanList() -> impl IntoView {
    let (plans, set_plans) = signal(Vec::<Plan>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    // Diálogo
    let dialog_open = RwSignal::new(false);
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let billing_cycle = RwSignal::new(String::new());
    let services = RwSignal::new(String::new());
    let active = RwSignal::new(true);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_plans().await {
                Ok(list) => {
                    set_plans.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch plans failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let open_form = move |fields: PlanFormFields| {
        editing_id.set(fields.id);
        name.set(fields.name);
        description.set(fields.description);
        price.set(fields.price);
        billing_cycle.set(fields.billing_cycle);
        services.set(fields.services);
        active.set(fields.active);
        set_form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let fields = PlanFormFields {
            id: editing_id.get_untracked(),
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            billing_cycle: billing_cycle.get_untracked(),
            services: services.get_untracked(),
            active: active.get_untracked(),
        };
        let dto = match fields.to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                set_form_error.set(Some(msg));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::save_plan(&dto).await {
                Ok(saved) => {
                    log::info!("plan saved: {}", saved.id);
                    dialog_open.set(false);
                    load();
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    load();

    view! {
        <PageFrame page_id="a002_plan--list" category=PAGE_CAT_LIST>
            <PageHeader title="Planos".to_string() icon_name="scissors">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() loading=loading>
                    {icon("refresh")}
                    " Atualizar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_form(PlanFormFields::blank())
                >
                    {icon("plus")}
                    " Novo plano"
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell table__header-cell--right">"Preço"</th>
                            <th class="table__header-cell">"Ciclo"</th>
                            <th class="table__header-cell">"Serviços"</th>
                            <th class="table__header-cell">"Situação"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || plans.get()
                            key=|p| (p.id.clone(), p.name.clone(), p.price_cents, p.active)
                            children=move |plan: Plan| {
                                let fields = PlanFormFields::from_plan(&plan);
                                let (label, modifier) = if plan.active {
                                    ("Ativo", "success")
                                } else {
                                    ("Inativo", "neutral")
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <div>{plan.name.clone()}</div>
                                            <div class="table__cell-secondary">
                                                {plan.description.clone().unwrap_or_default()}
                                            </div>
                                        </td>
                                        <td class="table__cell table__cell--right">{format_brl(plan.price_cents)}</td>
                                        <td class="table__cell">{plan.billing_cycle.label()}</td>
                                        <td class="table__cell">{plan.services_label()}</td>
                                        <td class="table__cell">
                                            <StatusBadge label=label modifier=modifier />
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title="Editar"
                                                on:click=move |_| open_form(fields.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || if editing_id.get().is_some() { "Editar plano" } else { "Novo plano" }}
                        </DialogTitle>
                        <DialogContent>
                            <ErrorBox error=form_error />
                            <Flex vertical=true gap=FlexGap::Medium>
                                <div class="form__group">
                                    <label class="form__label">"Nome"</label>
                                    <Input value=name />
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Descrição"</label>
                                    <Input value=description placeholder="opcional" />
                                </div>
                                <div class="form__row">
                                    <div class="form__group">
                                        <label class="form__label">"Preço (R$)"</label>
                                        <Input value=price placeholder="89,90" />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Ciclo"</label>
                                        <Select value=billing_cycle>
                                            {BillingCycle::ALL.into_iter().map(|c| view! {
                                                <option value=c.as_str()>{c.label()}</option>
                                            }).collect_view()}
                                        </Select>
                                    </div>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Serviços por ciclo"</label>
                                    <Input value=services input_type=InputType::Number placeholder="vazio = ilimitado" />
                                </div>
                                <Checkbox checked=active label="Plano ativo" />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=save
                                loading=saving
                            >
                                "Salvar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| dialog_open.set(false)
                            >
                                "Cancelar"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
