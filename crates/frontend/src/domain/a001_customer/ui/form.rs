use crate::domain::a001_customer::api;
use crate::shared::components::{DateInput, ErrorBox, PageHeader};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};
use crate::shared::dialogs::alert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_customer::CreateCustomerDto;
use contracts::shared::masks::{mask_cpf, mask_phone};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Reaplica a máscara a cada alteração do campo.
fn masked(field: RwSignal<String>, mask: fn(&str) -> String) {
    Effect::new(move |_| {
        let raw = field.get();
        let formatted = mask(&raw);
        if formatted != raw {
            field.set(formatted);
        }
    });
}

#[component]
pub fn CustomerForm(on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let cpf = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    masked(cpf, mask_cpf);
    masked(phone, mask_phone);

    let build_dto = move || CreateCustomerDto {
        name: name.get_untracked(),
        cpf: cpf.get_untracked(),
        phone: phone.get_untracked(),
        email: Some(email.get_untracked()),
        birth_date: parse_input_date(&birth_date.get_untracked()),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = build_dto();
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_customer(&dto).await {
                Ok(created) => {
                    log::info!("customer created: {}", created.id);
                    alert(&format!("Cliente {} cadastrado.", created.name));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("create customer failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a001_customer--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Novo cliente".to_string() icon_name="user-plus">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            <form class="form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label">"Nome completo"</label>
                    <Input value=name placeholder="Nome do cliente" />
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"CPF"</label>
                        <Input value=cpf placeholder="000.000.000-00" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Telefone"</label>
                        <Input value=phone placeholder="(00) 00000-0000" />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"E-mail"</label>
                        <Input value=email input_type=InputType::Email placeholder="opcional" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Nascimento"</label>
                        <DateInput
                            value=birth_date
                            on_change=move |v| birth_date.set(v)
                            max=to_input_date(today())
                        />
                    </div>
                </div>
                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        loading=saving
                        disabled=saving
                    >
                        "Cadastrar"
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}
