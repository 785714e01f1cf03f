use crate::domain::a004_payment::api;
use crate::shared::components::{DateInput, ErrorBox, PageHeader};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};
use crate::shared::dialogs::alert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_payment::{CreatePaymentDto, PaymentMethod};
use contracts::shared::money::{format_brl, parse_brl_to_cents};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Monta o DTO a partir dos campos de texto do formulário.
fn build_payment(
    subscription_id: &str,
    amount: &str,
    method: &str,
    paid_at: &str,
    reference: &str,
) -> Result<CreatePaymentDto, String> {
    let amount_cents = parse_brl_to_cents(amount)?;
    let method = PaymentMethod::from_wire(method).ok_or("Selecione a forma de pagamento")?;
    let paid_at = parse_input_date(paid_at).ok_or("Informe a data do pagamento")?;
    let reference = reference.trim();
    let dto = CreatePaymentDto {
        subscription_id: subscription_id.trim().to_string(),
        amount_cents,
        method,
        paid_at,
        reference: (!reference.is_empty()).then(|| reference.to_string()),
    };
    dto.validate()?;
    Ok(dto)
}

#[component]
pub fn PaymentForm(
    /// Preenchido quando aberto a partir do detalhe da assinatura
    #[prop(optional)]
    subscription_id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let fixed_subscription = subscription_id.is_some();
    let subscription = RwSignal::new(subscription_id.unwrap_or_default());
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(PaymentMethod::Pix.as_str().to_string());
    let paid_at = RwSignal::new(to_input_date(today()));
    let reference = RwSignal::new(String::new());

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match build_payment(
            &subscription.get_untracked(),
            &amount.get_untracked(),
            &method.get_untracked(),
            &paid_at.get_untracked(),
            &reference.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_payment(&dto).await {
                Ok(payment) => {
                    log::info!("payment {} registered for {}", payment.id, payment.subscription_id);
                    alert(&format!("Pagamento de {} registrado.", format_brl(payment.amount_cents)));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("create payment failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a004_payment--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Registrar pagamento".to_string() icon_name="credit-card">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            <form class="form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label">"Assinatura"</label>
                    <Input value=subscription disabled=fixed_subscription placeholder="ID da assinatura" />
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Valor (R$)"</label>
                        <Input value=amount placeholder="89,90" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Forma de pagamento"</label>
                        <Select value=method>
                            {PaymentMethod::ALL.into_iter().map(|m| view! {
                                <option value=m.as_str()>{m.label()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Data do pagamento"</label>
                        <DateInput
                            value=paid_at
                            on_change=move |v| paid_at.set(v)
                            max=to_input_date(today())
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Referência"</label>
                        <Input value=reference placeholder="opcional" />
                    </div>
                </div>
                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        loading=saving
                        disabled=saving
                    >
                        "Registrar"
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_payment() {
        let dto = build_payment(" sub-1 ", "R$ 89,90", "pix", "2024-06-03", "  ").unwrap();
        assert_eq!(dto.subscription_id, "sub-1");
        assert_eq!(dto.amount_cents, 8990);
        assert_eq!(dto.method, PaymentMethod::Pix);
        assert_eq!(dto.paid_at, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(dto.reference, None);
    }

    #[test]
    fn test_build_payment_errors() {
        assert_eq!(
            build_payment("sub-1", "0", "pix", "2024-06-03", "").unwrap_err(),
            "Valor deve ser maior que zero"
        );
        assert_eq!(
            build_payment("sub-1", "10", "cheque", "2024-06-03", "").unwrap_err(),
            "Selecione a forma de pagamento"
        );
        assert_eq!(
            build_payment("sub-1", "10", "pix", "", "").unwrap_err(),
            "Informe a data do pagamento"
        );
        assert_eq!(
            build_payment("", "10", "pix", "2024-06-03", "").unwrap_err(),
            "Assinatura não informada"
        );
    }
}
