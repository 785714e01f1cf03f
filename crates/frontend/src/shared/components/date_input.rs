use leptos::prelude::*;

/// Campo de data nativo do navegador.
///
/// O valor trafega como `YYYY-MM-DD`; string vazia significa "sem data".
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    min: Option<String>,
    #[prop(optional)]
    max: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            prop:value=value
            prop:disabled=disabled
            min=min
            max=max
            on:input=move |ev| on_change(event_target_value(&ev))
        />
    }
}
