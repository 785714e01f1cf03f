use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::{api, context::{complete_login, use_auth}};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Informe e-mail e senha".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    // troca a casca para o MainLayout
                    complete_login(response, set_auth_state);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Barbearia Admin"</h1>
                <h2>"Entrar"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <div class="form-group">
                        <label>"E-mail"</label>
                        <Input
                            input_type=InputType::Email
                            value=email
                            placeholder="admin@barbearia.com"
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label>"Senha"</label>
                        <Input
                            input_type=InputType::Password
                            value=password
                            disabled=is_loading
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=is_loading
                        loading=is_loading
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
