//! Barra superior: alternar menu, título, notificações, usuário e saída.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::notifications::NotificationBell;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.name)
            .unwrap_or_else(|| "Administrador".to_string())
    };
    let user_initials = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.initials())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Barbearia Admin"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell />

                <div class="top-header__user">
                    <span class="top-header__avatar">{user_initials}</span>
                    <span>{user_name}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| do_logout(set_auth_state)
                    title="Sair"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
