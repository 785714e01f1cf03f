use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use std::cell::Cell;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Sessão salva no localStorage; sem token não há sessão.
    pub fn restore() -> Self {
        match storage::get_token() {
            Some(token) => Self {
                access_token: Some(token),
                user_info: storage::get_user(),
            },
            None => Self::default(),
        }
    }
}

thread_local! {
    // Setter do AuthProvider montado, usado fora da árvore de componentes
    // (cliente REST ao receber 401).
    static SESSION_SETTER: Cell<Option<WriteSignal<AuthState>>> = const { Cell::new(None) };
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    if auth_state.get_untracked().access_token.is_some() {
        log::debug!("session restored from localStorage");
    }

    SESSION_SETTER.with(|s| s.set(Some(set_auth_state)));
    on_cleanup(|| SESSION_SETTER.with(|s| s.set(None)));

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Estado de autenticação do `AuthProvider`
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_session(&response.token, &response.user);
    log::info!("logged in as {}", response.user.email);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

/// Encerra a sessão a partir de qualquer lugar (ex.: resposta 401).
pub fn expire_session() {
    storage::clear_session();
    if let Some(set_auth_state) = SESSION_SETTER.with(|s| s.get()) {
        set_auth_state.set(AuthState::default());
    }
}
