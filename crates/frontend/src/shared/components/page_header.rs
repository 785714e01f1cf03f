use crate::shared::icons::icon;
use leptos::prelude::*;

/// Cabeçalho padrão das páginas: título, subtítulo opcional e ações à direita.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Ícone opcional antes do título
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Botões de ação (passe um fragmento vazio se não houver)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header header">
            <div class="header__content">
                {icon_name.map(|name| view! { <span class="header__icon">{icon(name)}</span> })}
                <div class="header__text">
                    <h1 class="header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="header__actions">
                {children()}
            </div>
        </div>
    }
}
