use leptos::prelude::*;

/// Célula `<td>` com checkbox de seleção de linha.
///
/// O clique não se propaga para a linha, então selecionar não abre o
/// registro.
///
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || selected.get().contains(&id))
///     on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Texto para leitores de tela
    #[prop(optional)]
    label: &'static str,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=if label.is_empty() { "Selecionar linha" } else { label }
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Checkbox do cabeçalho: marca/desmarca todas as linhas visíveis.
#[component]
pub fn TableHeaderCheckbox(
    /// Todas as linhas da página estão selecionadas
    all_checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Selecionar todas"
                prop:checked=all_checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
