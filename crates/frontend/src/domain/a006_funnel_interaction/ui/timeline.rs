//! Painel com a linha do tempo de um fluxo de cadastro.

use contracts::domain::a006_funnel_interaction::{
    timeline_steps, FunnelInteraction, StepState, TimelineEntry,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_funnel_interaction::api;
use crate::shared::components::{ErrorBox, StatusBadge};
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::icons::icon;

fn step_state_label(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "Concluída",
        StepState::Current => "Etapa atual",
        StepState::Abandoned => "Abandonou aqui",
        StepState::Future => "Não alcançada",
    }
}

#[component]
pub fn InteractionTimeline(interaction: FunnelInteraction, on_close: Callback<()>) -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<TimelineEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let flow_token = interaction.flow_token.clone();
    spawn_local(async move {
        match api::fetch_timeline(&flow_token).await {
            Ok(list) => set_entries.set(list),
            Err(e) => {
                log::error!("timeline for {} failed: {}", flow_token, e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    let current = interaction.current_screen.clone();
    let status = interaction.status;
    let steps = Memo::new(move |_| entries.with(|list| timeline_steps(&current, status, list)));

    let title = interaction.display_name();
    let meta = interaction.metadata.clone();
    let extra: Vec<(String, String)> = meta
        .extra
        .iter()
        .map(|(k, v)| (k.clone(), contracts::shared::csv::json_cell(v)))
        .collect();
    let off_template = interaction.current_screen.template_index().is_none();
    let current_label = interaction.current_screen.label().to_string();

    view! {
        <div class="timeline-panel">
            <div class="timeline-panel__header">
                <div>
                    <h3 class="timeline-panel__title">{title}</h3>
                    <div class="timeline-panel__subtitle">
                        <StatusBadge label=status.label() modifier=status.badge_modifier() />
                        <span class="timeline-panel__token">{interaction.flow_token.clone()}</span>
                    </div>
                </div>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <ErrorBox error=error />

            {off_template.then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"ℹ"</span>
                    <span class="warning-box__text">
                        {format!("Tela \"{}\" não faz parte das etapas conhecidas.", current_label)}
                    </span>
                </div>
            })}

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <ol class="timeline">
                {move || steps.get().into_iter().enumerate().map(|(idx, step)| {
                    let modifier = step.state.css_modifier();
                    view! {
                        <li
                            class=format!("timeline__step timeline__step--{}", modifier)
                            style:opacity=if step.state.is_dimmed() { "0.4" } else { "1" }
                        >
                            <span class="timeline__marker">{idx + 1}</span>
                            <div class="timeline__body">
                                <div class="timeline__label">{step.screen.label().to_string()}</div>
                                <div class="timeline__meta">
                                    <span>{step_state_label(step.state)}</span>
                                    {step.reached_at.map(|at| view! {
                                        <span class="timeline__time">{format_datetime(at)}</span>
                                    })}
                                </div>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ol>

            <div class="timeline-panel__details">
                <h4>"Acesso"</h4>
                <dl class="details-list">
                    <dt>"Local"</dt><dd>{meta.location_label()}</dd>
                    <dt>"País"</dt><dd>{meta.country.clone().unwrap_or_else(|| "-".into())}</dd>
                    <dt>"IP"</dt><dd>{meta.ip.clone().unwrap_or_else(|| "-".into())}</dd>
                    <dt>"Navegador"</dt><dd>{meta.user_agent.clone().unwrap_or_else(|| "-".into())}</dd>
                    <dt>"Acessado em"</dt><dd>{format_opt_datetime(meta.accessed_at)}</dd>
                    {extra.into_iter().map(|(k, v)| view! { <dt>{k}</dt><dd>{v}</dd> }).collect_view()}
                </dl>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_a_label() {
        for state in [
            StepState::Completed,
            StepState::Current,
            StepState::Abandoned,
            StepState::Future,
        ] {
            assert!(!step_state_label(state).is_empty());
        }
    }
}
