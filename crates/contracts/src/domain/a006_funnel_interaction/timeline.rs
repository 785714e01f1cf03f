//! Linha do tempo de um fluxo de cadastro.
//!
//! O estado de cada etapa é derivado comparando a posição da tela atual no
//! template fixo, não os horários registrados. Se o servidor reordenar as
//! telas, a renderização diverge até o template ser atualizado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{FunnelScreen, FunnelStatus};

/// Passagem registrada por uma tela.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub screen: FunnelScreen,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Abandoned,
    Future,
}

impl StepState {
    /// Etapas ainda não alcançadas são desenhadas com opacidade reduzida.
    pub fn is_dimmed(&self) -> bool {
        matches!(self, StepState::Future)
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            StepState::Completed => "completed",
            StepState::Current => "current",
            StepState::Abandoned => "abandoned",
            StepState::Future => "future",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub screen: FunnelScreen,
    pub state: StepState,
    pub reached_at: Option<DateTime<Utc>>,
}

pub fn timeline_steps(
    current: &FunnelScreen,
    status: FunnelStatus,
    entries: &[TimelineEntry],
) -> Vec<TimelineStep> {
    let current_idx = current.template_index();

    FunnelScreen::TEMPLATE
        .iter()
        .enumerate()
        .map(|(idx, screen)| {
            let state = match current_idx {
                None => StepState::Future,
                Some(cur) if idx < cur => StepState::Completed,
                Some(cur) if idx == cur => match status {
                    FunnelStatus::InProgress => StepState::Current,
                    FunnelStatus::Abandoned => StepState::Abandoned,
                    FunnelStatus::Completed => StepState::Completed,
                },
                Some(_) => StepState::Future,
            };
            // primeira passagem na ordem recebida, não a mais antiga
            let reached_at = entries
                .iter()
                .find(|e| &e.screen == screen)
                .map(|e| e.timestamp);

            TimelineStep {
                screen: screen.clone(),
                state,
                reached_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, min, 0).unwrap()
    }

    fn states(steps: &[TimelineStep]) -> Vec<StepState> {
        steps.iter().map(|s| s.state).collect()
    }

    #[test]
    fn test_abandoned_at_index_two() {
        let steps = timeline_steps(&FunnelScreen::PersonalDetails, FunnelStatus::Abandoned, &[]);
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[0].state, StepState::Completed);
        assert_eq!(steps[1].state, StepState::Completed);
        assert_eq!(steps[2].state, StepState::Abandoned);
        for step in &steps[3..] {
            assert_eq!(step.state, StepState::Future);
            assert!(step.state.is_dimmed());
        }
        assert!(!steps[2].state.is_dimmed());
    }

    #[test]
    fn test_in_progress_marks_current() {
        let steps = timeline_steps(&FunnelScreen::SignupStart, FunnelStatus::InProgress, &[]);
        assert_eq!(steps[0].state, StepState::Current);
        assert!(steps[1..].iter().all(|s| s.state == StepState::Future));
    }

    #[test]
    fn test_completed_flow() {
        let steps =
            timeline_steps(&FunnelScreen::PaymentCompleted, FunnelStatus::Completed, &[]);
        assert!(states(&steps).iter().all(|s| *s == StepState::Completed));
    }

    #[test]
    fn test_unknown_screen_renders_all_future() {
        let steps = timeline_steps(
            &FunnelScreen::Other("upsell".into()),
            FunnelStatus::InProgress,
            &[],
        );
        assert!(states(&steps).iter().all(|s| *s == StepState::Future));
    }

    #[test]
    fn test_reached_at_uses_first_visit() {
        let entries = vec![
            TimelineEntry { screen: FunnelScreen::SignupStart, timestamp: at(0) },
            TimelineEntry { screen: FunnelScreen::CpfEntry, timestamp: at(5) },
            TimelineEntry { screen: FunnelScreen::CpfEntry, timestamp: at(1) },
        ];
        let steps = timeline_steps(&FunnelScreen::CpfEntry, FunnelStatus::InProgress, &entries);
        assert_eq!(steps[0].reached_at, Some(at(0)));
        assert_eq!(steps[1].reached_at, Some(at(5)));
        assert_eq!(steps[2].reached_at, None);
    }
}
