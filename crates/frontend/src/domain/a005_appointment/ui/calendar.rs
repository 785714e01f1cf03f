//! Agenda semanal (segunda a domingo) no fuso do navegador.

use crate::domain::a005_appointment::api;
use crate::shared::components::{ErrorBox, PageHeader, StatusBadge};
use crate::shared::date_utils::{format_date, local_offset, today};
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::{Duration, NaiveDate};
use contracts::domain::a005_appointment::calendar::{
    group_by_day, local_time_label, week_start, weekday_label, CalendarDay,
};
use contracts::domain::a005_appointment::{Appointment, AppointmentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn week_title(start: NaiveDate) -> String {
    format!(
        "{} a {}",
        format_date(start),
        format_date(start + Duration::days(6))
    )
}

/// Status que o card deve mostrar depois da tentativa de troca: o pedido
/// quando o servidor aceitou, o anterior quando recusou.
fn settled_status<E>(
    previous: AppointmentStatus,
    requested: AppointmentStatus,
    result: &Result<(), E>,
) -> AppointmentStatus {
    if result.is_ok() {
        requested
    } else {
        previous
    }
}

#[component]
fn AppointmentCard(
    appt: Appointment,
    on_updated: Callback<(String, AppointmentStatus)>,
) -> impl IntoView {
    let offset = local_offset();
    let id = appt.id.clone();
    let status = appt.status;
    // valor exibido no select, revertido se o PATCH falhar
    let shown = RwSignal::new(status);

    let change_status = move |requested: AppointmentStatus| {
        let previous = shown.get_untracked();
        if requested == previous {
            return;
        }
        shown.set(requested);
        let id = id.clone();
        spawn_local(async move {
            let result = api::update_status(&id, requested).await;
            if let Err(e) = &result {
                log::error!("update appointment {} failed: {}", id, e);
                alert(&format!("Erro ao atualizar agendamento: {}", e));
            }
            shown.set(settled_status(previous, requested, &result));
            if result.is_ok() {
                on_updated.run((id, requested));
            }
        });
    };

    view! {
        <div class=format!("appointment-card appointment-card--{}", status.as_str())>
            <div class="appointment-card__time">
                {icon("clock")}
                {format!(
                    " {} - {}",
                    local_time_label(appt.starts_at, offset),
                    local_time_label(appt.ends_at, offset)
                )}
            </div>
            <div class="appointment-card__customer">{appt.customer_name.clone()}</div>
            <div class="appointment-card__meta">
                {icon("scissors")}" "{appt.service.clone()}" · "{appt.barber_name.clone()}
            </div>
            <StatusBadge label=status.label() modifier=status.badge_modifier() />
            <select
                class="appointment-card__status"
                prop:value=move || shown.get().as_str()
                on:change=move |ev| {
                    if let Some(requested) = AppointmentStatus::from_wire(&event_target_value(&ev)) {
                        change_status(requested);
                    }
                }
            >
                {AppointmentStatus::ALL.into_iter().map(|st| view! {
                    <option value=st.as_str()>{st.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn AppointmentCalendar() -> impl IntoView {
    let (start, set_start) = signal(week_start(today()));
    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move |week: NaiveDate| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_week(week).await {
                Ok(list) => {
                    set_appointments.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch appointments for week {} failed: {}", week, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load(start.get()));

    let on_updated = Callback::new(move |(id, status): (String, AppointmentStatus)| {
        set_appointments.update(|list| {
            if let Some(a) = list.iter_mut().find(|a| a.id == id) {
                a.status = status;
            }
        });
    });

    let days = Memo::new(move |_| {
        appointments.with(|list| group_by_day(list, start.get(), local_offset()))
    });

    let shift = move |weeks: i64| set_start.update(|s| *s += Duration::weeks(weeks));

    view! {
        <PageFrame page_id="a005_appointment--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Agenda".to_string()
                subtitle=Signal::derive(move || Some(week_title(start.get())))
                icon_name="calendar"
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| shift(-1)>
                    {icon("chevron-left")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| set_start.set(week_start(today()))
                >
                    "Hoje"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| shift(1)>
                    {icon("chevron-right")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| load(start.get_untracked())
                    loading=loading
                >
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <ErrorBox error=error />

            <div class="week-calendar">
                <For
                    each=move || days.get()
                    key=|day: &CalendarDay| (day.date, day.appointments.iter().map(|a| (a.id.clone(), a.status)).collect::<Vec<_>>())
                    children=move |day: CalendarDay| {
                        let is_today = day.date == today();
                        view! {
                            <div class="week-calendar__day" class:week-calendar__day--today=is_today>
                                <div class="week-calendar__day-header">
                                    <span class="week-calendar__weekday">{weekday_label(day.date)}</span>
                                    <span class="week-calendar__date">{day.date.format("%d/%m").to_string()}</span>
                                </div>
                                <div class="week-calendar__day-body">
                                    {if day.appointments.is_empty() {
                                        view! { <div class="week-calendar__empty">"—"</div> }.into_any()
                                    } else {
                                        day.appointments.into_iter().map(|appt| view! {
                                            <AppointmentCard appt=appt on_updated=on_updated />
                                        }).collect_view().into_any()
                                    }}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_title() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(week_title(start), "03/06/2024 a 09/06/2024");
    }

    #[test]
    fn test_rejected_status_change_reverts() {
        let rejected: Result<(), String> = Err("HTTP 500".to_string());
        assert_eq!(
            settled_status(AppointmentStatus::Scheduled, AppointmentStatus::Completed, &rejected),
            AppointmentStatus::Scheduled
        );
        let accepted: Result<(), String> = Ok(());
        assert_eq!(
            settled_status(AppointmentStatus::Scheduled, AppointmentStatus::Completed, &accepted),
            AppointmentStatus::Completed
        );
    }
}
