//! Semana do calendário de agendamentos.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate};

use super::aggregate::{Appointment, AppointmentRangeQuery};

/// Segunda-feira da semana que contém `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Intervalo inclusivo enviado à API para a semana iniciada em `start`.
pub fn week_range(start: NaiveDate) -> AppointmentRangeQuery {
    AppointmentRangeQuery {
        from: start,
        to: start + Duration::days(6),
    }
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday().num_days_from_monday() {
        0 => "Seg",
        1 => "Ter",
        2 => "Qua",
        3 => "Qui",
        4 => "Sex",
        5 => "Sáb",
        _ => "Dom",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
}

/// Distribui os agendamentos pelos dias da semana no fuso local `offset`,
/// cada dia ordenado pelo horário de início. Agendamentos fora da semana
/// são descartados.
pub fn group_by_day(
    appointments: &[Appointment],
    start: NaiveDate,
    offset: FixedOffset,
) -> Vec<CalendarDay> {
    let mut days: Vec<CalendarDay> = week_days(start)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            appointments: Vec::new(),
        })
        .collect();

    for appt in appointments {
        let local_date = appt.starts_at.with_timezone(&offset).date_naive();
        if let Some(day) = days.iter_mut().find(|d| d.date == local_date) {
            day.appointments.push(appt.clone());
        }
    }

    for day in days.iter_mut() {
        day.appointments.sort_by_key(|a| a.starts_at);
    }

    days
}

/// `HH:MM` no fuso local.
pub fn local_time_label(at: chrono::DateTime<chrono::Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_appointment::AppointmentStatus;
    use chrono::{TimeZone, Utc};

    fn appt(id: &str, y: i32, m: u32, d: u32, h: u32) -> Appointment {
        let starts_at = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        Appointment {
            id: id.to_string(),
            customer_name: "Cliente".into(),
            barber_name: "Zé".into(),
            service: "Corte".into(),
            starts_at,
            ends_at: starts_at + Duration::minutes(30),
            status: AppointmentStatus::Scheduled,
        }
    }

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        let wed = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        let sun = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(week_start(sun), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(weekday_label(sun), "Dom");
    }

    #[test]
    fn test_week_range() {
        let range = week_range(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn test_group_by_local_day_and_sort() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let items = vec![
            appt("late", 2024, 6, 3, 20),
            appt("early", 2024, 6, 3, 12),
            // 01:00 UTC de terça ainda é segunda 22:00 em UTC-3
            appt("night", 2024, 6, 4, 1),
            appt("next-week", 2024, 6, 11, 12),
        ];
        let days = group_by_day(&items, start, brt());
        assert_eq!(days.len(), 7);
        let monday: Vec<&str> = days[0].appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(monday, vec!["early", "late", "night"]);
        assert!(days[1..].iter().all(|d| d.appointments.is_empty()));
    }

    #[test]
    fn test_local_time_label() {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 12, 30, 0).unwrap();
        assert_eq!(local_time_label(at, brt()), "09:30");
    }
}
