use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Canceled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Canceled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Agendado",
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::Completed => "Atendido",
            AppointmentStatus::Canceled => "Cancelado",
            AppointmentStatus::NoShow => "Não compareceu",
        }
    }

    pub fn badge_modifier(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "info",
            AppointmentStatus::Confirmed => "primary",
            AppointmentStatus::Completed => "success",
            AppointmentStatus::Canceled => "neutral",
            AppointmentStatus::NoShow => "error",
        }
    }
}

/// Horário marcado com um barbeiro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub customer_name: String,
    pub barber_name: String,
    pub service: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Corpo de `PATCH /appointments/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
}

/// Query string de `GET /appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRangeQuery {
    pub from: chrono::NaiveDate,
    pub to: chrono::NaiveDate,
}
