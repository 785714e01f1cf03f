use contracts::domain::a005_appointment::calendar::week_range;
use contracts::domain::a005_appointment::{Appointment, AppointmentStatus, UpdateAppointmentStatus};
use chrono::NaiveDate;

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::path_segment;

/// Agendamentos da semana iniciada em `week_start` (segunda a domingo).
pub async fn fetch_week(week_start: NaiveDate) -> Result<Vec<Appointment>, ApiError> {
    api_client::get_json_with_query("/appointments", &week_range(week_start)).await
}

pub async fn update_status(id: &str, status: AppointmentStatus) -> Result<(), ApiError> {
    api_client::patch_json(
        &format!("/appointments/{}", path_segment(id)),
        &UpdateAppointmentStatus { status },
    )
    .await
}
