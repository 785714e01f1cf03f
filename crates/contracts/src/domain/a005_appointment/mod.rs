pub mod aggregate;
pub mod calendar;

pub use aggregate::{Appointment, AppointmentRangeQuery, AppointmentStatus, UpdateAppointmentStatus};
