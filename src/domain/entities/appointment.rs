//! Appointment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::registry::{AppointmentKind, AppointmentStatus};

/// The professional an appointment is booked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Display name, including title.
    pub name: String,
    /// Specialty label shown under the name.
    pub specialty: String,
}

impl Doctor {
    /// Creates a new doctor reference.
    #[must_use]
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

/// A booked appointment, read-only from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Stable identifier.
    pub id: String,
    /// The professional attending the appointment.
    pub doctor: Doctor,
    /// Scheduled instant, UTC.
    pub date: DateTime<Utc>,
    /// Key into the appointment-type registry.
    pub kind: AppointmentKind,
    /// Key into the appointment-status registry.
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Creates a new appointment record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        doctor: Doctor,
        date: DateTime<Utc>,
        kind: AppointmentKind,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            doctor,
            date,
            kind,
            status,
        }
    }

    /// Formats the scheduled instant with the given chrono format string.
    #[must_use]
    pub fn date_label(&self, format: &str) -> String {
        self.date.format(format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_label_uses_format_string() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let appointment = Appointment::new(
            "apt-1",
            Doctor::new("Dra. Elena Ruiz", "Cardiologia"),
            date,
            AppointmentKind::Presencial,
            AppointmentStatus::Confirmada,
        );

        assert_eq!(appointment.date_label("%d/%m/%Y %H:%M"), "15/03/2024 10:30");
    }
}
