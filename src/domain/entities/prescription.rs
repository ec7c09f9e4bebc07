//! Digital prescription entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A digital prescription held in the patient's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Stable identifier.
    pub id: String,
    /// Prescribing professional.
    pub doctor: String,
    /// Issue instant, UTC.
    pub date: DateTime<Utc>,
    /// Prescribed medications, in order.
    pub medications: Vec<String>,
    /// Captured image URI, if the prescription was scanned.
    pub image_uri: Option<String>,
}

impl Prescription {
    /// Creates a new prescription record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        doctor: impl Into<String>,
        date: DateTime<Utc>,
        medications: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            doctor: doctor.into(),
            date,
            medications,
            image_uri: None,
        }
    }

    /// Attaches a captured image URI.
    #[must_use]
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Generates a timestamp-based identifier for a newly captured record.
    #[must_use]
    pub fn generate_id(at: DateTime<Utc>) -> String {
        format!("rx-{}", at.timestamp_millis())
    }
}
