//! Laboratory result entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single measurement within a lab result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabMeasurement {
    /// Measurement name, e.g. `Glucosa`.
    pub name: String,
    /// Measured value with unit.
    pub value: String,
    /// Reference range for the measurement.
    pub reference: String,
}

impl LabMeasurement {
    /// Creates a new measurement.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            reference: reference.into(),
        }
    }
}

/// A laboratory result with its measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    /// Stable identifier.
    pub id: String,
    /// Kind of analysis, e.g. `Hemograma completo`.
    pub kind: String,
    /// Sample date, UTC.
    pub date: DateTime<Utc>,
    /// Issuing laboratory.
    pub laboratory: String,
    /// Result status label, e.g. `Disponible`.
    pub status: String,
    /// Measurements, in report order.
    pub measurements: Vec<LabMeasurement>,
}

impl LabResult {
    /// Creates a new lab result.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        date: DateTime<Utc>,
        laboratory: impl Into<String>,
        status: impl Into<String>,
        measurements: Vec<LabMeasurement>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            date,
            laboratory: laboratory.into(),
            status: status.into(),
            measurements,
        }
    }
}
