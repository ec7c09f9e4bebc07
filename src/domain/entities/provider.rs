//! Care-provider entity.

use serde::{Deserialize, Serialize};

use crate::domain::registry::{ProviderKind, Specialty};

/// A care provider listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Display name.
    pub name: String,
    /// Key into the provider-type registry.
    pub kind: ProviderKind,
    /// Key into the specialty registry.
    pub specialty: Specialty,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Street address.
    pub address: String,
    /// Distance from the patient, in kilometers.
    pub distance_km: f32,
    /// Next available slot label, if known.
    pub next_available: Option<String>,
}

impl Provider {
    /// Creates a new provider record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: ProviderKind,
        specialty: Specialty,
        rating: f32,
        review_count: u32,
        address: impl Into<String>,
        distance_km: f32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            specialty,
            rating,
            review_count,
            address: address.into(),
            distance_km,
            next_available: None,
        }
    }

    /// Sets the next available slot label.
    #[must_use]
    pub fn with_next_available(mut self, label: impl Into<String>) -> Self {
        self.next_available = Some(label.into());
        self
    }

    /// Rating with review count, e.g. `4.8 (120)`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1} ({})", self.rating, self.review_count)
    }

    /// Distance label, e.g. `2.3 km`.
    #[must_use]
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels() {
        let provider = Provider::new(
            "Dr. Mario Vega",
            ProviderKind::Medico,
            Specialty::General,
            4.75,
            132,
            "Av. Libertad 450",
            2.34,
        );

        assert_eq!(provider.rating_label(), "4.8 (132)");
        assert_eq!(provider.distance_label(), "2.3 km");
        assert!(provider.next_available.is_none());
    }

    #[test]
    fn with_next_available() {
        let provider = Provider::new(
            "Lic. Carla Soto",
            ProviderKind::Enfermero,
            Specialty::General,
            4.9,
            88,
            "Calle Sur 12",
            0.8,
        )
        .with_next_available("Hoy 16:00");

        assert_eq!(provider.next_available.as_deref(), Some("Hoy 16:00"));
    }
}
