//! Home-nursing professional entity.

use serde::{Deserialize, Serialize};

/// A nurse offering home-care services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nurse {
    /// Display name.
    pub name: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Years of experience.
    pub experience_years: u8,
    /// Ordered list of specialty labels.
    pub specialties: Vec<String>,
    /// Hourly price as a decimal string, e.g. `25.00`.
    pub price: String,
    /// Whether the nurse currently accepts bookings.
    pub available: bool,
}

impl Nurse {
    /// Creates an available nurse record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        rating: f32,
        experience_years: u8,
        specialties: Vec<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            experience_years,
            specialties,
            price: price.into(),
            available: true,
        }
    }

    /// Marks the nurse as unavailable.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Specialties joined for display, preserving order.
    #[must_use]
    pub fn specialties_label(&self) -> String {
        self.specialties.join(", ")
    }

    /// Currency-prefixed hourly price, e.g. `$25.00/hora`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}/hora", self.price)
    }

    /// Experience label, e.g. `8 anos de experiencia`.
    #[must_use]
    pub fn experience_label(&self) -> String {
        format!("{} anos de experiencia", self.experience_years)
    }
}
