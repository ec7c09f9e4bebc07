//! Home-nursing service entity.

use serde::{Deserialize, Serialize};

/// A nursing-service listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NursingService {
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Opaque icon identifier.
    pub icon: String,
    /// Base price as a decimal string, e.g. `30.00`.
    pub base_price: String,
}

impl NursingService {
    /// Creates a new service listing.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        base_price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            base_price: base_price.into(),
        }
    }

    /// Currency-prefixed base price, e.g. `Desde $30.00`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("Desde ${}", self.base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_is_prefixed() {
        let service = NursingService::new(
            "Cuidado Post-operatorio",
            "Atencion despues de una cirugia",
            "bandage",
            "30.00",
        );
        assert_eq!(service.price_label(), "Desde $30.00");
    }
}
