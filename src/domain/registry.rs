//! Display-metadata registries.
//!
//! Fixed, read-only mappings from domain keys to display metadata. Color
//! values are opaque hex strings consumed by the theme layer for badge
//! styling; icon values are opaque identifiers mapped to terminal glyphs.
//!
//! Keys arriving as strings (navigation payloads, config) go through
//! `from_key`, which returns `None` for anything outside the registry. An
//! unknown key is a defect in the caller's data, not a handled case: callers
//! log it and render a broken marker instead of defaulting.

use serde::{Deserialize, Serialize};

/// Display metadata for an appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    /// Stable registry key.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Badge color as a hex string.
    pub color: &'static str,
}

/// Display metadata for an appointment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMeta {
    /// Stable registry key.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Opaque icon identifier.
    pub icon: &'static str,
}

/// Display metadata for a provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderKindMeta {
    /// Stable registry key.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Opaque icon identifier.
    pub icon: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Display metadata for a medical specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialtyMeta {
    /// Stable registry key.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Opaque icon identifier.
    pub icon: &'static str,
}

/// Appointment status key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Confirmed by the provider.
    Confirmada,
    /// Awaiting confirmation.
    Pendiente,
    /// Already took place.
    Completada,
    /// Cancelled by either party.
    Cancelada,
}

impl AppointmentStatus {
    /// All registry entries, in display order.
    pub const ALL: [Self; 4] = [
        Self::Confirmada,
        Self::Pendiente,
        Self::Completada,
        Self::Cancelada,
    ];

    /// Returns the display metadata for this status.
    #[must_use]
    pub const fn meta(self) -> &'static StatusMeta {
        match self {
            Self::Confirmada => &StatusMeta {
                id: "confirmada",
                name: "Confirmada",
                color: "#4CAF50",
            },
            Self::Pendiente => &StatusMeta {
                id: "pendiente",
                name: "Pendiente",
                color: "#FF9800",
            },
            Self::Completada => &StatusMeta {
                id: "completada",
                name: "Completada",
                color: "#2196F3",
            },
            Self::Cancelada => &StatusMeta {
                id: "cancelada",
                name: "Cancelada",
                color: "#F44336",
            },
        }
    }

    /// Resolves a string key into a status.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.meta().id == key)
    }
}

/// Appointment type key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    /// In-person consultation at the clinic.
    Presencial,
    /// Remote video consultation.
    Videoconsulta,
    /// Home visit.
    Domicilio,
}

impl AppointmentKind {
    /// All registry entries, in display order.
    pub const ALL: [Self; 3] = [Self::Presencial, Self::Videoconsulta, Self::Domicilio];

    /// Returns the display metadata for this type.
    #[must_use]
    pub const fn meta(self) -> &'static KindMeta {
        match self {
            Self::Presencial => &KindMeta {
                id: "presencial",
                name: "Presencial",
                description: "Consulta en el centro medico",
                icon: "hospital",
            },
            Self::Videoconsulta => &KindMeta {
                id: "videoconsulta",
                name: "Videoconsulta",
                description: "Consulta por videollamada",
                icon: "video",
            },
            Self::Domicilio => &KindMeta {
                id: "domicilio",
                name: "A domicilio",
                description: "El profesional acude a tu casa",
                icon: "home",
            },
        }
    }

    /// Resolves a string key into an appointment type.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.meta().id == key)
    }
}

/// Care-provider type key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Physician.
    Medico,
    /// Registered nurse.
    Enfermero,
    /// Physiotherapist.
    Fisioterapeuta,
}

impl ProviderKind {
    /// All registry entries, in display order.
    pub const ALL: [Self; 3] = [Self::Medico, Self::Enfermero, Self::Fisioterapeuta];

    /// Returns the display metadata for this provider type.
    #[must_use]
    pub const fn meta(self) -> &'static ProviderKindMeta {
        match self {
            Self::Medico => &ProviderKindMeta {
                id: "medico",
                name: "Medico",
                icon: "stethoscope",
                description: "Consultas y diagnostico",
            },
            Self::Enfermero => &ProviderKindMeta {
                id: "enfermero",
                name: "Enfermero",
                icon: "nurse",
                description: "Cuidados y seguimiento",
            },
            Self::Fisioterapeuta => &ProviderKindMeta {
                id: "fisioterapeuta",
                name: "Fisioterapeuta",
                icon: "therapy",
                description: "Rehabilitacion y fisioterapia",
            },
        }
    }

    /// Resolves a string key into a provider type.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.meta().id == key)
    }
}

/// Medical specialty key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    /// General medicine.
    General,
    /// Pediatrics.
    Pediatria,
    /// Cardiology.
    Cardiologia,
    /// Dermatology.
    Dermatologia,
    /// Gynecology.
    Ginecologia,
    /// Traumatology.
    Traumatologia,
}

impl Specialty {
    /// All registry entries, in display order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Pediatria,
        Self::Cardiologia,
        Self::Dermatologia,
        Self::Ginecologia,
        Self::Traumatologia,
    ];

    /// Returns the display metadata for this specialty.
    #[must_use]
    pub const fn meta(self) -> &'static SpecialtyMeta {
        match self {
            Self::General => &SpecialtyMeta {
                id: "general",
                name: "Medicina General",
                icon: "medkit",
            },
            Self::Pediatria => &SpecialtyMeta {
                id: "pediatria",
                name: "Pediatria",
                icon: "child",
            },
            Self::Cardiologia => &SpecialtyMeta {
                id: "cardiologia",
                name: "Cardiologia",
                icon: "heart",
            },
            Self::Dermatologia => &SpecialtyMeta {
                id: "dermatologia",
                name: "Dermatologia",
                icon: "skin",
            },
            Self::Ginecologia => &SpecialtyMeta {
                id: "ginecologia",
                name: "Ginecologia",
                icon: "female",
            },
            Self::Traumatologia => &SpecialtyMeta {
                id: "traumatologia",
                name: "Traumatologia",
                icon: "bone",
            },
        }
    }

    /// Resolves a string key into a specialty.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.meta().id == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AppointmentStatus::Confirmada, "Confirmada", "#4CAF50")]
    #[test_case(AppointmentStatus::Pendiente, "Pendiente", "#FF9800")]
    #[test_case(AppointmentStatus::Completada, "Completada", "#2196F3")]
    #[test_case(AppointmentStatus::Cancelada, "Cancelada", "#F44336")]
    fn status_metadata(status: AppointmentStatus, name: &str, color: &str) {
        let meta = status.meta();
        assert_eq!(meta.name, name);
        assert_eq!(meta.color, color);
    }

    #[test_case("confirmada", Some(AppointmentStatus::Confirmada))]
    #[test_case("cancelada", Some(AppointmentStatus::Cancelada))]
    #[test_case("reprogramada", None)]
    #[test_case("", None)]
    fn status_key_resolution(key: &str, expected: Option<AppointmentStatus>) {
        assert_eq!(AppointmentStatus::from_key(key), expected);
    }

    #[test]
    fn kind_keys_round_trip() {
        for kind in AppointmentKind::ALL {
            assert_eq!(AppointmentKind::from_key(kind.meta().id), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_key_is_none() {
        assert_eq!(AppointmentKind::from_key("telefonica"), None);
    }

    #[test]
    fn provider_kind_keys_round_trip() {
        for kind in ProviderKind::ALL {
            assert_eq!(ProviderKind::from_key(kind.meta().id), Some(kind));
        }
    }

    #[test]
    fn specialty_keys_round_trip() {
        for specialty in Specialty::ALL {
            assert_eq!(Specialty::from_key(specialty.meta().id), Some(specialty));
        }
        assert_eq!(Specialty::from_key("neurologia"), None);
    }

    #[test]
    fn registry_ids_are_unique() {
        let ids: Vec<_> = AppointmentStatus::ALL.iter().map(|s| s.meta().id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }
}
