//! Hard-coded sample data.
//!
//! All records in this module are fictional and stand in for data that would
//! otherwise come from a backend, which this client does not have. Screens
//! own copies of these sequences as their local state.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{
    Appointment, Doctor, LabMeasurement, LabResult, Nurse, NursingService, Prescription, Provider,
};
use crate::domain::registry::{AppointmentKind, AppointmentStatus, ProviderKind, Specialty};

/// Upcoming and past appointments.
#[must_use]
pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment::new(
            "apt-1001",
            Doctor::new("Dra. Elena Ruiz", "Cardiologia"),
            Utc.with_ymd_and_hms(2025, 9, 12, 10, 30, 0).unwrap(),
            AppointmentKind::Presencial,
            AppointmentStatus::Confirmada,
        ),
        Appointment::new(
            "apt-1002",
            Doctor::new("Dr. Mario Vega", "Medicina General"),
            Utc.with_ymd_and_hms(2025, 9, 18, 16, 0, 0).unwrap(),
            AppointmentKind::Videoconsulta,
            AppointmentStatus::Pendiente,
        ),
        Appointment::new(
            "apt-1003",
            Doctor::new("Dra. Lucia Prado", "Dermatologia"),
            Utc.with_ymd_and_hms(2025, 8, 4, 9, 0, 0).unwrap(),
            AppointmentKind::Presencial,
            AppointmentStatus::Completada,
        ),
        Appointment::new(
            "apt-1004",
            Doctor::new("Lic. Carla Soto", "Enfermeria"),
            Utc.with_ymd_and_hms(2025, 7, 22, 11, 0, 0).unwrap(),
            AppointmentKind::Domicilio,
            AppointmentStatus::Cancelada,
        ),
    ]
}

/// Care providers near the patient.
#[must_use]
pub fn providers() -> Vec<Provider> {
    vec![
        Provider::new(
            "Dr. Mario Vega",
            ProviderKind::Medico,
            Specialty::General,
            4.8,
            132,
            "Av. Libertad 450",
            2.3,
        )
        .with_next_available("Hoy 16:00"),
        Provider::new(
            "Dra. Elena Ruiz",
            ProviderKind::Medico,
            Specialty::Cardiologia,
            4.9,
            208,
            "Clinica San Rafael, Piso 3",
            4.1,
        )
        .with_next_available("Manana 09:30"),
        Provider::new(
            "Lic. Carla Soto",
            ProviderKind::Enfermero,
            Specialty::General,
            4.7,
            88,
            "Calle Sur 12",
            0.8,
        ),
        Provider::new(
            "Lic. Pablo Herrera",
            ProviderKind::Fisioterapeuta,
            Specialty::Traumatologia,
            4.6,
            54,
            "Centro Kinesico Norte",
            5.6,
        )
        .with_next_available("Viernes 14:00"),
    ]
}

/// Home-nursing professionals.
#[must_use]
pub fn nurses() -> Vec<Nurse> {
    vec![
        Nurse::new(
            "Ana Morales",
            4.9,
            8,
            vec!["Geriatria".into(), "Post-operatorio".into()],
            "25.00",
        ),
        Nurse::new(
            "Luis Campos",
            4.7,
            5,
            vec!["Inyectables".into(), "Curaciones".into()],
            "20.00",
        ),
        Nurse::new(
            "Rosa Jimenez",
            4.8,
            12,
            vec!["Cuidados paliativos".into(), "Geriatria".into()],
            "28.00",
        )
        .unavailable(),
    ]
}

/// Home-nursing service catalog.
#[must_use]
pub fn services() -> Vec<NursingService> {
    vec![
        NursingService::new(
            "Cuidado Post-operatorio",
            "Atencion y seguimiento despues de una cirugia",
            "bandage",
            "30.00",
        ),
        NursingService::new(
            "Inyectables y Sueros",
            "Aplicacion de medicamentos indicados por tu medico",
            "syringe",
            "15.00",
        ),
        NursingService::new(
            "Cuidado de Adultos Mayores",
            "Acompanamiento y cuidados en casa",
            "elder",
            "25.00",
        ),
        NursingService::new(
            "Curaciones",
            "Limpieza y vendaje de heridas",
            "medkit",
            "18.00",
        ),
    ]
}

/// Seed prescriptions held by the patient on first open.
#[must_use]
pub fn prescriptions() -> Vec<Prescription> {
    vec![
        Prescription::new(
            "rx-2001",
            "Dra. Elena Ruiz",
            Utc.with_ymd_and_hms(2025, 8, 4, 10, 15, 0).unwrap(),
            vec![
                "Enalapril 10mg - 1 cada 12 horas".into(),
                "Aspirina 100mg - 1 por dia".into(),
            ],
        ),
        Prescription::new(
            "rx-2002",
            "Dr. Mario Vega",
            Utc.with_ymd_and_hms(2025, 6, 19, 17, 40, 0).unwrap(),
            vec!["Amoxicilina 500mg - 1 cada 8 horas por 7 dias".into()],
        ),
    ]
}

/// Available lab results.
#[must_use]
pub fn lab_results() -> Vec<LabResult> {
    vec![
        LabResult::new(
            "lab-3001",
            "Hemograma completo",
            Utc.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap(),
            "Laboratorio Central",
            "Disponible",
            vec![
                LabMeasurement::new("Hemoglobina", "14.2 g/dL", "13.5 - 17.5"),
                LabMeasurement::new("Leucocitos", "6.8 x10^3/uL", "4.5 - 11.0"),
                LabMeasurement::new("Plaquetas", "250 x10^3/uL", "150 - 450"),
            ],
        ),
        LabResult::new(
            "lab-3002",
            "Perfil lipidico",
            Utc.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap(),
            "Laboratorio Central",
            "Disponible",
            vec![
                LabMeasurement::new("Colesterol total", "188 mg/dL", "< 200"),
                LabMeasurement::new("HDL", "52 mg/dL", "> 40"),
                LabMeasurement::new("LDL", "110 mg/dL", "< 130"),
                LabMeasurement::new("Trigliceridos", "132 mg/dL", "< 150"),
            ],
        ),
        LabResult::new(
            "lab-3003",
            "Glucosa en ayunas",
            Utc.with_ymd_and_hms(2025, 5, 12, 7, 30, 0).unwrap(),
            "Laboratorio Sur",
            "Disponible",
            vec![LabMeasurement::new("Glucosa", "92 mg/dL", "70 - 100")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_status_resolves_in_registry() {
        for appointment in appointments() {
            // meta() is total over the enum; resolving the id back proves the
            // record's key is a registry key, not free text.
            let id = appointment.status.meta().id;
            assert_eq!(AppointmentStatus::from_key(id), Some(appointment.status));
        }
    }

    #[test]
    fn catalog_includes_postoperative_service() {
        let services = services();
        let post_op = services
            .iter()
            .find(|s| s.title == "Cuidado Post-operatorio")
            .expect("catalog must include post-operative care");
        assert_eq!(post_op.base_price, "30.00");
    }

    #[test]
    fn nurse_list_includes_an_unavailable_nurse() {
        assert!(nurses().iter().any(|n| !n.available));
    }

    #[test]
    fn two_seed_prescriptions() {
        assert_eq!(prescriptions().len(), 2);
    }
}
