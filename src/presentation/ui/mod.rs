//! Screens and orchestration.

mod app;
mod appointments_screen;
mod forgot_password_screen;
mod home_screen;
mod lab_results_screen;
mod nurse_list_screen;
mod nursing_services_screen;
mod prescriptions_screen;
mod providers_screen;

pub use app::App;
pub use appointments_screen::AppointmentsScreen;
pub use forgot_password_screen::{ForgotPasswordScreen, ResetState};
pub use home_screen::HomeScreen;
pub use lab_results_screen::LabResultsScreen;
pub use nurse_list_screen::NurseListScreen;
pub use nursing_services_screen::NursingServicesScreen;
pub use prescriptions_screen::PrescriptionsScreen;
pub use providers_screen::ProvidersScreen;

use crate::domain::entities::NursingService;

/// Navigation target, carrying its payload by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Appointment list.
    Appointments,
    /// Care-provider list.
    Providers,
    /// Digital prescriptions.
    Prescriptions,
    /// Laboratory results.
    LabResults,
    /// Nursing-service catalog.
    NursingServices,
    /// Nurse list, optionally scoped to a chosen service.
    NurseList {
        /// Service the patient is booking, if any.
        service: Option<NursingService>,
    },
    /// Password recovery.
    ForgotPassword,
}

/// Action returned from screen event handling.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Nothing to do.
    None,
    /// Quit the application.
    Quit,
    /// Go back to the previous screen.
    Back,
    /// Navigate to a route.
    Navigate(Route),
    /// Show a status message.
    SetStatus(String),
    /// Start the simulated password-reset call for this address.
    SubmitReset(String),
    /// Start the prescription capture flow.
    CapturePrescription,
}
