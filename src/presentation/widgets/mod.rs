//! Widgets.

mod appointment_card;
mod notice_popup;
mod nurse_card;
mod provider_card;
mod service_card;
mod status_bar;
mod text_input;

pub use appointment_card::AppointmentCard;
pub use notice_popup::{Notice, NoticeLevel, NoticePopup};
pub use nurse_card::NurseCard;
pub use provider_card::ProviderCard;
pub use service_card::ServiceCard;
pub use status_bar::{StatusBar, StatusLevel};
pub use text_input::TextInput;
