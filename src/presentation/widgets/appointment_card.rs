//! Appointment card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Appointment;
use crate::presentation::theme::{self, Theme};

/// Card rendering one appointment record.
///
/// Status label and badge color come straight from the status registry; the
/// type glyph comes from the type registry through the theme glyph table.
pub struct AppointmentCard<'a> {
    appointment: &'a Appointment,
    timestamp_format: &'a str,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> AppointmentCard<'a> {
    /// Rendered height in rows.
    pub const HEIGHT: u16 = 5;

    /// Creates a card for the appointment.
    #[must_use]
    pub const fn new(
        appointment: &'a Appointment,
        timestamp_format: &'a str,
        selected: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            appointment,
            timestamp_format,
            selected,
            theme,
        }
    }
}

impl Widget for AppointmentCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let kind = self.appointment.kind.meta();
        let status = self.appointment.status.meta();

        let header = Line::from(vec![
            Span::styled(
                format!("{} ", theme::glyph(kind.icon)),
                Style::default().fg(self.theme.accent),
            ),
            Span::styled(
                self.appointment.doctor.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let specialty = Line::from(Span::styled(
            self.appointment.doctor.specialty.clone(),
            self.theme.dimmed_style,
        ));

        let badge_style = Style::default()
            .fg(Color::Black)
            .bg(theme::badge_color(status.color));
        let detail = Line::from(vec![
            Span::raw(self.appointment.date_label(self.timestamp_format)),
            Span::raw("  "),
            Span::raw(kind.name),
            Span::raw("  "),
            Span::styled(format!(" {} ", status.name), badge_style),
        ]);

        Paragraph::new(vec![header, specialty, detail]).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Doctor;
    use crate::domain::registry::{AppointmentKind, AppointmentStatus};
    use crate::presentation::widgets::testing::render_to_text;
    use chrono::{TimeZone, Utc};

    fn sample(status: AppointmentStatus) -> Appointment {
        Appointment::new(
            "apt-1",
            Doctor::new("Dra. Elena Ruiz", "Cardiologia"),
            Utc.with_ymd_and_hms(2025, 9, 12, 10, 30, 0).unwrap(),
            AppointmentKind::Presencial,
            status,
        )
    }

    #[test]
    fn renders_registry_status_label() {
        let theme = Theme::default();
        let appointment = sample(AppointmentStatus::Confirmada);
        let card = AppointmentCard::new(&appointment, "%d/%m/%Y %H:%M", false, &theme);

        let text = render_to_text(card, 60, AppointmentCard::HEIGHT);

        assert!(text.contains("Dra. Elena Ruiz"));
        assert!(text.contains("Cardiologia"));
        assert!(text.contains("12/09/2025 10:30"));
        assert!(text.contains("Confirmada"));
    }

    #[test]
    fn status_label_tracks_the_record() {
        let theme = Theme::default();
        let appointment = sample(AppointmentStatus::Cancelada);
        let card = AppointmentCard::new(&appointment, "%H:%M", false, &theme);

        let text = render_to_text(card, 60, AppointmentCard::HEIGHT);

        assert!(text.contains("Cancelada"));
        assert!(!text.contains("Confirmada"));
    }
}
