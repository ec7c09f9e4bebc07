//! Nurse card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Nurse;
use crate::presentation::theme::Theme;

/// Action label shown when the nurse accepts bookings.
pub const BOOK_LABEL: &str = "Reservar";
/// Action label shown when the nurse is unavailable.
pub const UNAVAILABLE_LABEL: &str = "No Disponible";

/// Card rendering one home-nursing professional.
///
/// An unavailable nurse gets a dimmed, non-interactive action control; the
/// owning screen must not emit a selection for it.
pub struct NurseCard<'a> {
    nurse: &'a Nurse,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> NurseCard<'a> {
    /// Rendered height in rows.
    pub const HEIGHT: u16 = 6;

    /// Creates a card for the nurse.
    #[must_use]
    pub const fn new(nurse: &'a Nurse, selected: bool, theme: &'a Theme) -> Self {
        Self {
            nurse,
            selected,
            theme,
        }
    }
}

impl Widget for NurseCard<'_> {
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

        let name_style = if self.nurse.available {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style.add_modifier(Modifier::BOLD)
        };

        let header = Line::from(vec![
            Span::styled(self.nurse.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(
                format!("★ {:.1}", self.nurse.rating),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let experience = Line::from(Span::styled(
            self.nurse.experience_label(),
            self.theme.dimmed_style,
        ));

        let specialties = Line::from(Span::raw(self.nurse.specialties_label()));

        let action_style = if self.nurse.available {
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        let action_label = if self.nurse.available {
            BOOK_LABEL
        } else {
            UNAVAILABLE_LABEL
        };

        let footer = Line::from(vec![
            Span::styled(
                self.nurse.price_label(),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(format!(" {action_label} "), action_style),
        ]);

        Paragraph::new(vec![header, experience, specialties, footer]).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_text;

    fn sample() -> Nurse {
        Nurse::new(
            "Ana Morales",
            4.9,
            8,
            vec!["Geriatria".into(), "Post-operatorio".into()],
            "25.00",
        )
    }

    #[test]
    fn available_nurse_shows_booking_action() {
        let theme = Theme::default();
        let nurse = sample();

        let text = render_to_text(NurseCard::new(&nurse, false, &theme), 60, NurseCard::HEIGHT);

        assert!(text.contains("Ana Morales"));
        assert!(text.contains("Geriatria, Post-operatorio"));
        assert!(text.contains("$25.00/hora"));
        assert!(text.contains(BOOK_LABEL));
        assert!(!text.contains(UNAVAILABLE_LABEL));
    }

    #[test]
    fn unavailable_nurse_shows_disabled_control() {
        let theme = Theme::default();
        let nurse = sample().unavailable();

        let text = render_to_text(NurseCard::new(&nurse, false, &theme), 60, NurseCard::HEIGHT);

        assert!(text.contains(UNAVAILABLE_LABEL));
        assert!(!text.contains(BOOK_LABEL));
    }
}
