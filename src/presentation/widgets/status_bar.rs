//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Status bar widget: message on the left, key hints on the right.
///
/// All measurements use display columns, not byte lengths; hints and
/// status messages both carry multibyte text.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates a status bar with a message and key hints.
    #[must_use]
    pub fn new(message: impl Into<String>, hints: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            hints: hints.into(),
            level,
        }
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints_width = self.hints.width().min(area.width as usize);
        let message_max = (area.width as usize).saturating_sub(hints_width + 1);

        let mut message = String::new();
        let mut message_width = 0;
        for c in self.message.chars() {
            let w = c.width().unwrap_or(0);
            if message_width + w > message_max {
                break;
            }
            message.push(c);
            message_width += w;
        }

        let padding = (area.width as usize)
            .saturating_sub(message_width)
            .saturating_sub(hints_width);

        let line = Line::from(vec![
            Span::styled(
                message,
                Style::default()
                    .fg(self.level.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(self.hints.clone(), Style::default().fg(Color::DarkGray)),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_text;

    #[test]
    fn message_and_hints_are_rendered() {
        let bar = StatusBar::new("Listo", "Esc: Volver | q: Salir", StatusLevel::Info);
        let text = render_to_text(&bar, 50, 1);

        assert!(text.contains("Listo"));
        assert!(text.contains("Esc: Volver"));
    }

    #[test]
    fn multibyte_hints_stay_right_aligned() {
        let bar = StatusBar::new(
            "Cita con Dra. Muñoz",
            "↑↓: Navegar | Esc: Volver",
            StatusLevel::Success,
        );
        let text = render_to_text(&bar, 60, 1);

        assert!(text.contains("Dra. Muñoz"));
        assert!(text.ends_with("↑↓: Navegar | Esc: Volver"));
    }

    #[test]
    fn long_message_is_cut_at_a_char_boundary() {
        let bar = StatusBar::new(
            "Solicitud de reserva enviada a María José Ibáñez",
            "↑↓",
            StatusLevel::Info,
        );
        let text = render_to_text(&bar, 20, 1);

        assert!(text.starts_with("Solicitud"));
    }
}
