//! Provider card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Provider;
use crate::presentation::theme::{self, Theme};

/// Card rendering one care-provider record.
pub struct ProviderCard<'a> {
    provider: &'a Provider,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> ProviderCard<'a> {
    /// Rendered height in rows.
    pub const HEIGHT: u16 = 6;

    /// Creates a card for the provider.
    #[must_use]
    pub const fn new(provider: &'a Provider, selected: bool, theme: &'a Theme) -> Self {
        Self {
            provider,
            selected,
            theme,
        }
    }
}

impl Widget for ProviderCard<'_> {
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

        let kind = self.provider.kind.meta();
        let specialty = self.provider.specialty.meta();

        let header = Line::from(vec![
            Span::styled(
                format!("{} ", theme::glyph(kind.icon)),
                Style::default().fg(self.theme.accent),
            ),
            Span::styled(
                self.provider.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("★ {}", self.provider.rating_label()),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let kind_line = Line::from(Span::styled(
            format!("{} · {}", kind.name, specialty.name),
            self.theme.dimmed_style,
        ));

        let address = Line::from(vec![
            Span::raw(self.provider.address.clone()),
            Span::styled(
                format!("  ({})", self.provider.distance_label()),
                self.theme.dimmed_style,
            ),
        ]);

        let mut lines = vec![header, kind_line, address];
        if let Some(ref slot) = self.provider.next_available {
            lines.push(Line::from(Span::styled(
                format!("Proximo turno: {slot}"),
                Style::default().fg(Color::Green),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{ProviderKind, Specialty};
    use crate::presentation::widgets::testing::render_to_text;

    #[test]
    fn renders_provider_details() {
        let theme = Theme::default();
        let provider = Provider::new(
            "Dr. Mario Vega",
            ProviderKind::Medico,
            Specialty::General,
            4.8,
            132,
            "Av. Libertad 450",
            2.3,
        )
        .with_next_available("Hoy 16:00");

        let text = render_to_text(ProviderCard::new(&provider, false, &theme), 60, 6);

        assert!(text.contains("Dr. Mario Vega"));
        assert!(text.contains("4.8 (132)"));
        assert!(text.contains("Medico · Medicina General"));
        assert!(text.contains("2.3 km"));
        assert!(text.contains("Proximo turno: Hoy 16:00"));
    }

    #[test]
    fn next_available_is_optional() {
        let theme = Theme::default();
        let provider = Provider::new(
            "Lic. Carla Soto",
            ProviderKind::Enfermero,
            Specialty::General,
            4.7,
            88,
            "Calle Sur 12",
            0.8,
        );

        let text = render_to_text(ProviderCard::new(&provider, false, &theme), 60, 6);

        assert!(!text.contains("Proximo turno"));
    }
}
