//! Nursing-service card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::NursingService;
use crate::presentation::theme::{self, Theme};

/// Card rendering one nursing-service listing.
pub struct ServiceCard<'a> {
    service: &'a NursingService,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> ServiceCard<'a> {
    /// Rendered height in rows.
    pub const HEIGHT: u16 = 5;

    /// Creates a card for the service.
    #[must_use]
    pub const fn new(service: &'a NursingService, selected: bool, theme: &'a Theme) -> Self {
        Self {
            service,
            selected,
            theme,
        }
    }
}

impl Widget for ServiceCard<'_> {
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

        let header = Line::from(vec![
            Span::styled(
                format!("{} ", theme::glyph(&self.service.icon)),
                Style::default().fg(self.theme.accent),
            ),
            Span::styled(
                self.service.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let description = Line::from(Span::styled(
            self.service.description.clone(),
            self.theme.dimmed_style,
        ));

        let price = Line::from(Span::styled(
            self.service.price_label(),
            Style::default().fg(Color::Green),
        ));

        Paragraph::new(vec![header, description, price]).render(inner, buf);
    }
}
