//! Care-provider list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Provider;
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::widgets::ProviderCard;

/// Scrollable list of care providers.
pub struct ProvidersScreen {
    providers: Vec<Provider>,
    selected: usize,
    offset: usize,
    theme: Theme,
}

impl ProvidersScreen {
    /// Creates the screen over the given records.
    #[must_use]
    pub fn new(providers: Vec<Provider>, theme: Theme) -> Self {
        Self {
            providers,
            selected: 0,
            offset: 0,
            theme,
        }
    }

    /// Currently highlighted record, if the list is non-empty.
    #[must_use]
    pub fn selected_provider(&self) -> Option<&Provider> {
        self.providers.get(self.selected)
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.providers.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter => match self.selected_provider() {
                Some(provider) => ScreenAction::SetStatus(format!(
                    "Perfil de {} ({})",
                    provider.name,
                    provider.kind.meta().name
                )),
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn visible_range(&mut self, area_height: u16) -> std::ops::Range<usize> {
        let per_page = (area_height / ProviderCard::HEIGHT).max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }
        self.offset..(self.offset + per_page).min(self.providers.len())
    }
}

impl Widget for &mut ProvidersScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(
            Line::from(" Profesionales ").style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if self.providers.is_empty() {
            Paragraph::new("No hay profesionales disponibles")
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let range = self.visible_range(inner.height);
        let constraints: Vec<Constraint> = range
            .clone()
            .map(|_| Constraint::Length(ProviderCard::HEIGHT))
            .collect();
        let slots = Layout::vertical(constraints).split(inner);

        for (slot, index) in slots.iter().zip(range) {
            let card = ProviderCard::new(
                &self.providers[index],
                index == self.selected,
                &self.theme,
            );
            card.render(*slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::samples;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_reports_the_selected_provider() {
        let mut screen = ProvidersScreen::new(samples::providers(), Theme::default());

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            ScreenAction::SetStatus(message) => assert!(message.contains("Perfil de")),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut screen = ProvidersScreen::new(samples::providers(), Theme::default());
        for _ in 0..20 {
            screen.handle_key(key(KeyCode::Down));
        }

        assert!(screen.selected_provider().is_some());
    }
}
