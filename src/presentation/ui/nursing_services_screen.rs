//! Nursing-service catalog screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::NursingService;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{Route, ScreenAction};
use crate::presentation::widgets::ServiceCard;

/// Catalog of home-nursing services; choosing one opens the nurse list
/// scoped to that service.
pub struct NursingServicesScreen {
    services: Vec<NursingService>,
    selected: usize,
    offset: usize,
    theme: Theme,
}

impl NursingServicesScreen {
    /// Creates the screen over the given catalog.
    #[must_use]
    pub fn new(services: Vec<NursingService>, theme: Theme) -> Self {
        Self {
            services,
            selected: 0,
            offset: 0,
            theme,
        }
    }

    /// Currently highlighted service, if the catalog is non-empty.
    #[must_use]
    pub fn selected_service(&self) -> Option<&NursingService> {
        self.services.get(self.selected)
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.services.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter => match self.selected_service() {
                Some(service) => ScreenAction::Navigate(Route::NurseList {
                    service: Some(service.clone()),
                }),
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn visible_range(&mut self, area_height: u16) -> std::ops::Range<usize> {
        let per_page = (area_height / ServiceCard::HEIGHT).max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }
        self.offset..(self.offset + per_page).min(self.services.len())
    }
}

impl Widget for &mut NursingServicesScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(
            Line::from(" Servicios de Enfermeria ")
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if self.services.is_empty() {
            Paragraph::new("No hay servicios disponibles")
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let range = self.visible_range(inner.height);
        let constraints: Vec<Constraint> = range
            .clone()
            .map(|_| Constraint::Length(ServiceCard::HEIGHT))
            .collect();
        let slots = Layout::vertical(constraints).split(inner);

        for (slot, index) in slots.iter().zip(range) {
            let card = ServiceCard::new(
                &self.services[index],
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
    fn enter_carries_the_selected_service_to_the_nurse_list() {
        let mut screen = NursingServicesScreen::new(samples::services(), Theme::default());
        let expected = screen.selected_service().cloned().unwrap();

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            ScreenAction::Navigate(Route::NurseList { service }) => {
                assert_eq!(service, Some(expected));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_ignores_enter() {
        let mut screen = NursingServicesScreen::new(vec![], Theme::default());

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
    }
}
