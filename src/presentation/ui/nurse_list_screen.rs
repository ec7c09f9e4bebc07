//! Nurse list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{Nurse, NursingService};
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::widgets::{NurseCard, TextInput};

/// Nurse roster, optionally scoped to a nursing service chosen upstream.
///
/// The search box and the filter controls are display-only for now: typed
/// text is kept but no filtering is applied. Enter on an unavailable nurse
/// does nothing.
pub struct NurseListScreen {
    service: Option<NursingService>,
    nurses: Vec<Nurse>,
    search: TextInput,
    selected: usize,
    offset: usize,
    theme: Theme,
}

impl NurseListScreen {
    /// Creates the screen, scoped to `service` when one was chosen.
    #[must_use]
    pub fn new(service: Option<NursingService>, nurses: Vec<Nurse>, theme: Theme) -> Self {
        let mut search = TextInput::new("Buscar").placeholder("Buscar enfermeros...");
        search.set_focused(true);
        Self {
            service,
            nurses,
            search,
            selected: 0,
            offset: 0,
            theme,
        }
    }

    /// Service this roster was opened for, if any.
    #[must_use]
    pub fn service(&self) -> Option<&NursingService> {
        self.service.as_ref()
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        self.search.value()
    }

    /// Currently highlighted nurse, if the roster is non-empty.
    #[must_use]
    pub fn selected_nurse(&self) -> Option<&Nurse> {
        self.nurses.get(self.selected)
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.nurses.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Char(c) => {
                self.search.input_char(c);
                ScreenAction::None
            }
            KeyCode::Backspace => {
                self.search.backspace();
                ScreenAction::None
            }
            KeyCode::Left => {
                self.search.move_left();
                ScreenAction::None
            }
            KeyCode::Right => {
                self.search.move_right();
                ScreenAction::None
            }
            KeyCode::Enter => match self.selected_nurse() {
                Some(nurse) if nurse.available => ScreenAction::SetStatus(format!(
                    "Solicitud de reserva enviada a {}",
                    nurse.name
                )),
                _ => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn visible_range(&mut self, area_height: u16) -> std::ops::Range<usize> {
        let per_page = (area_height / NurseCard::HEIGHT).max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }
        self.offset..(self.offset + per_page).min(self.nurses.len())
    }
}

impl Widget for &mut NurseListScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.service {
            Some(ref service) => format!(" Enfermeros · {} ", service.title),
            None => " Enfermeros ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title).style(Style::default().add_modifier(Modifier::BOLD)));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        (&self.search).render(chunks[0], buf);

        let controls = Line::from(vec![
            Span::styled(" Filtrar ", Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(" Ordenar ", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(controls).render(chunks[1], buf);

        if self.nurses.is_empty() {
            Paragraph::new("No hay enfermeros disponibles")
                .style(self.theme.dimmed_style)
                .render(chunks[2], buf);
            return;
        }

        let range = self.visible_range(chunks[2].height);
        let constraints: Vec<Constraint> = range
            .clone()
            .map(|_| Constraint::Length(NurseCard::HEIGHT))
            .collect();
        let slots = Layout::vertical(constraints).split(chunks[2]);

        for (slot, index) in slots.iter().zip(range) {
            let card = NurseCard::new(&self.nurses[index], index == self.selected, &self.theme);
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

    fn screen() -> NurseListScreen {
        NurseListScreen::new(None, samples::nurses(), Theme::default())
    }

    #[test]
    fn typing_is_captured_without_filtering() {
        let mut screen = screen();
        let total = samples::nurses().len();

        for c in "geriatria".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(screen.search_text(), "geriatria");
        assert_eq!(screen.nurses.len(), total);
    }

    #[test]
    fn accented_search_input_is_captured() {
        let mut screen = screen();

        for c in "niña".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.handle_key(key(KeyCode::Backspace));

        assert_eq!(screen.search_text(), "niñ");
    }

    #[test]
    fn enter_on_available_nurse_starts_a_booking() {
        let mut screen = screen();

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            ScreenAction::SetStatus(message) => {
                assert!(message.contains("Ana Morales"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn enter_on_unavailable_nurse_does_nothing() {
        let mut screen = screen();
        while screen.selected_nurse().is_none_or(|n| n.available) {
            screen.handle_key(key(KeyCode::Down));
        }

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
    }

    #[test]
    fn service_scope_is_kept() {
        let service = samples::services()[0].clone();
        let screen = NurseListScreen::new(Some(service.clone()), samples::nurses(), Theme::default());

        assert_eq!(screen.service(), Some(&service));
    }
}
