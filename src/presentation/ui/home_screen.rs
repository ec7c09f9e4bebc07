//! Entry menu screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::ui::{Route, ScreenAction};

const MENU: &[(&str, Route)] = &[
    ("Mis Citas", Route::Appointments),
    ("Profesionales", Route::Providers),
    ("Recetas Digitales", Route::Prescriptions),
    ("Resultados de Laboratorio", Route::LabResults),
    ("Servicios de Enfermeria", Route::NursingServices),
    ("Recuperar Contrasena", Route::ForgotPassword),
];

/// Main menu listing every section of the app.
pub struct HomeScreen {
    selected: usize,
    theme: Theme,
}

impl HomeScreen {
    /// Creates the menu with the first entry selected.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { selected: 0, theme }
    }

    /// Currently highlighted entry index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < MENU.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter => ScreenAction::Navigate(MENU[self.selected].1.clone()),
            _ => ScreenAction::None,
        }
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Cuidado", Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw("  ·  salud y enfermeria a domicilio"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        title.render(chunks[0], buf);

        let items: Vec<ListItem> = MENU
            .iter()
            .map(|(label, _)| ListItem::new(Line::from(format!("  {label}"))))
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        StatefulWidget::render(list, chunks[1], buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_navigates_to_selected_section() {
        let mut screen = HomeScreen::new(Theme::default());
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));

        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, ScreenAction::Navigate(Route::Prescriptions));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut screen = HomeScreen::new(Theme::default());
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected(), 0);

        for _ in 0..20 {
            screen.handle_key(key(KeyCode::Down));
        }
        assert_eq!(screen.selected(), MENU.len() - 1);
    }
}
