//! Digital prescriptions screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Prescription;
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;

/// Prescription list with a capture entry point.
///
/// `n` starts the camera flow; a captured record is prepended so the newest
/// prescription is always at the top.
pub struct PrescriptionsScreen {
    prescriptions: Vec<Prescription>,
    selected: usize,
    timestamp_format: String,
    theme: Theme,
}

impl PrescriptionsScreen {
    /// Creates the screen over the given records.
    #[must_use]
    pub fn new(
        prescriptions: Vec<Prescription>,
        timestamp_format: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            prescriptions,
            selected: 0,
            timestamp_format: timestamp_format.into(),
            theme,
        }
    }

    /// Number of records shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prescriptions.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prescriptions.is_empty()
    }

    /// Record at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Prescription> {
        self.prescriptions.get(index)
    }

    /// Prepends a freshly captured record and selects it.
    pub fn prepend(&mut self, prescription: Prescription) {
        self.prescriptions.insert(0, prescription);
        self.selected = 0;
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.prescriptions.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Char('n') => ScreenAction::CapturePrescription,
            _ => ScreenAction::None,
        }
    }
}

impl Widget for &PrescriptionsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(
            Line::from(" Recetas Digitales ")
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if self.prescriptions.is_empty() {
            Paragraph::new("No hay recetas. Presiona 'n' para escanear una.")
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .prescriptions
            .iter()
            .map(|rx| {
                let mut header = vec![Span::styled(
                    rx.doctor.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if rx.image_uri.is_some() {
                    header.push(Span::raw("  "));
                    header.push(Span::styled(
                        "Escaneada",
                        Style::default().fg(self.theme.accent),
                    ));
                }

                let meds = if rx.medications.is_empty() {
                    "Sin medicamentos registrados".to_string()
                } else {
                    rx.medications.join(", ")
                };

                ListItem::new(vec![
                    Line::from(header),
                    Line::from(Span::styled(
                        format!("{} · {}", rx.date.format(&self.timestamp_format), rx.id),
                        self.theme.dimmed_style,
                    )),
                    Line::from(Span::styled(meds, Style::default().fg(Color::Gray))),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items).highlight_style(self.theme.selection_style);
        let mut state = ListState::default();
        state.select(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::samples;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> PrescriptionsScreen {
        PrescriptionsScreen::new(samples::prescriptions(), "%d/%m/%Y", Theme::default())
    }

    #[test]
    fn n_starts_the_capture_flow() {
        let mut screen = screen();

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('n'))),
            ScreenAction::CapturePrescription
        );
    }

    #[test]
    fn captured_record_lands_at_the_top() {
        let mut screen = screen();
        let before = screen.len();

        let rx = Prescription::new("rx-9999", "Receta escaneada", Utc::now(), vec![])
            .with_image("capture://rx-9999.png");
        screen.prepend(rx);

        assert_eq!(screen.len(), before + 1);
        assert_eq!(screen.get(0).map(|r| r.id.as_str()), Some("rx-9999"));
    }
}
