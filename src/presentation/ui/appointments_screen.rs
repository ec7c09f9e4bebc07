//! Appointment list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Appointment;
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::widgets::AppointmentCard;

/// Scrollable list of the patient's appointments.
pub struct AppointmentsScreen {
    appointments: Vec<Appointment>,
    selected: usize,
    offset: usize,
    timestamp_format: String,
    theme: Theme,
}

impl AppointmentsScreen {
    /// Creates the screen over the given records.
    #[must_use]
    pub fn new(
        appointments: Vec<Appointment>,
        timestamp_format: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            appointments,
            selected: 0,
            offset: 0,
            timestamp_format: timestamp_format.into(),
            theme,
        }
    }

    /// Currently highlighted record, if the list is non-empty.
    #[must_use]
    pub fn selected_appointment(&self) -> Option<&Appointment> {
        self.appointments.get(self.selected)
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.appointments.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter => match self.selected_appointment() {
                Some(appointment) => ScreenAction::SetStatus(format!(
                    "Cita con {} el {}",
                    appointment.doctor.name,
                    appointment.date_label(&self.timestamp_format)
                )),
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn visible_range(&mut self, area_height: u16) -> std::ops::Range<usize> {
        let per_page = (area_height / AppointmentCard::HEIGHT).max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }
        self.offset..(self.offset + per_page).min(self.appointments.len())
    }
}

impl Widget for &mut AppointmentsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" Mis Citas ").style(Style::default().add_modifier(Modifier::BOLD)));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.appointments.is_empty() {
            Paragraph::new("No hay citas registradas")
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let range = self.visible_range(inner.height);
        let constraints: Vec<Constraint> = range
            .clone()
            .map(|_| Constraint::Length(AppointmentCard::HEIGHT))
            .collect();
        let slots = Layout::vertical(constraints).split(inner);

        for (slot, index) in slots.iter().zip(range) {
            let card = AppointmentCard::new(
                &self.appointments[index],
                &self.timestamp_format,
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

    fn screen() -> AppointmentsScreen {
        AppointmentsScreen::new(samples::appointments(), "%d/%m/%Y %H:%M", Theme::default())
    }

    #[test]
    fn enter_reports_the_selected_appointment() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Down));

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            ScreenAction::SetStatus(message) => {
                assert!(message.contains("Dr. Mario Vega"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn empty_list_ignores_enter() {
        let mut screen = AppointmentsScreen::new(vec![], "%H:%M", Theme::default());

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
    }
}
