//! Laboratory results screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, StatefulWidget, Table, Widget},
};

use crate::domain::entities::LabResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;

/// Lab-result list with a measurement detail pane.
pub struct LabResultsScreen {
    results: Vec<LabResult>,
    selected: usize,
    timestamp_format: String,
    theme: Theme,
}

impl LabResultsScreen {
    /// Creates the screen over the given records.
    #[must_use]
    pub fn new(
        results: Vec<LabResult>,
        timestamp_format: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            results,
            selected: 0,
            timestamp_format: timestamp_format.into(),
            theme,
        }
    }

    /// Currently highlighted result, if the list is non-empty.
    #[must_use]
    pub fn selected_result(&self) -> Option<&LabResult> {
        self.results.get(self.selected)
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

impl Widget for &LabResultsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(
            Line::from(" Resultados de Laboratorio ")
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if self.results.is_empty() {
            Paragraph::new("No hay resultados disponibles")
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(inner);

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|result| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        result.kind.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "{} · {}",
                            result.date.format(&self.timestamp_format),
                            result.laboratory
                        ),
                        self.theme.dimmed_style,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .block(Block::default().borders(Borders::RIGHT));
        let mut state = ListState::default();
        state.select(Some(self.selected));
        StatefulWidget::render(list, chunks[0], buf, &mut state);

        if let Some(result) = self.selected_result() {
            let detail = Layout::vertical([Constraint::Length(1), Constraint::Min(1)])
                .split(chunks[1]);

            Paragraph::new(Line::from(vec![
                Span::raw(" Estado: "),
                Span::styled(result.status.clone(), Style::default().fg(Color::Green)),
            ]))
            .render(detail[0], buf);

            let rows: Vec<Row> = result
                .measurements
                .iter()
                .map(|m| {
                    Row::new(vec![m.name.clone(), m.value.clone(), m.reference.clone()])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(40),
                    Constraint::Percentage(30),
                    Constraint::Percentage(30),
                ],
            )
            .header(
                Row::new(vec!["Parametro", "Valor", "Referencia"])
                    .style(Style::default().fg(self.theme.accent)),
            );
            Widget::render(table, detail[1], buf);
        }
    }
}
