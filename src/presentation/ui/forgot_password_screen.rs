//! Password recovery screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::widgets::TextInput;

/// Phase of the recovery flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetState {
    /// Waiting for the patient to type an address.
    EnteringEmail,
    /// The reset call is in flight; input is locked.
    Submitting,
    /// Confirmation view, echoing the address the link went to.
    Sent(String),
}

/// Email-based password recovery.
///
/// Submitting an empty address is a no-op; while the call is in flight every
/// key is ignored so the request cannot be sent twice.
pub struct ForgotPasswordScreen {
    email: TextInput,
    state: ResetState,
    theme: Theme,
}

impl ForgotPasswordScreen {
    /// Creates the screen in the input phase.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut email = TextInput::new("Correo electronico").placeholder("paciente@ejemplo.com");
        email.set_focused(true);
        Self {
            email,
            state: ResetState::EnteringEmail,
            theme,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn state(&self) -> &ResetState {
        &self.state
    }

    /// Locks input while the reset call runs.
    pub fn set_submitting(&mut self) {
        self.state = ResetState::Submitting;
    }

    /// Switches to the confirmation view for `email`.
    pub fn set_sent(&mut self, email: impl Into<String>) {
        self.state = ResetState::Sent(email.into());
    }

    /// Returns to the input phase, keeping the typed address.
    pub fn reset_input(&mut self) {
        self.state = ResetState::EnteringEmail;
        self.email.set_focused(true);
    }

    /// Handles a key event and returns the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if self.state != ResetState::EnteringEmail {
            return ScreenAction::None;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.email.input_char(c);
                ScreenAction::None
            }
            KeyCode::Backspace => {
                self.email.backspace();
                ScreenAction::None
            }
            KeyCode::Delete => {
                self.email.delete();
                ScreenAction::None
            }
            KeyCode::Left => {
                self.email.move_left();
                ScreenAction::None
            }
            KeyCode::Right => {
                self.email.move_right();
                ScreenAction::None
            }
            KeyCode::Home => {
                self.email.move_start();
                ScreenAction::None
            }
            KeyCode::End => {
                self.email.move_end();
                ScreenAction::None
            }
            KeyCode::Enter => {
                let email = self.email.value().trim().to_string();
                if email.is_empty() {
                    ScreenAction::None
                } else {
                    ScreenAction::SubmitReset(email)
                }
            }
            _ => ScreenAction::None,
        }
    }
}

impl Widget for &ForgotPasswordScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [card] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Max(12)])
            .flex(Flex::Center)
            .areas(card);

        let block = Block::default().borders(Borders::ALL).title(
            Line::from(" Recuperar Contrasena ")
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        let inner = block.inner(card);
        block.render(card, buf);

        match self.state {
            ResetState::EnteringEmail | ResetState::Submitting => {
                let chunks = Layout::vertical([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(2),
                ])
                .split(inner);

                Paragraph::new("Ingresa tu correo y te enviaremos un enlace para restablecer tu contrasena.")
                    .wrap(Wrap { trim: true })
                    .style(self.theme.dimmed_style)
                    .render(chunks[0], buf);

                (&self.email).render(chunks[1], buf);

                let hint = if self.state == ResetState::Submitting {
                    Line::from(Span::styled(
                        "Enviando...",
                        Style::default().fg(Color::Yellow),
                    ))
                } else {
                    Line::from(Span::styled("Enter para enviar", self.theme.dimmed_style))
                };
                Paragraph::new(hint)
                    .alignment(Alignment::Center)
                    .render(chunks[2], buf);
            }
            ResetState::Sent(ref email) => {
                let chunks =
                    Layout::vertical([Constraint::Length(2), Constraint::Min(2)]).split(inner);

                Paragraph::new(Line::from(Span::styled(
                    "✓ Enlace enviado",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center)
                .render(chunks[0], buf);

                Paragraph::new(format!(
                    "Hemos enviado un enlace de recuperacion a {email}. Revisa tu bandeja de entrada."
                ))
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .render(chunks[1], buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_text;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ForgotPasswordScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_submit_is_a_no_op() {
        let mut screen = ForgotPasswordScreen::new(Theme::default());

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
        assert_eq!(*screen.state(), ResetState::EnteringEmail);
    }

    #[test]
    fn submit_emits_the_typed_address() {
        let mut screen = ForgotPasswordScreen::new(Theme::default());
        type_text(&mut screen, "ana@ejemplo.com");

        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(
            action,
            ScreenAction::SubmitReset("ana@ejemplo.com".to_string())
        );
    }

    #[test]
    fn keys_are_ignored_while_submitting() {
        let mut screen = ForgotPasswordScreen::new(Theme::default());
        type_text(&mut screen, "ana@ejemplo.com");
        screen.set_submitting();

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), ScreenAction::None);
    }

    #[test]
    fn confirmation_echoes_the_address_verbatim() {
        let mut screen = ForgotPasswordScreen::new(Theme::default());
        screen.set_sent("ana@ejemplo.com");

        let text = render_to_text(&screen, 70, 14);

        assert!(text.contains("ana@ejemplo.com"));
        assert!(text.contains("Enlace enviado"));
    }
}
