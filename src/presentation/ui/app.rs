//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::use_cases::{
    CapturePrescriptionUseCase, CaptureResult, RequestResetUseCase,
};
use crate::domain::errors::{CaptureError, ResetError};
use crate::domain::ports::{ImageCapturePort, PasswordResetPort};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::samples;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    AppointmentsScreen, ForgotPasswordScreen, HomeScreen, LabResultsScreen, NurseListScreen,
    NursingServicesScreen, PrescriptionsScreen, ProvidersScreen, Route, ScreenAction,
};
use crate::presentation::widgets::{Notice, NoticePopup, StatusBar, StatusLevel};

const NOTICE_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
enum Action {
    ResetResolved {
        email: String,
        result: Result<(), ResetError>,
    },
    CaptureFinished(Result<CaptureResult, CaptureError>),
}

enum CurrentScreen {
    Home(HomeScreen),
    Appointments(AppointmentsScreen),
    Providers(ProvidersScreen),
    Prescriptions(PrescriptionsScreen),
    LabResults(LabResultsScreen),
    NursingServices(NursingServicesScreen),
    NurseList(NurseListScreen),
    ForgotPassword(ForgotPasswordScreen),
}

/// Top-level application: screen stack, use cases, and the event loop.
pub struct App {
    screen: CurrentScreen,
    back_stack: Vec<CurrentScreen>,
    reset_use_case: RequestResetUseCase,
    capture_use_case: CapturePrescriptionUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    notice: Option<Notice>,
    notice_deadline: Option<Instant>,
    notice_duration: Duration,
    status: String,
    status_level: StatusLevel,
    timestamp_format: String,
    theme: Theme,
    exiting: bool,
}

impl App {
    /// Wires the application from configuration and its capability ports.
    #[must_use]
    pub fn new(
        config: &AppConfig,
        reset_port: Arc<dyn PasswordResetPort>,
        capture_port: Arc<dyn ImageCapturePort>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = Theme::new(&config.theme.accent_color);

        Self {
            screen: CurrentScreen::Home(HomeScreen::new(theme)),
            back_stack: Vec::new(),
            reset_use_case: RequestResetUseCase::new(reset_port),
            capture_use_case: CapturePrescriptionUseCase::new(capture_port),
            action_tx,
            action_rx,
            notice: None,
            notice_deadline: None,
            notice_duration: Duration::from_secs(config.ui.notice_duration),
            status: "Bienvenido a Cuidado".to_string(),
            status_level: StatusLevel::Info,
            timestamp_format: config.ui.timestamp_format.clone(),
            theme,
            exiting: false,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notice_interval = interval(NOTICE_POLL_INTERVAL);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.apply_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key(key);
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notice_interval.tick() => {
                    if self.expire_notice() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses a pending notice before reaching the screen.
        if self.notice.is_some() {
            self.clear_notice();
            return;
        }

        if self.accepts_global_quit() && EventHandler::is_quit_event(&key) {
            self.handle_screen_action(ScreenAction::Quit);
            return;
        }

        if key.code == crossterm::event::KeyCode::Esc {
            self.handle_screen_action(ScreenAction::Back);
            return;
        }

        let action = match &mut self.screen {
            CurrentScreen::Home(screen) => screen.handle_key(key),
            CurrentScreen::Appointments(screen) => screen.handle_key(key),
            CurrentScreen::Providers(screen) => screen.handle_key(key),
            CurrentScreen::Prescriptions(screen) => screen.handle_key(key),
            CurrentScreen::LabResults(screen) => screen.handle_key(key),
            CurrentScreen::NursingServices(screen) => screen.handle_key(key),
            CurrentScreen::NurseList(screen) => screen.handle_key(key),
            CurrentScreen::ForgotPassword(screen) => screen.handle_key(key),
        };
        self.handle_screen_action(action);
    }

    // Screens with a text field need plain 'q'; only Ctrl+C quits there.
    const fn accepts_global_quit(&self) -> bool {
        !matches!(
            self.screen,
            CurrentScreen::NurseList(_) | CurrentScreen::ForgotPassword(_)
        )
    }

    fn handle_screen_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.exiting = true,
            ScreenAction::Back => self.go_back(),
            ScreenAction::Navigate(route) => self.navigate(route),
            ScreenAction::SetStatus(message) => {
                self.set_status(message, StatusLevel::Success);
            }
            ScreenAction::SubmitReset(email) => self.start_reset(email),
            ScreenAction::CapturePrescription => self.start_capture(),
        }
    }

    fn navigate(&mut self, route: Route) {
        debug!(?route, "Navigating");
        let next = self.build_screen(route);
        let previous = std::mem::replace(&mut self.screen, next);
        self.back_stack.push(previous);
    }

    fn go_back(&mut self) {
        match self.back_stack.pop() {
            Some(previous) => {
                self.screen = previous;
                self.set_status(String::new(), StatusLevel::Info);
            }
            None => self.exiting = true,
        }
    }

    fn build_screen(&self, route: Route) -> CurrentScreen {
        match route {
            Route::Appointments => CurrentScreen::Appointments(AppointmentsScreen::new(
                samples::appointments(),
                self.timestamp_format.clone(),
                self.theme,
            )),
            Route::Providers => {
                CurrentScreen::Providers(ProvidersScreen::new(samples::providers(), self.theme))
            }
            Route::Prescriptions => CurrentScreen::Prescriptions(PrescriptionsScreen::new(
                samples::prescriptions(),
                self.timestamp_format.clone(),
                self.theme,
            )),
            Route::LabResults => CurrentScreen::LabResults(LabResultsScreen::new(
                samples::lab_results(),
                self.timestamp_format.clone(),
                self.theme,
            )),
            Route::NursingServices => CurrentScreen::NursingServices(NursingServicesScreen::new(
                samples::services(),
                self.theme,
            )),
            Route::NurseList { service } => CurrentScreen::NurseList(NurseListScreen::new(
                service,
                samples::nurses(),
                self.theme,
            )),
            Route::ForgotPassword => {
                CurrentScreen::ForgotPassword(ForgotPasswordScreen::new(self.theme))
            }
        }
    }

    fn start_reset(&mut self, email: String) {
        if let CurrentScreen::ForgotPassword(screen) = &mut self.screen {
            screen.set_submitting();
        }

        let use_case = self.reset_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(&email).await;
            let _ = tx.send(Action::ResetResolved { email, result });
        });
    }

    fn start_capture(&mut self) {
        self.set_status("Abriendo camara...".to_string(), StatusLevel::Info);

        let use_case = self.capture_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute().await;
            let _ = tx.send(Action::CaptureFinished(result));
        });
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::ResetResolved { email, result } => match result {
                Ok(()) => {
                    info!("Reset link sent");
                    if let CurrentScreen::ForgotPassword(screen) = &mut self.screen {
                        screen.set_sent(email);
                    }
                    self.set_status("Enlace de recuperacion enviado".to_string(), StatusLevel::Success);
                }
                Err(e) => {
                    error!(error = %e, "Reset request failed");
                    if let CurrentScreen::ForgotPassword(screen) = &mut self.screen {
                        screen.reset_input();
                    }
                    self.show_notice(Notice::error("Error", e.to_string()));
                }
            },
            Action::CaptureFinished(result) => match result {
                Ok(CaptureResult::Added(prescription)) => {
                    let id = prescription.id.clone();
                    if let CurrentScreen::Prescriptions(screen) = &mut self.screen {
                        screen.prepend(prescription);
                        self.set_status(
                            format!("Receta {id} agregada"),
                            StatusLevel::Success,
                        );
                    } else {
                        info!(%id, "Capture finished after leaving the screen");
                    }
                }
                Ok(CaptureResult::Cancelled) => {
                    debug!("Capture cancelled, list unchanged");
                    self.set_status(String::new(), StatusLevel::Info);
                }
                Err(CaptureError::PermissionDenied) => {
                    warn!("Capture aborted: permission denied");
                    self.show_notice(Notice::warn(
                        "Permiso denegado",
                        "Activa el permiso de camara para escanear recetas.",
                    ));
                }
                Err(e) => {
                    error!(error = %e, "Capture failed");
                    self.show_notice(Notice::error("Error", "No se pudo completar la captura."));
                }
            },
        }
    }

    fn set_status(&mut self, message: String, level: StatusLevel) {
        self.status = message;
        self.status_level = level;
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_deadline = Some(Instant::now() + self.notice_duration);
        self.set_status(String::new(), StatusLevel::Info);
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_deadline = None;
    }

    fn expire_notice(&mut self) -> bool {
        if let Some(deadline) = self.notice_deadline
            && Instant::now() >= deadline
        {
            self.clear_notice();
            return true;
        }
        false
    }

    fn hints(&self) -> &'static str {
        match self.screen {
            CurrentScreen::Home(_) => "↑↓: Navegar | Enter: Abrir | q: Salir",
            CurrentScreen::Prescriptions(_) => "n: Escanear | ↑↓: Navegar | Esc: Volver",
            CurrentScreen::NurseList(_) => "↑↓: Elegir | Enter: Reservar | Esc: Volver",
            CurrentScreen::ForgotPassword(_) => "Enter: Enviar | Esc: Volver",
            _ => "↑↓: Navegar | Enter: Abrir | Esc: Volver",
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [content, bar] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let status_bar = StatusBar::new(self.status.clone(), self.hints(), self.status_level);

        match &mut self.screen {
            CurrentScreen::Home(screen) => frame.render_widget(&*screen, content),
            CurrentScreen::Appointments(screen) => frame.render_widget(screen, content),
            CurrentScreen::Providers(screen) => frame.render_widget(screen, content),
            CurrentScreen::Prescriptions(screen) => frame.render_widget(&*screen, content),
            CurrentScreen::LabResults(screen) => frame.render_widget(&*screen, content),
            CurrentScreen::NursingServices(screen) => frame.render_widget(screen, content),
            CurrentScreen::NurseList(screen) => frame.render_widget(screen, content),
            CurrentScreen::ForgotPassword(screen) => frame.render_widget(&*screen, content),
        }

        frame.render_widget(&status_bar, bar);

        if let Some(ref notice) = self.notice {
            frame.render_widget(NoticePopup::new(notice), content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockCaptureScript, MockImageCapture, MockPasswordReset};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(
            &AppConfig::default(),
            Arc::new(MockPasswordReset::new()),
            Arc::new(MockImageCapture::new(MockCaptureScript::Capture)),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn enter_on_home_opens_a_section_and_esc_returns() {
        let mut app = app();

        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, CurrentScreen::Appointments(_)));
        assert_eq!(app.back_stack.len(), 1);

        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.screen, CurrentScreen::Home(_)));
        assert!(app.back_stack.is_empty());
    }

    #[tokio::test]
    async fn q_quits_from_home() {
        let mut app = app();

        app.handle_key(key(KeyCode::Char('q')));

        assert!(app.exiting);
    }

    #[tokio::test]
    async fn esc_on_home_exits() {
        let mut app = app();

        app.handle_key(key(KeyCode::Esc));

        assert!(app.exiting);
    }

    #[tokio::test]
    async fn nurse_list_keeps_the_chosen_service() {
        let mut app = app();
        app.navigate(Route::NursingServices);

        app.handle_key(key(KeyCode::Enter));

        match &app.screen {
            CurrentScreen::NurseList(screen) => {
                assert_eq!(
                    screen.service().map(|s| s.title.as_str()),
                    Some(samples::services()[0].title.as_str())
                );
            }
            _ => panic!("expected nurse list"),
        }
    }

    #[tokio::test]
    async fn denied_capture_shows_a_notice_and_keeps_the_list() {
        let mut app = app();
        app.navigate(Route::Prescriptions);
        let before = match &app.screen {
            CurrentScreen::Prescriptions(screen) => screen.len(),
            _ => unreachable!(),
        };

        app.apply_action(Action::CaptureFinished(Err(CaptureError::PermissionDenied)));

        assert!(app.notice.is_some());
        match &app.screen {
            CurrentScreen::Prescriptions(screen) => assert_eq!(screen.len(), before),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn captured_prescription_is_prepended() {
        let mut app = app();
        app.navigate(Route::Prescriptions);

        let rx = crate::domain::entities::Prescription::new(
            "rx-7777",
            "Receta escaneada",
            chrono::Utc::now(),
            vec![],
        )
        .with_image("capture://rx-7777.png");
        app.apply_action(Action::CaptureFinished(Ok(CaptureResult::Added(rx))));

        match &app.screen {
            CurrentScreen::Prescriptions(screen) => {
                assert_eq!(screen.get(0).map(|r| r.id.as_str()), Some("rx-7777"));
            }
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn resolved_reset_flips_to_the_confirmation_view() {
        let mut app = app();
        app.navigate(Route::ForgotPassword);

        app.apply_action(Action::ResetResolved {
            email: "ana@ejemplo.com".to_string(),
            result: Ok(()),
        });

        match &app.screen {
            CurrentScreen::ForgotPassword(screen) => {
                assert_eq!(
                    *screen.state(),
                    crate::presentation::ui::ResetState::Sent("ana@ejemplo.com".to_string())
                );
            }
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn any_key_dismisses_a_notice() {
        let mut app = app();
        app.show_notice(Notice::warn("Permiso denegado", "Sin acceso a la camara"));

        app.handle_key(key(KeyCode::Char('x')));

        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn q_does_not_quit_while_typing() {
        let mut app = app();
        app.navigate(Route::NurseList { service: None });

        app.handle_key(key(KeyCode::Char('q')));

        assert!(!app.exiting);
        match &app.screen {
            CurrentScreen::NurseList(screen) => assert_eq!(screen.search_text(), "q"),
            _ => unreachable!(),
        }
    }
}
