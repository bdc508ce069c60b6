//! Main application controller
//!
//! Translates key presses into quiz session events and renders the
//! screen for the current state. The controller does not own the
//! terminal, so it can be driven from tests.

use tracing::{debug, warn};

use crate::{
    app::{
        screens::{QuizScreen, StartScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::{Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::QuizConfig,
    error,
    quiz::{Phase, QuizSession, RoundSource, TracingObserver},
    Result,
};

/// TUI application controller
pub struct App<S: RoundSource = crate::quiz::RandomRounds> {
    state_manager: StateManager,
    session: QuizSession<S>,
    start_screen: StartScreen,
    quiz_screen: QuizScreen,
}

impl App {
    /// Create an application from configuration
    pub fn new(config: &QuizConfig) -> Result<Self> {
        Ok(Self::with_session(QuizSession::from_config(config)?))
    }
}

impl<S: RoundSource> App<S> {
    /// Create an application around an existing session
    pub fn with_session(mut session: QuizSession<S>) -> Self {
        session.subscribe(TracingObserver::new());
        Self {
            state_manager: StateManager::new(),
            start_screen: StartScreen::new(session.rounds_per_session()),
            quiz_screen: QuizScreen::new(),
            session,
        }
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        if !tui.is_size_adequate()? {
            warn!(
                min_width = MIN_WIDTH,
                min_height = MIN_HEIGHT,
                "terminal smaller than recommended"
            );
        }

        while !self.state_manager.should_quit() {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_action(StateManager::key_to_navigation(key))?;
            }
        }
        Ok(())
    }

    /// Draw the current screen
    pub fn render(&self, f: &mut ratatui::Frame) {
        match self.state_manager.current_state() {
            AppState::Start => self.start_screen.render(f),
            AppState::Playing => self.quiz_screen.render(f, &self.session.snapshot()),
        }
    }

    /// Apply one user action
    pub fn handle_action(&mut self, action: NavigationAction) -> Result<()> {
        if action == NavigationAction::Quit {
            self.state_manager.quit();
            return Ok(());
        }

        match self.state_manager.current_state() {
            AppState::Start => self.handle_start_action(action),
            AppState::Playing => self.handle_playing_action(action)?,
        }
        Ok(())
    }

    fn handle_start_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Select => {
                self.session.start_session();
                self.quiz_screen.reset_selection();
                self.quiz_screen.clear_status();
                self.state_manager.transition_to(AppState::Playing);
            }
            NavigationAction::Back => self.state_manager.go_back(),
            _ => {}
        }
    }

    fn handle_playing_action(&mut self, action: NavigationAction) -> Result<()> {
        if action == NavigationAction::Back {
            self.state_manager.go_back();
            return Ok(());
        }

        let outcome = match self.session.phase() {
            Phase::AwaitingAnswer => match action {
                NavigationAction::Previous => {
                    self.quiz_screen.select_previous();
                    Ok(())
                }
                NavigationAction::Next => {
                    self.quiz_screen.select_next();
                    Ok(())
                }
                NavigationAction::Select => self.submit(self.quiz_screen.selected()),
                NavigationAction::Choose(index) => self.submit(index),
                _ => Ok(()),
            },
            // options are inert while a popup is up
            Phase::ShowingFeedback | Phase::SessionComplete => match action {
                NavigationAction::Select => self.session.acknowledge_feedback().map(|_| {
                    self.quiz_screen.reset_selection();
                }),
                _ => Ok(()),
            },
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(err) if error::is_usage_error(&err) => {
                debug!(%err, "rejected input");
                self.quiz_screen
                    .set_status(error::user_friendly_message(&err));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn submit(&mut self, index: usize) -> Result<()> {
        self.quiz_screen.clear_status();
        self.session.submit_answer(index).map(|_| ())
    }

    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn session(&self) -> &QuizSession<S> {
        &self.session
    }

    pub fn quiz_screen(&self) -> &QuizScreen {
        &self.quiz_screen
    }
}
