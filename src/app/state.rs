//! Application state management
//!
//! Handles screen transitions and maps keyboard events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::quiz::OPTIONS_PER_ROUND;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Title screen
    #[default]
    Start,
    /// Quiz in progress
    Playing,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection to the previous flag (arrow up/left, k, h)
    Previous,
    /// Move selection to the next flag (arrow down/right, j, l, Tab)
    Next,
    /// Confirm selection or dismiss feedback (Enter, Space)
    Select,
    /// Pick a flag directly by number (1-3)
    Choose(usize),
    /// Back to the title screen (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Screen state manager
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the title screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        self.current_state = new_state;
    }

    /// Back out of the current screen; backing out of the title screen quits
    pub fn go_back(&mut self) {
        match self.current_state {
            AppState::Start => self.should_quit = true,
            AppState::Playing => self.current_state = AppState::Start,
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return NavigationAction::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                NavigationAction::Previous
            }
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                NavigationAction::Next
            }
            KeyCode::Tab => NavigationAction::Next,

            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < OPTIONS_PER_ROUND {
                    NavigationAction::Choose(index)
                } else {
                    NavigationAction::None
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}
