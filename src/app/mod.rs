//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and the controller that feeds key presses into the quiz session.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{QuizScreen, StartScreen};
pub use state::{AppState, NavigationAction, StateManager};
pub use tui::Tui;
