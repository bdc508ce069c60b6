//! Quiz core module
//!
//! Contains the country catalog, round generation and the session state
//! machine. Nothing in here knows about terminals.

pub mod catalog;
pub mod feedback;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_COUNTRIES};
pub use feedback::Feedback;
pub use round::{RandomRounds, Round, RoundSource, OPTIONS_PER_ROUND};
pub use session::{Phase, QuizObserver, QuizSession, QuizSnapshot, TracingObserver};
