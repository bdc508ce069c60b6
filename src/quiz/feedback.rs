//! Answer feedback
//!
//! What the player sees after tapping a flag: a title, the running score,
//! and the label of the button that dismisses it.

use std::fmt;

/// Result of the last answer check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    kind: FeedbackKind,
    score: u32,
    total: u32,
    is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FeedbackKind {
    Correct,
    Wrong { chosen: String },
    AlreadyComplete,
}

impl Feedback {
    pub(crate) fn correct(score: u32, total: u32, is_final: bool) -> Self {
        Self {
            kind: FeedbackKind::Correct,
            score,
            total,
            is_final,
        }
    }

    pub(crate) fn wrong(chosen: impl Into<String>, score: u32, total: u32, is_final: bool) -> Self {
        Self {
            kind: FeedbackKind::Wrong {
                chosen: chosen.into(),
            },
            score,
            total,
            is_final,
        }
    }

    pub(crate) fn already_complete(score: u32, total: u32) -> Self {
        Self {
            kind: FeedbackKind::AlreadyComplete,
            score,
            total,
            is_final: true,
        }
    }

    /// Headline of the feedback popup
    pub fn title(&self) -> String {
        match &self.kind {
            FeedbackKind::Correct => "Correct!".to_string(),
            FeedbackKind::Wrong { chosen } => format!("Wrong, that's the flag of {}!", chosen),
            FeedbackKind::AlreadyComplete => {
                "You've completed this round - would you like to restart?".to_string()
            }
        }
    }

    /// Score line, worded differently once the session is over
    pub fn message(&self) -> String {
        if self.is_final {
            format!("Your final score is {}/{}", self.score, self.total)
        } else {
            format!("Your score is {}/{}", self.score, self.total)
        }
    }

    /// Title and score in one line, e.g. "Correct! Score: 1/8"
    pub fn summary(&self) -> String {
        format!("{} Score: {}/{}", self.title(), self.score, self.total)
    }

    /// Label of the acknowledgement button
    pub fn action_label(&self) -> &'static str {
        if self.is_final {
            "Restart?"
        } else {
            "Continue"
        }
    }

    pub fn is_correct(&self) -> bool {
        self.kind == FeedbackKind::Correct
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
