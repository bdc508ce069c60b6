//! Quiz session state machine
//!
//! Owns the score, the question counter, the current round and the last
//! feedback. The presentation layer drives it with `submit_answer` and
//! `acknowledge_feedback` and reads it back through `snapshot` or by
//! subscribing a `QuizObserver`.

use std::fmt;

use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::quiz::{
    catalog::Catalog,
    feedback::Feedback,
    round::{RandomRounds, Round, RoundSource, OPTIONS_PER_ROUND},
};
use crate::{QuizError, Result, MAX_ROUNDS_PER_SESSION};

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Three options shown, waiting for a tap
    AwaitingAnswer,
    /// Feedback popup shown, options disabled
    ShowingFeedback,
    /// Last round answered, next acknowledgement restarts
    SessionComplete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingAnswer => write!(f, "awaiting an answer"),
            Phase::ShowingFeedback => write!(f, "showing feedback"),
            Phase::SessionComplete => write!(f, "the session is complete"),
        }
    }
}

/// Everything a view needs to draw the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub options: Vec<String>,
    pub target: String,
    pub score: u32,
    pub questions_asked: u32,
    pub rounds_per_session: u32,
    pub phase: Phase,
    pub feedback: Option<Feedback>,
}

/// Receives a snapshot after every state change
pub trait QuizObserver {
    fn on_change(&mut self, snapshot: &QuizSnapshot);
}

impl<F> QuizObserver for F
where
    F: FnMut(&QuizSnapshot),
{
    fn on_change(&mut self, snapshot: &QuizSnapshot) {
        self(snapshot)
    }
}

/// Logs phase changes through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver {
    last_phase: Option<Phase>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuizObserver for TracingObserver {
    fn on_change(&mut self, snapshot: &QuizSnapshot) {
        if self.last_phase != Some(snapshot.phase) {
            debug!(
                phase = %snapshot.phase,
                score = snapshot.score,
                questions_asked = snapshot.questions_asked,
                "quiz phase changed"
            );
            self.last_phase = Some(snapshot.phase);
        }
    }
}

/// A run of rounds with a running score
pub struct QuizSession<S: RoundSource = RandomRounds> {
    catalog: Catalog,
    source: S,
    rounds_per_session: u32,
    round: Round,
    score: u32,
    questions_asked: u32,
    phase: Phase,
    feedback: Option<Feedback>,
    observers: Vec<Box<dyn QuizObserver>>,
}

impl QuizSession<RandomRounds> {
    /// Build a session from configuration, seeded if the config asks for it
    pub fn from_config(config: &QuizConfig) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::new(config.countries.iter().cloned())?;
        let source = match config.seed {
            Some(seed) => RandomRounds::seeded(seed),
            None => RandomRounds::from_entropy(),
        };
        Self::new(catalog, config.rounds_per_session, source)
    }
}

impl<S: RoundSource> QuizSession<S> {
    /// Create a session and start it immediately
    pub fn new(catalog: Catalog, rounds_per_session: u32, mut source: S) -> Result<Self> {
        if rounds_per_session == 0 || rounds_per_session > MAX_ROUNDS_PER_SESSION {
            return Err(QuizError::ConfigError(format!(
                "Rounds per session must be between 1 and {}",
                MAX_ROUNDS_PER_SESSION
            )));
        }

        let round = source.next_round(&catalog);
        info!(
            countries = catalog.len(),
            rounds_per_session, "quiz session created"
        );

        Ok(Self {
            catalog,
            source,
            rounds_per_session,
            round,
            score: 0,
            questions_asked: 0,
            phase: Phase::AwaitingAnswer,
            feedback: None,
            observers: Vec::new(),
        })
    }

    /// Register an observer; it is called after every state change
    pub fn subscribe<O: QuizObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Reset both counters and deal a fresh round
    pub fn start_session(&mut self) {
        self.score = 0;
        self.questions_asked = 0;
        info!("quiz session started");
        self.new_round();
    }

    /// Replace the current round and clear any feedback
    pub fn new_round(&mut self) {
        self.round = self.source.next_round(&self.catalog);
        self.feedback = None;
        self.phase = Phase::AwaitingAnswer;
        debug!(
            options = ?self.round.options(),
            target = self.round.target(),
            "new round"
        );
        self.notify();
    }

    /// Check the tapped option against the correct one
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<Feedback> {
        if selected_index >= OPTIONS_PER_ROUND {
            return Err(QuizError::InvalidOption(selected_index));
        }
        if self.phase != Phase::AwaitingAnswer {
            return Err(QuizError::InvalidPhase {
                operation: "submit an answer",
                phase: self.phase,
            });
        }

        let feedback = if self.is_exhausted() {
            self.phase = Phase::SessionComplete;
            Feedback::already_complete(self.score, self.rounds_per_session)
        } else {
            let correct = selected_index == self.round.correct_index();
            if correct {
                self.score += 1;
            }
            self.questions_asked += 1;

            let is_final = self.is_exhausted();
            self.phase = if is_final {
                Phase::SessionComplete
            } else {
                Phase::ShowingFeedback
            };

            debug!(
                selected_index,
                correct,
                score = self.score,
                questions_asked = self.questions_asked,
                "answer submitted"
            );
            if is_final {
                info!(score = self.score, total = self.rounds_per_session, "quiz session complete");
            }

            if correct {
                Feedback::correct(self.score, self.rounds_per_session, is_final)
            } else {
                Feedback::wrong(
                    self.round.options()[selected_index].clone(),
                    self.score,
                    self.rounds_per_session,
                    is_final,
                )
            }
        };

        self.feedback = Some(feedback.clone());
        self.notify();
        Ok(feedback)
    }

    /// Dismiss the feedback: next round, or a full restart after the last one
    pub fn acknowledge_feedback(&mut self) -> Result<()> {
        match self.phase {
            Phase::AwaitingAnswer => Err(QuizError::InvalidPhase {
                operation: "acknowledge feedback",
                phase: self.phase,
            }),
            Phase::ShowingFeedback => {
                self.new_round();
                Ok(())
            }
            Phase::SessionComplete => {
                self.start_session();
                Ok(())
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn rounds_per_session(&self) -> u32 {
        self.rounds_per_session
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn target_country(&self) -> &str {
        self.round.target()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            options: self.round.options().to_vec(),
            target: self.round.target().to_string(),
            score: self.score,
            questions_asked: self.questions_asked,
            rounds_per_session: self.rounds_per_session,
            phase: self.phase,
            feedback: self.feedback.clone(),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.questions_asked >= self.rounds_per_session
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Hands out pre-built rounds, repeating the last one when exhausted
    struct ScriptedRounds {
        rounds: VecDeque<Round>,
        last: Round,
    }

    impl ScriptedRounds {
        fn new(rounds: Vec<Round>) -> Self {
            let last = rounds.last().cloned().unwrap();
            Self {
                rounds: rounds.into(),
                last,
            }
        }
    }

    impl RoundSource for ScriptedRounds {
        fn next_round(&mut self, _catalog: &Catalog) -> Round {
            self.rounds.pop_front().unwrap_or_else(|| self.last.clone())
        }
    }

    fn france_spain_nigeria() -> Round {
        Round::new(["France", "Spain", "Nigeria"], 1).unwrap()
    }

    fn scripted_session() -> QuizSession<ScriptedRounds> {
        QuizSession::new(
            Catalog::default(),
            8,
            ScriptedRounds::new(vec![france_spain_nigeria()]),
        )
        .unwrap()
    }

    #[test]
    fn test_session_starts_awaiting_answer() {
        let session = scripted_session();
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert!(session.feedback().is_none());
        assert_eq!(session.target_country(), "Spain");
    }

    #[test]
    fn test_correct_answer() {
        let mut session = scripted_session();
        let feedback = session.submit_answer(1).unwrap();

        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(feedback.summary(), "Correct! Score: 1/8");
        assert_eq!(session.phase(), Phase::ShowingFeedback);
    }

    #[test]
    fn test_wrong_answer() {
        let mut session = scripted_session();
        let feedback = session.submit_answer(0).unwrap();

        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(feedback.summary(), "Wrong, that's the flag of France! Score: 0/8");
    }

    #[test]
    fn test_invalid_option_rejected_without_change() {
        let mut session = scripted_session();
        let err = session.submit_answer(3).unwrap_err();

        assert!(matches!(err, QuizError::InvalidOption(3)));
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_answer_while_showing_feedback_rejected() {
        let mut session = scripted_session();
        session.submit_answer(1).unwrap();
        let err = session.submit_answer(1).unwrap_err();

        assert!(matches!(err, QuizError::InvalidPhase { .. }));
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_acknowledge_while_awaiting_rejected() {
        let mut session = scripted_session();
        assert!(session.acknowledge_feedback().is_err());
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_acknowledge_starts_next_round() {
        let mut session = scripted_session();
        session.submit_answer(0).unwrap();
        session.acknowledge_feedback().unwrap();

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert!(session.feedback().is_none());
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_eighth_answer_completes_session() {
        let mut session = scripted_session();
        for _ in 0..7 {
            session.submit_answer(1).unwrap();
            session.acknowledge_feedback().unwrap();
        }
        let feedback = session.submit_answer(0).unwrap();

        assert_eq!(session.phase(), Phase::SessionComplete);
        assert_eq!(session.questions_asked(), 8);
        assert_eq!(feedback.message(), "Your final score is 7/8");
        assert_eq!(feedback.action_label(), "Restart?");
    }

    #[test]
    fn test_answer_after_completion_rejected() {
        let mut session = scripted_session();
        for _ in 0..7 {
            session.submit_answer(1).unwrap();
            session.acknowledge_feedback().unwrap();
        }
        session.submit_answer(0).unwrap();

        let err = session.submit_answer(2).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidPhase {
                phase: Phase::SessionComplete,
                ..
            }
        ));
        assert_eq!(
            session.feedback().map(|f| f.title()),
            Some("Wrong, that's the flag of France!".to_string())
        );
        assert_eq!(session.score(), 7);
        assert_eq!(session.questions_asked(), 8);
        assert_eq!(session.phase(), Phase::SessionComplete);
    }

    #[test]
    fn test_new_round_after_completion_reaches_exhausted_branch() {
        let mut session = QuizSession::new(
            Catalog::default(),
            1,
            ScriptedRounds::new(vec![france_spain_nigeria()]),
        )
        .unwrap();
        session.submit_answer(1).unwrap();
        session.new_round();
        assert_eq!(session.phase(), Phase::AwaitingAnswer);

        let feedback = session.submit_answer(1).unwrap();
        assert!(feedback.title().contains("restart"));
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(session.phase(), Phase::SessionComplete);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut session = scripted_session();
        for _ in 0..8 {
            session.submit_answer(1).unwrap();
            session.acknowledge_feedback().unwrap();
        }

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let result = QuizSession::new(
            Catalog::default(),
            0,
            ScriptedRounds::new(vec![france_spain_nigeria()]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_observers_notified_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut session = scripted_session();

        let first = Rc::clone(&log);
        session.subscribe(move |s: &QuizSnapshot| first.borrow_mut().push(("first", s.phase)));
        let second = Rc::clone(&log);
        session.subscribe(move |s: &QuizSnapshot| second.borrow_mut().push(("second", s.phase)));

        session.submit_answer(1).unwrap();
        session.acknowledge_feedback().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", Phase::ShowingFeedback),
                ("second", Phase::ShowingFeedback),
                ("first", Phase::AwaitingAnswer),
                ("second", Phase::AwaitingAnswer),
            ]
        );
    }

    #[test]
    fn test_failed_call_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut session = scripted_session();
        let counter = Rc::clone(&count);
        session.subscribe(move |_: &QuizSnapshot| *counter.borrow_mut() += 1);

        assert!(session.submit_answer(5).is_err());
        assert!(session.acknowledge_feedback().is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = scripted_session();
        session.submit_answer(2).unwrap();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.options, vec!["France", "Spain", "Nigeria"]);
        assert_eq!(snapshot.target, "Spain");
        assert_eq!(snapshot.questions_asked, 1);
        assert_eq!(snapshot.rounds_per_session, 8);
        assert_eq!(snapshot.phase, Phase::ShowingFeedback);
        assert_eq!(
            snapshot.feedback.map(|f| f.title()),
            Some("Wrong, that's the flag of Nigeria!".to_string())
        );
    }

    #[test]
    fn test_tracing_observer_tracks_phase() {
        let mut observer = TracingObserver::new();
        let session = scripted_session();
        observer.on_change(&session.snapshot());
        assert_eq!(observer.last_phase, Some(Phase::AwaitingAnswer));
    }
}
