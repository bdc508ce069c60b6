//! End-to-end behaviour of quiz sessions

use flagquiz::quiz::{Catalog, Phase, QuizSession, RandomRounds, Round, RoundSource};
use flagquiz::QuizError;

/// Always deals the same round
struct FixedRound(Round);

impl RoundSource for FixedRound {
    fn next_round(&mut self, _catalog: &Catalog) -> Round {
        self.0.clone()
    }
}

fn scenario_session() -> QuizSession<FixedRound> {
    let round = Round::new(["France", "Spain", "Nigeria"], 1).unwrap();
    QuizSession::new(Catalog::default(), 8, FixedRound(round)).unwrap()
}

#[test]
fn test_correct_answer_scenario() {
    let mut session = scenario_session();
    let feedback = session.submit_answer(1).unwrap();

    assert_eq!(session.score(), 1);
    assert_eq!(session.questions_asked(), 1);
    assert_eq!(feedback.summary(), "Correct! Score: 1/8");
}

#[test]
fn test_wrong_answer_scenario() {
    let mut session = scenario_session();
    let feedback = session.submit_answer(0).unwrap();

    assert_eq!(session.score(), 0);
    assert_eq!(session.questions_asked(), 1);
    assert_eq!(
        feedback.summary(),
        "Wrong, that's the flag of France! Score: 0/8"
    );
}

#[test]
fn test_counters_stay_bounded_across_seeds() {
    for seed in 0..50u64 {
        let mut session =
            QuizSession::new(Catalog::default(), 8, RandomRounds::seeded(seed)).unwrap();

        // pick option (seed + turn) % 3 so every seed mixes hits and misses
        for turn in 0..20u64 {
            let choice = ((seed + turn) % 3) as usize;
            let score_before = session.score();
            let asked_before = session.questions_asked();
            let correct = choice == session.round().correct_index();

            session.submit_answer(choice).unwrap();

            assert!(session.score() <= session.questions_asked());
            assert!(session.questions_asked() <= 8);
            assert_eq!(session.questions_asked(), asked_before + 1);
            assert_eq!(session.score(), score_before + correct as u32);

            let was_final = session.phase() == Phase::SessionComplete;
            session.acknowledge_feedback().unwrap();
            if was_final {
                assert_eq!(session.score(), 0);
                assert_eq!(session.questions_asked(), 0);
            }
            assert_eq!(session.phase(), Phase::AwaitingAnswer);
        }
    }
}

#[test]
fn test_rounds_always_distinct() {
    let mut session = QuizSession::new(Catalog::default(), 8, RandomRounds::seeded(11)).unwrap();

    for _ in 0..200 {
        let options = session.round().options().to_vec();
        assert_eq!(options.len(), 3);
        assert!(options[0] != options[1] && options[1] != options[2] && options[0] != options[2]);
        assert!(session.round().correct_index() < 3);
        session.new_round();
    }
}

#[test]
fn test_eighth_answer_reports_final_score() {
    let mut session = QuizSession::new(Catalog::default(), 8, RandomRounds::seeded(3)).unwrap();

    for _ in 0..7 {
        let correct = session.round().correct_index();
        session.submit_answer(correct).unwrap();
        assert_eq!(session.phase(), Phase::ShowingFeedback);
        session.acknowledge_feedback().unwrap();
    }
    let correct = session.round().correct_index();
    let feedback = session.submit_answer(correct).unwrap();

    assert_eq!(session.phase(), Phase::SessionComplete);
    assert_eq!(feedback.message(), "Your final score is 8/8");
    assert_eq!(feedback.action_label(), "Restart?");

    session.acknowledge_feedback().unwrap();
    assert_eq!(session.phase(), Phase::AwaitingAnswer);
    assert_eq!(session.score(), 0);
    assert_eq!(session.questions_asked(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = QuizSession::new(Catalog::default(), 8, RandomRounds::seeded(99)).unwrap();
    let mut b = QuizSession::new(Catalog::default(), 8, RandomRounds::seeded(99)).unwrap();

    for _ in 0..8 {
        assert_eq!(a.snapshot(), b.snapshot());
        a.submit_answer(0).unwrap();
        b.submit_answer(0).unwrap();
        a.acknowledge_feedback().unwrap();
        b.acknowledge_feedback().unwrap();
    }
}

#[test]
fn test_contract_violations() {
    let mut session = scenario_session();

    assert!(matches!(
        session.submit_answer(3),
        Err(QuizError::InvalidOption(3))
    ));
    assert!(matches!(
        session.acknowledge_feedback(),
        Err(QuizError::InvalidPhase {
            phase: Phase::AwaitingAnswer,
            ..
        })
    ));

    session.submit_answer(1).unwrap();
    assert!(matches!(
        session.submit_answer(0),
        Err(QuizError::InvalidPhase {
            phase: Phase::ShowingFeedback,
            ..
        })
    ));
    assert_eq!(session.questions_asked(), 1);
}
