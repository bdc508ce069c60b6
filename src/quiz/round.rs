//! Round generation
//!
//! A round is three distinct countries plus the index of the one the
//! player has to find. Randomness comes in through `RoundSource` so a
//! session can be driven by a seeded generator or a fixed script.

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::quiz::catalog::Catalog;
use crate::{QuizError, Result};

/// Number of flags shown per round
pub const OPTIONS_PER_ROUND: usize = 3;

/// One question: the displayed options and the correct one among them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    options: Vec<String>,
    correct_index: usize,
}

impl Round {
    /// Build a round by hand, checking the round invariants
    pub fn new<S: Into<String>>(options: [S; OPTIONS_PER_ROUND], correct_index: usize) -> Result<Self> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if correct_index >= OPTIONS_PER_ROUND {
            return Err(QuizError::InvalidRound(format!(
                "correct index {} out of range",
                correct_index
            )));
        }

        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(QuizError::InvalidRound(format!(
                    "option {} appears twice",
                    option
                )));
            }
        }

        Ok(Self {
            options,
            correct_index,
        })
    }

    /// The displayed countries, in on-screen order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The country the player is asked to find
    pub fn target(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

/// Supplies a fresh round every time a question starts
pub trait RoundSource {
    fn next_round(&mut self, catalog: &Catalog) -> Round;
}

/// Shuffle-and-take-three round generator over any `Rng`
#[derive(Debug, Clone)]
pub struct RandomRounds<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomRounds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRounds<SmallRng> {
    /// Deterministic generator: the same seed yields the same rounds
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> RoundSource for RandomRounds<R> {
    fn next_round(&mut self, catalog: &Catalog) -> Round {
        let mut countries = catalog.countries().to_vec();
        countries.shuffle(&mut self.rng);
        countries.truncate(OPTIONS_PER_ROUND);

        Round {
            options: countries,
            correct_index: self.rng.gen_range(0..OPTIONS_PER_ROUND),
        }
    }
}
