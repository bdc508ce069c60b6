//! Country catalog
//!
//! The fixed, ordered set of countries that rounds are drawn from.

use std::collections::HashSet;

use crate::quiz::round::OPTIONS_PER_ROUND;
use crate::{QuizError, Result};

/// Countries available out of the box, in display order
pub const DEFAULT_COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia", "Spain",
    "UK", "US",
];

/// Immutable list of country identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    countries: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting lists that cannot fill a round with
    /// distinct countries
    pub fn new<I, S>(countries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let countries: Vec<String> = countries.into_iter().map(Into::into).collect();
        Self::validate(&countries)?;
        Ok(Self { countries })
    }

    /// Check the catalog rules without building one
    pub fn validate(countries: &[String]) -> Result<()> {
        if countries.len() < OPTIONS_PER_ROUND {
            return Err(QuizError::ConfigError(format!(
                "Catalog needs at least {} countries, got {}",
                OPTIONS_PER_ROUND,
                countries.len()
            )));
        }

        let mut seen = HashSet::with_capacity(countries.len());
        for country in countries {
            if country.trim().is_empty() {
                return Err(QuizError::ConfigError(
                    "Country names must not be empty".to_string(),
                ));
            }
            if !seen.insert(country.as_str()) {
                return Err(QuizError::ConfigError(format!(
                    "Duplicate country in catalog: {}",
                    country
                )));
            }
        }

        Ok(())
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
