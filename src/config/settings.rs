//! Calculator settings and their builder.

use crate::config::error::SettingsError;
use crate::core::{Operator, Tally};
use std::num::NonZeroUsize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validated starting configuration for a calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub operator: Operator,
    pub digit_count: NonZeroUsize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            operator: Operator::default(),
            digit_count: NonZeroUsize::MIN,
        }
    }
}

impl Settings {
    /// Fresh calculator configured with these settings.
    pub fn tally(&self) -> Tally {
        Tally::with_config(self.operator, self.digit_count)
    }
}

/// Builder for settings taken from untrusted input (flags, UI fields).
///
/// Validation accumulates every problem instead of stopping at the first.
#[derive(Clone, Debug)]
pub struct SettingsBuilder {
    operator: String,
    digit_count: usize,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            operator: Operator::default().symbol().to_string(),
            digit_count: 1,
        }
    }

    /// Set the starting operator by symbol
    pub fn operator(mut self, symbol: impl Into<String>) -> Self {
        self.operator = symbol.into();
        self
    }

    /// Set the batch width
    pub fn digit_count(mut self, count: usize) -> Self {
        self.digit_count = count;
        self
    }

    /// Check every setting, accumulating ALL violations.
    pub fn validate(&self) -> Validation<Settings, NonEmptyVec<SettingsError>> {
        self.checked_operator()
            .and(self.checked_digit_count())
            .map(|(operator, digit_count)| Settings {
                operator,
                digit_count,
            })
    }

    /// Build the settings, or return every violation found.
    pub fn build(self) -> Result<Settings, NonEmptyVec<SettingsError>> {
        self.validate().into_result()
    }

    fn checked_operator(&self) -> Validation<Operator, NonEmptyVec<SettingsError>> {
        match self.operator.parse::<Operator>() {
            Ok(operator) => Validation::success(operator),
            Err(err) => Validation::fail(SettingsError::from(err)),
        }
    }

    fn checked_digit_count(&self) -> Validation<NonZeroUsize, NonEmptyVec<SettingsError>> {
        match NonZeroUsize::new(self.digit_count) {
            Some(count) => Validation::success(count),
            None => Validation::fail(SettingsError::ZeroDigitCount),
        }
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
