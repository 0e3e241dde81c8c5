//! Settings validation errors.

use crate::core::OperatorError;
use thiserror::Error;

/// A single problem found while validating settings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Invalid starting operator: {0}")]
    Operator(#[from] OperatorError),

    #[error("Digit count must be at least 1")]
    ZeroDigitCount,
}
