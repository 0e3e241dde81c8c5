//! Input mode of the calculator.
//!
//! The mode decides whether a digit that fills the batch width commits
//! immediately or keeps accumulating until shift is released.

use serde::{Deserialize, Serialize};

/// Whether digit input commits as soon as the batch width is reached.
///
/// # Example
///
/// ```rust
/// use tally::core::Mode;
///
/// assert!(!Mode::Immediate.is_batching());
/// assert!(Mode::Batching.is_batching());
/// assert_eq!(Mode::from_shift(true), Mode::Batching);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Digits commit once the batch width is reached.
    #[default]
    Immediate,
    /// Shift is held; digits accumulate until it is released.
    Batching,
}

impl Mode {
    /// Mode implied by the shift modifier.
    pub fn from_shift(held: bool) -> Self {
        if held {
            Self::Batching
        } else {
            Self::Immediate
        }
    }

    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Batching => "Batching",
        }
    }

    /// True while the shift modifier is held.
    pub fn is_batching(&self) -> bool {
        matches!(self, Self::Batching)
    }
}
