//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Operators and their arithmetic
//! - The input mode toggled by shift
//! - Immutable history tracking
//! - The `Tally` state machine and the display effects it emits
//!
//! Nothing in this module performs I/O. Display updates are returned as
//! [`Effect`] values for the shell to carry out.

mod effect;
mod history;
mod mode;
mod number;
mod operator;
mod snapshot;
mod tally;

pub use effect::{format_number, Effect, ProcessLine};
pub use history::{History, HistoryEntry};
pub use mode::Mode;
pub use operator::{ArithmeticError, Operator, OperatorError};
pub use snapshot::Snapshot;
pub use tally::{InputError, Tally};
