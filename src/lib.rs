//! Tally: a running-total calculator core
//!
//! Tally is built on a "pure core, imperative shell" split. The core state
//! machine decides how digit input, operator selection, the shift
//! (hold-to-batch) modifier, undo, and manual result overrides change a single
//! running result and its history. It performs no I/O; instead every entry
//! point returns the display effects it implies. The shell routes those
//! effects to whatever presentation layer is attached.
//!
//! # Core Concepts
//!
//! - **Operator**: one of `+ - * / % **`, folded into the running result
//! - **Batch width**: how many digits form one operand before it commits
//! - **Shift**: while held, digits keep accumulating past the batch width
//! - **History**: every committed operation, undoable one step at a time
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Effect, Operator, ProcessLine, Tally};
//!
//! let mut tally = Tally::new();
//! tally.set_digit_count(2).unwrap();
//!
//! tally.input_digit('1').unwrap();
//! let effects = tally.input_digit('5').unwrap();
//! assert!(effects.contains(&Effect::Result(15.0)));
//!
//! tally.set_operator(Operator::Multiply);
//! tally.set_shift(true);
//! for digit in "100".chars() {
//!     tally.input_digit(digit).unwrap();
//! }
//! tally.set_shift(false);
//! assert_eq!(tally.result(), Some(1500.0));
//!
//! let effects = tally.undo();
//! assert_eq!(
//!     effects[0],
//!     Effect::Erased(Some(ProcessLine::new(Operator::Multiply, "100")))
//! );
//! assert_eq!(tally.result(), Some(15.0));
//! ```

pub mod config;
pub mod core;
pub mod shell;

// Re-export commonly used types
pub use crate::config::{Settings, SettingsBuilder};
pub use crate::core::{Effect, History, HistoryEntry, Mode, Operator, Tally};
pub use crate::shell::{Command, Session, Surface};
