//! Validated calculator settings.
//!
//! Settings arrive as raw text and numbers from flags or UI fields. The
//! builder validates them with Stillwater's `Validation` type so that every
//! problem is reported at once rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use tally::config::SettingsBuilder;
//! use tally::core::Operator;
//!
//! let settings = SettingsBuilder::new()
//!     .operator("*")
//!     .digit_count(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.operator, Operator::Multiply);
//!
//! let errors = SettingsBuilder::new()
//!     .operator("x")
//!     .digit_count(0)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

pub mod error;
pub mod settings;

pub use error::SettingsError;
pub use settings::{Settings, SettingsBuilder};
