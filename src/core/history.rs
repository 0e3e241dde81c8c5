//! History of applied operations.
//!
//! Provides immutable tracking of every operation folded into the running
//! result, following functional programming principles: recording or popping
//! returns a new history and leaves the original untouched.

use super::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied operation.
///
/// # Example
///
/// ```rust
/// use tally::core::{HistoryEntry, Operator};
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     operand: 5.0,
///     operator: Operator::Add,
///     result: 5.0,
///     recorded_at: Utc::now(),
/// };
/// assert_eq!(entry.result, 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The operand that was applied
    #[serde(with = "super::number")]
    pub operand: f64,
    /// The operator it was applied with
    pub operator: Operator,
    /// The running result after the operation
    #[serde(with = "super::number")]
    pub result: f64,
    /// When the operation was applied
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn now(operand: f64, operator: Operator, result: f64) -> Self {
        Self {
            operand,
            operator,
            result,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered stack of applied operations.
///
/// # Example
///
/// ```rust
/// use tally::core::{History, HistoryEntry, Operator};
///
/// let history = History::new()
///     .record(HistoryEntry::now(5.0, Operator::Add, 5.0))
///     .record(HistoryEntry::now(3.0, Operator::Multiply, 15.0));
///
/// assert_eq!(history.results(), vec![5.0, 15.0]);
///
/// let (history, popped) = history.pop();
/// assert_eq!(popped.map(|e| e.result), Some(15.0));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry on top.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Remove the top entry, returning the shortened history and the entry.
    ///
    /// Popping an empty history yields an empty history and `None`.
    pub fn pop(&self) -> (Self, Option<HistoryEntry>) {
        let mut entries = self.entries.clone();
        let top = entries.pop();
        (Self { entries }, top)
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running result after each entry, oldest first.
    pub fn results(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.result).collect()
    }

    /// Elapsed time from the first to the last entry.
    ///
    /// Returns `None` if there are no entries.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.recorded_at.signed_duration_since(first.recorded_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
