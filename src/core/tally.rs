//! The running-total state machine.
//!
//! `Tally` owns the running result, the pending digit buffer, the selected
//! operator, the batch width, the input mode and the history stack. Every
//! entry point mutates that state and returns the display effects it implies,
//! in the order a presentation layer should apply them.

use super::effect::{Effect, ProcessLine};
use super::history::{History, HistoryEntry};
use super::mode::Mode;
use super::operator::Operator;
use super::snapshot::Snapshot;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Input rejected by a calculator entry point. State is left unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),

    #[error("Digit count must be at least 1")]
    ZeroDigitCount,

    #[error("Result must be a finite number, got {0}")]
    NonFinite(f64),
}

/// Running-total calculator.
///
/// # Example
///
/// ```rust
/// use tally::core::{Operator, Tally};
///
/// let mut tally = Tally::new();
/// tally.input_digit('4').unwrap();
/// tally.set_operator(Operator::Multiply);
/// tally.input_digit('3').unwrap();
/// assert_eq!(tally.result(), Some(12.0));
///
/// tally.undo();
/// assert_eq!(tally.result(), Some(4.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tally {
    result: Option<f64>,
    pending: String,
    operator: Operator,
    digit_count: NonZeroUsize,
    history: History,
    mode: Mode,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally {
    /// Calculator with `+` selected, committing every digit.
    pub fn new() -> Self {
        Self::with_config(Operator::default(), NonZeroUsize::MIN)
    }

    pub fn with_config(operator: Operator, digit_count: NonZeroUsize) -> Self {
        Self {
            result: None,
            pending: String::new(),
            operator,
            digit_count,
            history: History::new(),
            mode: Mode::Immediate,
        }
    }

    /// Running result, `None` until the first commit or after a clear.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Result as shown on the display, where an absent result reads `0`.
    pub fn displayed_result(&self) -> f64 {
        self.result.unwrap_or(0.0)
    }

    /// Digits typed but not yet committed.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count.get()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Append a digit to the pending buffer.
    ///
    /// Once the buffer reaches the batch width it is committed, unless shift
    /// is held.
    pub fn input_digit(&mut self, digit: char) -> Result<Vec<Effect>, InputError> {
        if !digit.is_ascii_digit() {
            return Err(InputError::NotADigit(digit));
        }

        let mut effects = vec![Effect::Calculated(false), Effect::Erased(None)];
        self.pending.push(digit);
        effects.push(Effect::Process(Some(self.pending_line())));

        if self.pending.len() >= self.digit_count.get() && !self.mode.is_batching() {
            self.flush(&mut effects);
        }

        Ok(effects)
    }

    /// Select the operator used by subsequent commits.
    ///
    /// Pending digits stay pending; the process line switches operator.
    pub fn set_operator(&mut self, operator: Operator) -> Vec<Effect> {
        self.operator = operator;
        vec![Effect::Process(Some(self.pending_line()))]
    }

    /// Change the batch width. Pending digits are not committed.
    pub fn set_digit_count(&mut self, count: usize) -> Result<Vec<Effect>, InputError> {
        let count = NonZeroUsize::new(count).ok_or(InputError::ZeroDigitCount)?;
        self.digit_count = count;
        Ok(Vec::new())
    }

    /// Press or release shift.
    ///
    /// Releasing commits whatever is pending, so shift doubles as an explicit
    /// "commit now" gesture for partially filled batches.
    pub fn set_shift(&mut self, held: bool) -> Vec<Effect> {
        self.mode = Mode::from_shift(held);

        let mut effects = Vec::new();
        if !held && !self.pending.is_empty() {
            self.flush(&mut effects);
        }
        effects.push(Effect::Shift(held));
        effects
    }

    pub fn toggle_shift(&mut self) -> Vec<Effect> {
        self.set_shift(!self.mode.is_batching())
    }

    /// Undo the most recent action.
    ///
    /// Pending digits are discarded first. With nothing pending, the top
    /// history entry is removed and the result rolls back to the entry
    /// beneath it. Undoing the only entry resets the calculator.
    pub fn undo(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        if !self.pending.is_empty() {
            let erased = ProcessLine::new(self.operator, std::mem::take(&mut self.pending));
            effects.push(Effect::Erased(Some(erased)));

            match self.history.last() {
                Some(last) => effects.push(Effect::Process(Some(entry_line(last)))),
                None => self.reset(&mut effects),
            }
            return effects;
        }

        let (history, popped) = self.history.pop();
        self.history = history;
        if let Some(entry) = &popped {
            effects.push(Effect::Erased(Some(entry_line(entry))));
        }

        match self.history.last().cloned() {
            Some(previous) => {
                self.result = Some(previous.result);
                effects.push(Effect::Result(previous.result));
                effects.push(Effect::Process(Some(entry_line(&previous))));
            }
            None => self.reset(&mut effects),
        }

        effects
    }

    /// Overwrite the result by hand.
    ///
    /// The change is recorded as an ordinary `+` or `-` entry carrying the
    /// absolute difference, so it can be undone like any other step. The
    /// selected operator is not affected.
    pub fn change_result(&mut self, value: f64) -> Result<Vec<Effect>, InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFinite(value));
        }

        let difference = value - self.displayed_result();
        let operator = if difference < 0.0 {
            Operator::Subtract
        } else {
            Operator::Add
        };

        let mut effects = Vec::new();
        self.record(value, difference.abs(), operator, &mut effects);
        Ok(effects)
    }

    /// Drop the result, the pending digits and the history.
    ///
    /// Operator, batch width and mode are kept.
    pub fn clear(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.reset(&mut effects);
        effects.push(Effect::Erased(None));
        effects
    }

    /// Effects that repaint the whole display from the current state.
    pub fn render(&self) -> Vec<Effect> {
        let process = if !self.pending.is_empty() {
            Some(self.pending_line())
        } else {
            self.history.last().map(entry_line)
        };

        vec![
            Effect::Result(self.displayed_result()),
            Effect::Process(process),
            Effect::Erased(None),
            Effect::Shift(self.mode.is_batching()),
            Effect::Calculated(false),
        ]
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            result: self.result,
            pending: self.pending.clone(),
            operator: self.operator,
            digit_count: self.digit_count.get(),
            mode: self.mode,
            history: self.history.clone(),
        }
    }

    fn pending_line(&self) -> ProcessLine {
        ProcessLine::new(self.operator, self.pending.clone())
    }

    fn flush(&mut self, effects: &mut Vec<Effect>) {
        let digits = std::mem::take(&mut self.pending);
        self.commit(&digits, effects);
    }

    fn commit(&mut self, digits: &str, effects: &mut Vec<Effect>) {
        let acc = self.result.unwrap_or_else(|| self.operator.seed());
        // pending only ever holds ASCII digits
        let operand = digits.parse::<f64>().unwrap_or(0.0);

        let value = match self.operator.apply(acc, operand) {
            Ok(value) => value,
            Err(fault) => {
                effects.push(Effect::Fault(fault));
                acc
            }
        };

        effects.push(Effect::Calculated(true));
        self.record(value, operand, self.operator, effects);
    }

    fn record(&mut self, value: f64, operand: f64, operator: Operator, effects: &mut Vec<Effect>) {
        self.result = Some(value);
        self.history = self
            .history
            .record(HistoryEntry::now(operand, operator, value));

        effects.push(Effect::Result(value));
        effects.push(Effect::Process(Some(ProcessLine::committed(
            operator, operand,
        ))));
    }

    fn reset(&mut self, effects: &mut Vec<Effect>) {
        self.result = None;
        self.pending.clear();
        self.history = History::new();

        effects.push(Effect::Result(0.0));
        effects.push(Effect::Process(None));
    }
}

fn entry_line(entry: &HistoryEntry) -> ProcessLine {
    ProcessLine::committed(entry.operator, entry.operand)
}
