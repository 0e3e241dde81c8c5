//! Serializable view of a calculator.

use super::history::History;
use super::mode::Mode;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a [`Tally`](super::Tally) holds.
///
/// Front ends use it for status output. It is not a persistence format:
/// nothing reads a snapshot back into a calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Running result, absent until the first commit
    #[serde(with = "super::number::option")]
    pub result: Option<f64>,
    /// Digits typed but not committed
    pub pending: String,
    /// Operator used by the next commit
    pub operator: Operator,
    /// Batch width
    pub digit_count: usize,
    /// Input mode
    pub mode: Mode,
    /// Applied operations, oldest first
    pub history: History,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tally;

    #[test]
    fn snapshot_serializes_to_json() {
        let mut tally = Tally::new();
        tally.input_digit('3').unwrap();

        let json = serde_json::to_value(tally.snapshot()).unwrap();

        assert_eq!(json["result"], 3.0);
        assert_eq!(json["pending"], "");
        assert_eq!(json["operator"], "+");
        assert_eq!(json["digit_count"], 1);
        assert_eq!(json["mode"], "Immediate");
        assert_eq!(json["history"]["entries"][0]["operand"], 3.0);
    }

    #[test]
    fn overflowing_power_round_trips_through_json() {
        let mut tally = Tally::new();
        tally.input_digit('9').unwrap();
        tally.set_operator(Operator::Power);
        for digit in "999".chars() {
            tally.input_digit(digit).unwrap();
        }
        assert_eq!(tally.result(), Some(f64::INFINITY));

        let snapshot = tally.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"], "Infinity");
        assert_eq!(value["history"]["entries"][3]["result"], "Infinity");
        assert_eq!(value["history"]["entries"][3]["operand"], 9.0);

        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn nan_result_is_not_confused_with_absent_result() {
        let mut tally = Tally::new();
        tally.change_result(1e308).unwrap();
        tally.set_operator(Operator::Multiply);
        tally.input_digit('9').unwrap();
        tally.input_digit('0').unwrap();
        assert!(tally.result().is_some_and(f64::is_nan));

        let json = serde_json::to_value(tally.snapshot()).unwrap();
        assert_eq!(json["result"], "NaN");

        let restored: Snapshot = serde_json::from_value(json).unwrap();
        assert!(restored.result.is_some_and(f64::is_nan));
    }

    #[test]
    fn empty_snapshot_has_null_result() {
        let json = serde_json::to_value(Tally::new().snapshot()).unwrap();
        assert!(json["result"].is_null());
    }
}
