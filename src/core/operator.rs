//! Accumulating operators.
//!
//! Every operator folds one operand into the running result. Operators are
//! pure values: applying one never touches calculator state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the six operators a running total can be accumulated with.
///
/// Serialized as its symbol, so a history entry reads `"operator": "**"`.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// let op: Operator = "**".parse().unwrap();
/// assert_eq!(op, Operator::Power);
/// assert_eq!(op.apply(2.0, 10.0).unwrap(), 1024.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
    #[serde(rename = "**")]
    Power,
}

/// Failure to interpret text as an operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unknown operator '{0}', expected one of + - * / % **")]
    Unknown(String),
}

/// Arithmetic step that was refused. The accumulator keeps its old value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Remainder,
        Operator::Power,
    ];

    /// Text form of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Power => "**",
        }
    }

    /// Starting accumulator when no result exists yet.
    ///
    /// Additive operators start from `0`, the rest from `1`, so that the
    /// first operand entered becomes the result for `+` and `*` alike.
    pub fn seed(&self) -> f64 {
        match self {
            Self::Add | Self::Subtract => 0.0,
            Self::Multiply | Self::Divide | Self::Remainder | Self::Power => 1.0,
        }
    }

    /// Fold `operand` into `acc`.
    ///
    /// A zero divisor is refused rather than producing an infinity or NaN.
    /// Remainder truncates, taking the sign of the dividend.
    pub fn apply(&self, acc: f64, operand: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(acc + operand),
            Self::Subtract => Ok(acc - operand),
            Self::Multiply => Ok(acc * operand),
            Self::Divide if operand == 0.0 => Err(ArithmeticError::DivisionByZero),
            Self::Divide => Ok(acc / operand),
            Self::Remainder if operand == 0.0 => Err(ArithmeticError::ModuloByZero),
            Self::Remainder => Ok(acc % operand),
            Self::Power => Ok(acc.powf(operand)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| OperatorError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back_to_operators() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(
            "^".parse::<Operator>(),
            Err(OperatorError::Unknown("^".to_string()))
        );
        assert!("".parse::<Operator>().is_err());
        assert!("***".parse::<Operator>().is_err());
    }

    #[test]
    fn seed_depends_on_operator_family() {
        assert_eq!(Operator::Add.seed(), 0.0);
        assert_eq!(Operator::Subtract.seed(), 0.0);
        assert_eq!(Operator::Multiply.seed(), 1.0);
        assert_eq!(Operator::Divide.seed(), 1.0);
        assert_eq!(Operator::Remainder.seed(), 1.0);
        assert_eq!(Operator::Power.seed(), 1.0);
    }

    #[test]
    fn apply_folds_operand() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(3.0, 4.0), Ok(0.75));
        assert_eq!(Operator::Remainder.apply(10.0, 4.0), Ok(2.0));
        assert_eq!(Operator::Power.apply(3.0, 4.0), Ok(81.0));
    }

    #[test]
    fn remainder_takes_sign_of_dividend() {
        assert_eq!(Operator::Remainder.apply(-7.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Remainder.apply(7.0, -3.0), Ok(1.0));
    }

    #[test]
    fn zero_divisor_is_refused() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operator::Remainder.apply(5.0, 0.0),
            Err(ArithmeticError::ModuloByZero)
        );
    }

    #[test]
    fn operator_serializes_as_symbol() {
        let json = serde_json::to_string(&Operator::Power).unwrap();
        assert_eq!(json, "\"**\"");
        let op: Operator = serde_json::from_str("\"%\"").unwrap();
        assert_eq!(op, Operator::Remainder);
    }

    #[test]
    fn default_operator_is_add() {
        assert_eq!(Operator::default(), Operator::Add);
    }
}
