//! Display effects emitted by the calculator.
//!
//! The core never talks to a display directly. Each entry point returns the
//! effects it implies, in order, and the shell routes them to a surface.

use super::operator::{ArithmeticError, Operator};
use std::fmt;

/// One line of the process display: an operator followed by operand text.
///
/// The operand is text rather than a number so that pending input shows
/// exactly what was typed (`+007`) while committed operands show the parsed
/// value (`+7`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessLine {
    pub operator: Operator,
    pub operand: String,
}

impl ProcessLine {
    pub fn new(operator: Operator, operand: impl Into<String>) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }

    /// Line for a committed numeric operand.
    pub fn committed(operator: Operator, operand: f64) -> Self {
        Self::new(operator, format_number(operand))
    }
}

impl fmt::Display for ProcessLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}

/// A side effect requested from the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Show the running result.
    Result(f64),
    /// Show the process line, or the `#` placeholder when `None`.
    Process(Option<ProcessLine>),
    /// Show `(erased: ...)` for the given line, or blank it.
    Erased(Option<ProcessLine>),
    /// Shift indicator on or off.
    Shift(bool),
    /// Flash the calculated highlight on, or clear it.
    Calculated(bool),
    /// An arithmetic step was refused.
    Fault(ArithmeticError),
}

/// Format a number the way the result and process displays show it.
///
/// Integral values drop the fractional part, negative zero shows as `0`, and
/// non-finite values spell out `NaN` / `Infinity`. Magnitudes of `1e21` and
/// above, or below `1e-6`, switch to exponent form with a signed exponent.
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e300), "1e+300");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Parse the text [`format_number`] writes for non-finite values.
pub(crate) fn parse_non_finite(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_line_renders_operator_then_operand() {
        assert_eq!(ProcessLine::new(Operator::Add, "12").to_string(), "+12");
        assert_eq!(ProcessLine::new(Operator::Power, "3").to_string(), "**3");
        assert_eq!(ProcessLine::new(Operator::Subtract, "").to_string(), "-");
    }

    #[test]
    fn committed_line_uses_parsed_value() {
        assert_eq!(ProcessLine::committed(Operator::Add, 7.0).to_string(), "+7");
        assert_eq!(
            ProcessLine::committed(Operator::Divide, 2.5).to_string(),
            "/2.5"
        );
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_number_uses_exponent_for_extreme_magnitudes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e25), "-1.5e+25");
        assert_eq!(format_number(5e-324), "5e-324");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn non_finite_text_parses_back() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_non_finite(&format_number(value)), Some(value));
        }
        assert!(parse_non_finite("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_non_finite("12"), None);
    }

    #[test]
    fn format_number_spells_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
