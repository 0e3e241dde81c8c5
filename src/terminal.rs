use tally::core::{format_number, ArithmeticError, ProcessLine};
use tally::Surface;

/// Line-oriented surface: keeps the latest value of each display and prints
/// them as one status line.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    result: f64,
    process: Option<String>,
    erased: Option<String>,
    shift: bool,
    calculated: bool,
    faults: Vec<ArithmeticError>,
}

impl TerminalSurface {
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "{:>12}  {:<10}",
            format_number(self.result),
            self.process.as_deref().unwrap_or("#")
        );
        if let Some(erased) = &self.erased {
            line.push_str(&format!("  (erased: {erased})"));
        }
        if self.shift {
            line.push_str("  [shift]");
        }
        if self.calculated {
            line.push_str("  =");
        }
        line
    }

    /// Faults reported since the last call.
    pub fn take_faults(&mut self) -> Vec<ArithmeticError> {
        std::mem::take(&mut self.faults)
    }
}

impl Surface for TerminalSurface {
    fn show_result(&mut self, value: f64) {
        self.result = value;
    }

    fn show_process(&mut self, line: Option<&ProcessLine>) {
        self.process = line.map(ToString::to_string);
    }

    fn show_erased(&mut self, line: Option<&ProcessLine>) {
        self.erased = line.map(ToString::to_string);
    }

    fn show_shift(&mut self, held: bool) {
        self.shift = held;
    }

    fn flash_calculated(&mut self, on: bool) {
        self.calculated = on;
    }

    fn report_fault(&mut self, fault: &ArithmeticError) {
        self.faults.push(*fault);
    }
}
