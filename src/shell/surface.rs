//! The presentation collaborator the calculator notifies.

use crate::core::{ArithmeticError, Effect, ProcessLine};

/// Something that can show calculator output.
///
/// Implementations own all presentation concerns: element lookup, styling,
/// highlight timing. The calculator only says what changed.
pub trait Surface {
    /// Show the running result.
    fn show_result(&mut self, value: f64);

    /// Show the process line, or the `#` placeholder when `None`.
    fn show_process(&mut self, line: Option<&ProcessLine>);

    /// Show `(erased: ...)` for the line, or blank the erased area.
    fn show_erased(&mut self, line: Option<&ProcessLine>);

    /// Turn the shift indicator on or off.
    fn show_shift(&mut self, held: bool);

    /// Flash the calculated highlight on, or clear it.
    fn flash_calculated(&mut self, on: bool);

    /// An arithmetic step was refused. Ignored by default.
    fn report_fault(&mut self, _fault: &ArithmeticError) {}
}

impl Effect {
    /// Route this effect to the matching surface call.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Effect::Result(value) => surface.show_result(*value),
            Effect::Process(line) => surface.show_process(line.as_ref()),
            Effect::Erased(line) => surface.show_erased(line.as_ref()),
            Effect::Shift(held) => surface.show_shift(*held),
            Effect::Calculated(on) => surface.flash_calculated(*on),
            Effect::Fault(fault) => surface.report_fault(fault),
        }
    }
}

/// Surface that remembers every effect it was given, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    effects: Vec<Effect>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Forget everything recorded so far, returning it.
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Last result shown, if any.
    pub fn result(&self) -> Option<f64> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::Result(value) => Some(*value),
            _ => None,
        })
    }

    /// Text currently on the process display.
    pub fn process_text(&self) -> Option<String> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::Process(Some(line)) => Some(line.to_string()),
            Effect::Process(None) => Some("#".to_string()),
            _ => None,
        })
    }

    /// Text currently on the erased display.
    pub fn erased_text(&self) -> Option<String> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::Erased(Some(line)) => Some(format!("(erased: {line})")),
            Effect::Erased(None) => Some(String::new()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn show_result(&mut self, value: f64) {
        self.effects.push(Effect::Result(value));
    }

    fn show_process(&mut self, line: Option<&ProcessLine>) {
        self.effects.push(Effect::Process(line.cloned()));
    }

    fn show_erased(&mut self, line: Option<&ProcessLine>) {
        self.effects.push(Effect::Erased(line.cloned()));
    }

    fn show_shift(&mut self, held: bool) {
        self.effects.push(Effect::Shift(held));
    }

    fn flash_calculated(&mut self, on: bool) {
        self.effects.push(Effect::Calculated(on));
    }

    fn report_fault(&mut self, fault: &ArithmeticError) {
        self.effects.push(Effect::Fault(*fault));
    }
}
