//! A calculator wired to a surface.

use crate::config::Settings;
use crate::core::{Effect, InputError, Tally};
use crate::shell::command::{Command, CommandError};
use crate::shell::surface::Surface;
use thiserror::Error;

/// Errors that can occur while dispatching user gestures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Calculator session: forwards gestures into a [`Tally`] and carries the
/// resulting effects out to a [`Surface`].
///
/// # Example
///
/// ```rust
/// use tally::config::Settings;
/// use tally::shell::{RecordingSurface, Session};
///
/// let mut session = Session::new(&Settings::default(), RecordingSurface::new());
/// session.run_line("4 * 5").unwrap();
///
/// assert_eq!(session.tally().result(), Some(20.0));
/// assert_eq!(session.surface().process_text().as_deref(), Some("*5"));
/// ```
pub struct Session<S: Surface> {
    tally: Tally,
    surface: S,
    dispatched: usize,
}

impl<S: Surface> Session<S> {
    /// Start a session and paint the initial display.
    pub fn new(settings: &Settings, surface: S) -> Self {
        let mut session = Self {
            tally: settings.tally(),
            surface,
            dispatched: 0,
        };
        let effects = session.tally.render();
        session.apply(&effects);
        session
    }

    /// Forward one gesture into the calculator.
    ///
    /// Rejected input leaves both the calculator and the surface untouched.
    pub fn dispatch(&mut self, command: Command) -> Result<(), SessionError> {
        tracing::debug!(%command, mode = self.tally.mode().name(), "dispatch");

        let effects = match command {
            Command::Digit(digit) => self.tally.input_digit(digit)?,
            Command::Operator(operator) => self.tally.set_operator(operator),
            Command::DigitCount(count) => self.tally.set_digit_count(count)?,
            Command::Shift(held) => self.tally.set_shift(held),
            Command::ToggleShift => self.tally.toggle_shift(),
            Command::Undo => self.tally.undo(),
            Command::Clear => self.tally.clear(),
            Command::SetResult(value) => self.tally.change_result(value)?,
        };

        self.dispatched += 1;
        self.apply(&effects);

        tracing::trace!(
            result = ?self.tally.result(),
            pending = self.tally.pending(),
            history = self.tally.history().len(),
            "dispatched"
        );
        Ok(())
    }

    /// Parse a line of commands and dispatch them in order.
    ///
    /// Stops at the first rejected command; commands before it stay applied.
    /// Returns the number of commands dispatched.
    pub fn run_line(&mut self, line: &str) -> Result<usize, SessionError> {
        let commands = Command::parse_line(line)?;
        for command in &commands {
            self.dispatch(*command)?;
        }
        Ok(commands.len())
    }

    /// Repaint the whole surface from the current state.
    pub fn repaint(&mut self) {
        let effects = self.tally.render();
        self.apply(&effects);
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of commands accepted so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            if let Effect::Fault(fault) = effect {
                tracing::warn!(
                    %fault,
                    operator = %self.tally.operator(),
                    "arithmetic step refused, result unchanged"
                );
            }
            effect.apply(&mut self.surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsBuilder;
    use crate::core::{ArithmeticError, Operator};
    use crate::shell::surface::RecordingSurface;

    fn session() -> Session<RecordingSurface> {
        Session::new(&Settings::default(), RecordingSurface::new())
    }

    #[test]
    fn new_session_paints_initial_state() {
        let session = session();
        let surface = session.surface();

        assert_eq!(surface.result(), Some(0.0));
        assert_eq!(surface.process_text().as_deref(), Some("#"));
        assert_eq!(surface.erased_text().as_deref(), Some(""));
        assert_eq!(session.dispatched(), 0);
    }

    #[test]
    fn dispatch_routes_effects_to_surface() {
        let mut session = session();
        session.surface_mut().take();

        session.dispatch(Command::Digit('7')).unwrap();

        assert_eq!(session.surface().result(), Some(7.0));
        assert_eq!(session.surface().process_text().as_deref(), Some("+7"));
        assert_eq!(session.dispatched(), 1);
    }

    #[test]
    fn rejected_input_leaves_surface_untouched() {
        let mut session = session();
        session.surface_mut().take();

        let err = session.dispatch(Command::DigitCount(0)).unwrap_err();

        assert_eq!(err, SessionError::Input(InputError::ZeroDigitCount));
        assert!(session.surface().effects().is_empty());
        assert_eq!(session.dispatched(), 0);
    }

    #[test]
    fn run_line_stops_at_first_error() {
        let mut session = session();
        let err = session.run_line("5 digits=0 3").unwrap_err();

        assert_eq!(err, SessionError::Input(InputError::ZeroDigitCount));
        assert_eq!(session.tally().result(), Some(5.0));
        assert_eq!(session.dispatched(), 1);
    }

    #[test]
    fn run_line_rejects_unparseable_line_without_applying() {
        let mut session = session();
        let err = session.run_line("5 nope").unwrap_err();

        assert!(matches!(err, SessionError::Command(CommandError::Unknown(_))));
        assert_eq!(session.tally().result(), None);
    }

    #[test]
    fn faults_reach_the_surface() {
        let mut session = session();
        session.run_line("6 / 0").unwrap();

        assert!(session
            .surface()
            .effects()
            .contains(&crate::core::Effect::Fault(ArithmeticError::DivisionByZero)));
        assert_eq!(session.tally().result(), Some(6.0));
    }

    #[test]
    fn settings_shape_the_session() {
        let settings = SettingsBuilder::new()
            .operator("*")
            .digit_count(2)
            .build()
            .unwrap();
        let mut session = Session::new(&settings, RecordingSurface::new());

        session.run_line("1 2").unwrap();

        assert_eq!(session.tally().operator(), Operator::Multiply);
        assert_eq!(session.tally().result(), Some(12.0));
    }

    #[test]
    fn repaint_restores_full_display() {
        let mut session = session();
        session.run_line("9").unwrap();
        session.surface_mut().take();

        session.repaint();

        assert_eq!(session.surface().result(), Some(9.0));
        assert_eq!(session.surface().process_text().as_deref(), Some("+9"));
    }
}
