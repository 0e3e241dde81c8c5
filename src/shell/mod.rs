//! The imperative shell around the pure calculator core.
//!
//! The core computes state changes and describes display updates as
//! [`Effect`](crate::core::Effect) values. This module performs them:
//!
//! - **Surface**: the presentation collaborator that receives display updates
//! - **Command**: the vocabulary of user gestures, with a text parser
//! - **Session**: dispatches commands into the core and drains effects
//!   onto a surface, logging along the way

mod command;
mod session;
mod surface;

pub use command::{Command, CommandError};
pub use session::{Session, SessionError};
pub use surface::{RecordingSurface, Surface};
