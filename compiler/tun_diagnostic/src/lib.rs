//! Diagnostic system for the tun toolchain.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Secondary labels and notes (why it's wrong)
//!
//! Stage errors convert into a [`Diagnostic`]; the driver renders them with
//! the [`emitter::TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{unknown_identifier, Diagnostic, Label};
pub use error_code::ErrorCode;
