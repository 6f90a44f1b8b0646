//! Errors raised by the notation parsers and structural operations.

use derive_more::{Display, Error};

// -------------------------------------------------------------------------------------------------

/// Error type for all fallible operations in this crate.
///
/// Semitone and octave range violations are never errors: they get wrapped or clamped.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    #[display("Invalid note string '{input}': {reason}")]
    InvalidNote { input: String, reason: String },
    #[display("Invalid scale string '{input}': {reason}")]
    InvalidScale { input: String, reason: String },
    #[display("Invalid chord string '{input}': {reason}")]
    InvalidChord { input: String, reason: String },
    #[display("Unknown template name '{name}'")]
    UnknownTemplate { name: String },
    #[display("Templates can not be empty")]
    EmptyTemplate,
    #[display("Operation needs at least {expected} template entries, got {actual}")]
    TooFewEntries { expected: usize, actual: usize },
}

/// Result alias with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
