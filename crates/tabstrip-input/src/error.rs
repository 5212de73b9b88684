//! Input error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty key chord")]
    EmptyChord,

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("Invalid key chord: {0}")]
    InvalidChord(String),
}
