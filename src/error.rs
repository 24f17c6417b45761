//! Input validation errors shared by the generator and the analyzer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password length must be between {min} and {max} characters, got {length}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("Password cannot be empty")]
    EmptyInput,
}
