//! Error types for showroom

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed while a prompt was pending")]
    InputClosed,

    #[error("Invalid value for {label}: {value}")]
    InvalidField { label: &'static str, value: String },

    #[error("Expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
