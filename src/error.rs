//! The crate-wide error type. Row level problems use `DataRecordParsingError`
//! and never escape a load: blank rows become empty trips and bad cells read as missing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    /// A month, day, filter or yes/no token typed at a prompt that is not one of the valid options.
    #[error("Invalid {kind}: '{input}'")]
    InvalidFilter { kind: &'static str, input: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
