//! Error taxonomy for validation and conversion
//!
//! Every variant is caught at the user action that triggered it and
//! rendered as a modal dialog; none of them are fatal.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConverterError {
    /// Candidate input is missing or not a regular file
    #[error("File does not exist.")]
    FileNotFound(PathBuf),

    /// Candidate input has an extension outside the allow-list
    #[error("Unsupported file type.")]
    UnsupportedFormat(PathBuf),

    /// Convert was pressed before any input was accepted
    #[error("No input file selected.")]
    NoInputSelected,

    /// Encoder exited with a non-zero status
    #[error("Conversion failed. Error: {stderr}")]
    ConversionFailed { status: ExitStatus, stderr: String },

    /// Encoder could not be launched or communicated with
    #[error("Error during conversion: {0}")]
    ConversionError(String),

    /// User cancelled the running encoder
    #[error("Conversion cancelled.")]
    Cancelled,
}

impl ConverterError {
    /// Dialog title for this error
    pub fn title(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) | Self::UnsupportedFormat(_) | Self::NoInputSelected => "Error",
            Self::ConversionFailed { .. } | Self::ConversionError(_) => "Conversion Error",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl From<std::io::Error> for ConverterError {
    fn from(e: std::io::Error) -> Self {
        Self::ConversionError(e.to_string())
    }
}
