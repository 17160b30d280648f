//! Core application types
//!
//! This module contains:
//! - The error taxonomy shared by validation and conversion
//! - The fixed set of output formats
//! - Session, display and conversion state owned by the main window

mod error;
mod format;
mod state;

pub use error::ConverterError;
pub use format::OutputFormat;
pub use state::{AppSettings, ConversionStatus, DisplayState, INFO_PLACEHOLDER, SessionState};
