//! Audio module - input validation and metadata reading

pub mod detection;
pub mod metadata;

pub use detection::{validate_input, warn_on_extension_mismatch};
pub use metadata::describe_file;
