//! Application state types
//!
//! Contains the state owned by the main window:
//! - AppSettings: startup configuration (encoder path, default output directory)
//! - SessionState: the user's current choices
//! - ConversionStatus: lifecycle of a single conversion attempt
//! - DisplayState: text and progress derived from the last read / conversion

use gpui::Global;
use std::path::{Path, PathBuf};

use super::OutputFormat;
use crate::conversion;

/// Placeholder shown in the info area before any file is accepted
pub const INFO_PLACEHOLDER: &str = "Input file information";

/// Application-wide settings
///
/// Resolved once at startup and never written to disk.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Encoder binary used for every conversion
    pub ffmpeg_path: PathBuf,
    /// Output directory a new session starts with
    pub default_output_dir: PathBuf,
}

impl Global for AppSettings {}

impl AppSettings {
    /// Build settings from the environment the app was launched in
    pub fn detect() -> Self {
        let ffmpeg_path = match conversion::verify_ffmpeg() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}; falling back to ffmpeg on PATH", e);
                PathBuf::from(conversion::FFMPEG_BINARY)
            }
        };

        Self {
            ffmpeg_path,
            default_output_dir: conversion::default_output_dir(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from(conversion::FFMPEG_BINARY),
            default_output_dir: conversion::default_output_dir(),
        }
    }
}

/// The user's current choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Validated input file (None until one is accepted)
    input_file: Option<PathBuf>,
    /// Directory converted files are written to
    pub output_directory: PathBuf,
    /// Format selected in the dropdown
    pub output_format: OutputFormat,
}

impl SessionState {
    pub fn new(output_directory: PathBuf) -> Self {
        Self {
            input_file: None,
            output_directory,
            output_format: OutputFormat::default(),
        }
    }

    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    /// Record an input file
    ///
    /// Callers only pass paths that just passed `validate_input`.
    pub fn set_input(&mut self, path: PathBuf) {
        self.input_file = Some(path);
    }

    /// Forget the input file; directory and format are kept
    pub fn clear_input(&mut self) {
        self.input_file = None;
    }
}

/// Lifecycle of a single conversion attempt
///
/// Idle -> Converting -> {Succeeded, Failed, Cancelled}. Terminal states
/// accept a new attempt just like Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Converting,
    Succeeded,
    Failed,
    Cancelled,
}

impl ConversionStatus {
    /// Text for the status label above the progress bar
    pub fn display_text(&self) -> &'static str {
        match self {
            ConversionStatus::Idle => "Progress...",
            ConversionStatus::Converting => "Converting...",
            ConversionStatus::Succeeded => "Conversion completed successfully!",
            ConversionStatus::Failed => "Conversion failed.",
            ConversionStatus::Cancelled => "Conversion cancelled.",
        }
    }

    pub fn is_converting(&self) -> bool {
        *self == ConversionStatus::Converting
    }

    /// Whether a new conversion may start from this state
    pub fn can_start(&self) -> bool {
        !self.is_converting()
    }
}

/// Text and progress shown in the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Metadata description of the input file
    pub info_text: String,
    /// Progress bar value, 0-100
    pub progress: u8,
    /// Outcome of the last conversion attempt
    pub status: ConversionStatus,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            info_text: INFO_PLACEHOLDER.to_string(),
            progress: 0,
            status: ConversionStatus::Idle,
        }
    }
}

impl DisplayState {
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// Reset to the initial placeholder text and zero progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
