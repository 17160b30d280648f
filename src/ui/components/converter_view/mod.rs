//! ConverterView component - The main application view
//!
//! This is the root view of the application, containing:
//! - Input group: drop area, file picker, metadata info
//! - Output settings group: output directory, format dropdown
//! - Process group: convert/clear buttons, status and progress

mod conversion;
mod render;
mod session;
#[cfg(test)]
mod tests;

use gpui::{Context, FocusHandle};
use std::path::PathBuf;

use crate::conversion::ConversionHandle;
use crate::core::{AppSettings, DisplayState, SessionState};

/// The main converter view
///
/// Owns the session state and the display state derived from it. At most
/// one conversion runs at a time.
pub struct ConverterView {
    /// Input file, output directory and format chosen by the user
    pub(crate) session: SessionState,
    /// Info text, progress and conversion status
    pub(crate) display: DisplayState,
    /// Encoder binary used for conversions
    pub(crate) ffmpeg_path: PathBuf,
    /// Running conversion (None when idle)
    pub(crate) conversion: Option<ConversionHandle>,
    /// Whether the format dropdown is expanded
    pub(crate) format_menu_open: bool,
    /// Whether we've subscribed to appearance changes
    pub(crate) appearance_subscription_set: bool,
    /// Focus handle for receiving actions (None in tests)
    pub(crate) focus_handle: Option<FocusHandle>,
    /// Whether we need to grab initial focus (for menu items to work)
    pub(crate) needs_initial_focus: bool,
    /// Error dialog to show on the next render (title, message)
    pub(crate) pending_error_message: Option<(String, String)>,
}

impl ConverterView {
    pub fn new(settings: &AppSettings, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: Some(cx.focus_handle()),
            needs_initial_focus: true,
            ..Self::with_settings(settings)
        }
    }

    /// Build the view state without a GPUI context
    fn with_settings(settings: &AppSettings) -> Self {
        Self {
            session: SessionState::new(settings.default_output_dir.clone()),
            display: DisplayState::default(),
            ffmpeg_path: settings.ffmpeg_path.clone(),
            conversion: None,
            format_menu_open: false,
            appearance_subscription_set: false,
            focus_handle: None,
            needs_initial_focus: false,
            pending_error_message: None,
        }
    }

    /// Create a new ConverterView for testing (without GPUI context)
    #[cfg(test)]
    pub fn new_for_test(settings: &AppSettings) -> Self {
        Self::with_settings(settings)
    }
}
