//! Session operations for ConverterView
//!
//! Input selection (drop or file dialog), output directory, format and clear.

use std::path::{Path, PathBuf};

use gpui::{AsyncApp, Context, PathPromptOptions, WeakEntity};

use crate::audio::{describe_file, validate_input, warn_on_extension_mismatch};
use crate::core::{ConverterError, OutputFormat};

use super::ConverterView;

impl ConverterView {
    /// Validate and adopt a new input file
    ///
    /// On rejection an error dialog is queued and the session is unchanged.
    /// Ignored while converting.
    pub fn accept_input(&mut self, path: &Path) -> bool {
        if self.display.status.is_converting() {
            log::debug!("Input change ignored while converting");
            return false;
        }

        if let Err(e) = validate_input(path) {
            self.queue_error(&e);
            return false;
        }

        log::info!("Selected input: {}", path.display());
        warn_on_extension_mismatch(path);
        self.session.set_input(path.to_path_buf());
        self.display.info_text = describe_file(path);
        true
    }

    /// Handle files dropped on the window (only the first one is used)
    pub fn accept_dropped_paths(&mut self, paths: &[PathBuf]) -> bool {
        match paths.first() {
            Some(path) => self.accept_input(path),
            None => false,
        }
    }

    pub fn set_output_directory(&mut self, dir: PathBuf) {
        log::info!("Output directory: {}", dir.display());
        self.session.output_directory = dir;
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        log::debug!("Output format: {}", format);
        self.session.output_format = format;
        self.format_menu_open = false;
    }

    pub fn toggle_format_menu(&mut self) {
        self.format_menu_open = !self.format_menu_open;
    }

    /// Reset the input file, info text and progress
    ///
    /// The output directory and format are kept. Ignored while converting.
    pub fn clear(&mut self) -> bool {
        if self.display.status.is_converting() {
            log::debug!("Clear ignored while converting");
            return false;
        }

        self.session.clear_input();
        self.display.reset();
        self.format_menu_open = false;
        true
    }

    /// Queue an error dialog for the next render
    pub(crate) fn queue_error(&mut self, error: &ConverterError) {
        log::warn!("{}", error);
        self.pending_error_message = Some((error.title().to_string(), error.to_string()));
    }

    /// Show the open-file dialog and adopt the chosen file
    pub fn prompt_for_input_file(&mut self, cx: &mut Context<Self>) {
        if self.display.status.is_converting() {
            return;
        }

        let options = PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        };
        let receiver = cx.prompt_for_paths(options);
        cx.spawn(|this_handle: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                if let Ok(Ok(Some(paths))) = receiver.await {
                    let _ = this_handle.update(&mut async_cx, |this, cx| {
                        this.accept_dropped_paths(&paths);
                        cx.notify();
                    });
                }
            }
        })
        .detach();
    }

    /// Show the directory dialog and adopt the chosen directory
    pub fn prompt_for_output_directory(&mut self, cx: &mut Context<Self>) {
        let options = PathPromptOptions {
            files: false,
            directories: true,
            multiple: false,
            prompt: None,
        };
        let receiver = cx.prompt_for_paths(options);
        cx.spawn(|this_handle: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                if let Ok(Ok(Some(paths))) = receiver.await
                    && let Some(dir) = paths.into_iter().next()
                {
                    let _ = this_handle.update(&mut async_cx, |this, cx| {
                        this.set_output_directory(dir);
                        cx.notify();
                    });
                }
            }
        })
        .detach();
    }
}
