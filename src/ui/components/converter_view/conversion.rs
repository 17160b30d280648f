//! Conversion operations for ConverterView
//!
//! Starting, cancelling and polling the background encoder.

use std::time::Duration;

use gpui::{AsyncApp, Context, Timer, WeakEntity};

use crate::conversion::{ConversionJob, ConversionOutcome, spawn_conversion};
use crate::core::{ConversionStatus, ConverterError};

use super::ConverterView;

/// Interval between checks for the encoder outcome
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl ConverterView {
    /// Move to Converting and build the job for the current session
    ///
    /// Returns None (after queueing an error if appropriate) when no
    /// conversion can start.
    pub fn begin_conversion(&mut self) -> Option<ConversionJob> {
        if !self.display.status.can_start() {
            log::debug!("Conversion already in progress");
            return None;
        }

        let Some(input) = self.session.input_file() else {
            self.queue_error(&ConverterError::NoInputSelected);
            return None;
        };

        let job = ConversionJob::new(
            input,
            &self.session.output_directory,
            self.session.output_format,
        );

        self.display.set_progress(0);
        self.display.status = ConversionStatus::Converting;
        self.format_menu_open = false;
        Some(job)
    }

    /// Record the outcome of a conversion attempt
    pub fn apply_outcome(&mut self, outcome: ConversionOutcome) {
        self.conversion = None;
        match outcome {
            Ok(path) => {
                log::info!("Wrote {}", path.display());
                self.display.set_progress(100);
                self.display.status = ConversionStatus::Succeeded;
            }
            Err(ConverterError::Cancelled) => {
                self.display.set_progress(0);
                self.display.status = ConversionStatus::Cancelled;
            }
            Err(e) => {
                self.display.status = ConversionStatus::Failed;
                self.queue_error(&e);
            }
        }
    }

    /// Start converting the selected file in the background
    pub fn start_conversion(&mut self, cx: &mut Context<Self>) {
        let Some(job) = self.begin_conversion() else {
            cx.notify();
            return;
        };

        match spawn_conversion(self.ffmpeg_path.clone(), job) {
            Ok(handle) => {
                self.conversion = Some(handle);
                Self::start_conversion_polling(cx);
            }
            Err(e) => self.apply_outcome(Err(e)),
        }
        cx.notify();
    }

    /// Kill the running encoder, if any
    pub fn cancel_conversion(&mut self) {
        if let Some(handle) = self.conversion.as_mut() {
            handle.cancel();
        }
    }

    /// Check the running conversion once
    ///
    /// Returns true while the encoder is still running.
    pub fn poll_conversion(&mut self) -> bool {
        let Some(handle) = self.conversion.as_ref() else {
            return false;
        };

        match handle.try_outcome() {
            Some(outcome) => {
                self.apply_outcome(outcome);
                false
            }
            None => true,
        }
    }

    /// Poll the encoder until it finishes, then re-render
    fn start_conversion_polling(cx: &mut Context<Self>) {
        cx.spawn(|this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                loop {
                    Timer::after(POLL_INTERVAL).await;

                    let still_running = this.update(&mut async_cx, |view, cx| {
                        let running = view.poll_conversion();
                        if !running {
                            cx.notify();
                        }
                        running
                    });

                    // Stop when finished or when the view is gone
                    if !matches!(still_running, Ok(true)) {
                        break;
                    }
                }
            }
        })
        .detach();
    }
}
