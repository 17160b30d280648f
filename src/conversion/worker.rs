//! Background conversion worker
//!
//! The encoder runs on its own thread so the window stays responsive. The
//! UI polls the handle for the single outcome and may cancel, which kills
//! the ffmpeg process.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use tokio::sync::oneshot;

use super::ffmpeg::{ConversionJob, run_ffmpeg};
use crate::core::ConverterError;

/// Outcome of one conversion attempt
pub type ConversionOutcome = Result<PathBuf, ConverterError>;

/// Handle for controlling a running conversion from the UI
pub struct ConversionHandle {
    job: ConversionJob,
    cancel_tx: Option<oneshot::Sender<()>>,
    outcome_rx: mpsc::Receiver<ConversionOutcome>,
}

impl ConversionHandle {
    /// Kill the encoder; the outcome becomes `Cancelled`
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            log::info!("Cancelling conversion of {}", self.job.input_path.display());
            let _ = tx.send(());
        }
    }

    /// Non-blocking check for the outcome
    pub fn try_outcome(&self) -> Option<ConversionOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(ConverterError::ConversionError(
                "conversion worker exited unexpectedly".to_string(),
            ))),
        }
    }

    /// Block until the outcome arrives or the timeout expires
    #[cfg(test)]
    pub fn wait_outcome(&self, timeout: std::time::Duration) -> Option<ConversionOutcome> {
        self.outcome_rx.recv_timeout(timeout).ok()
    }
}

/// Start converting `job` on a background thread
///
/// Dropping the handle without waiting also kills the encoder.
pub fn spawn_conversion(
    ffmpeg_path: PathBuf,
    job: ConversionJob,
) -> Result<ConversionHandle, ConverterError> {
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let worker_job = job.clone();

    thread::Builder::new()
        .name("ffmpeg-worker".to_string())
        .spawn(move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => {
                    let ffmpeg_path = &ffmpeg_path;
                    let worker_job = &worker_job;
                    rt.block_on(async move {
                        tokio::select! {
                            outcome = run_ffmpeg(ffmpeg_path, worker_job) => outcome,
                            _ = cancel_rx => Err(ConverterError::Cancelled),
                        }
                    })
                }
                Err(e) => Err(ConverterError::ConversionError(format!(
                    "Failed to create runtime: {}",
                    e
                ))),
            };

            match &outcome {
                Ok(path) => log::info!("Conversion finished: {}", path.display()),
                Err(e) => log::info!("Conversion ended: {}", e),
            }
            let _ = outcome_tx.send(outcome);
        })?;

    Ok(ConversionHandle {
        job,
        cancel_tx: Some(cancel_tx),
        outcome_rx,
    })
}
