//! FFmpeg subprocess handling for audio conversion

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use tokio::process::Command;

use crate::core::{ConverterError, OutputFormat};

/// Suffix appended to the input file stem
const OUTPUT_SUFFIX: &str = "_AV_Converted";

/// A single file to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Validated input file
    pub input_path: PathBuf,
    /// File the encoder writes
    pub output_path: PathBuf,
}

impl ConversionJob {
    pub fn new(input_path: &Path, output_dir: &Path, format: OutputFormat) -> Self {
        Self {
            input_path: input_path.to_path_buf(),
            output_path: output_path_for(input_path, output_dir, format),
        }
    }
}

/// Compute `<output_dir>/<input stem>_AV_Converted.<format>`
pub fn output_path_for(input_path: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let file_stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{}{}.{}", file_stem, OUTPUT_SUFFIX, format.extension()))
}

/// Build ffmpeg arguments
///
/// -i <input> : Input file
/// -y         : Overwrite output file without asking
/// <output>   : ffmpeg picks the encoder from the output extension
pub fn build_ffmpeg_args(input_path: &Path, output_path: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-i"),
        input_path.as_os_str().to_os_string(),
        OsString::from("-y"),
        output_path.as_os_str().to_os_string(),
    ]
}

/// Run ffmpeg to completion for one job
///
/// stdout and stderr are captured. Dropping the returned future kills the
/// encoder. No partial-output cleanup happens on failure.
pub async fn run_ffmpeg(ffmpeg_path: &Path, job: &ConversionJob) -> Result<PathBuf, ConverterError> {
    log::info!(
        "Converting: {} -> {}",
        job.input_path.display(),
        job.output_path.display()
    );

    let child = Command::new(ffmpeg_path)
        .args(build_ffmpeg_args(&job.input_path, &job.output_path))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            log::error!("Failed to spawn {}: {}", ffmpeg_path.display(), e);
            ConverterError::ConversionError(format!("Failed to spawn ffmpeg: {}", e))
        })?;

    if let Some(pid) = child.id() {
        log::debug!("ffmpeg running with pid {}", pid);
    }

    let output = child.wait_with_output().await?;
    outcome_from_output(job, output)
}

/// Map the encoder's exit status to a conversion result
fn outcome_from_output(job: &ConversionJob, output: Output) -> Result<PathBuf, ConverterError> {
    if output.status.success() {
        log::info!("Successfully converted: {}", job.input_path.display());
        return Ok(job.output_path.clone());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    log::warn!(
        "ffmpeg exited with {}: {}",
        output.status,
        stderr.lines().last().unwrap_or("no output")
    );
    Err(ConverterError::ConversionFailed {
        status: output.status,
        stderr,
    })
}
