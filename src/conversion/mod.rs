//! Audio conversion module
//!
//! Handles transcoding a single audio file with ffmpeg.

mod ffmpeg;
mod worker;

pub use ffmpeg::{ConversionJob, build_ffmpeg_args, output_path_for, run_ffmpeg};
pub use worker::{ConversionHandle, ConversionOutcome, spawn_conversion};

use std::path::{Path, PathBuf};

/// File name of the encoder binary
pub const FFMPEG_BINARY: &str = if cfg!(windows) { "ffmpeg.exe" } else { "ffmpeg" };

/// Get the path to the bundled ffmpeg binary
///
/// In development, looks for ffmpeg at CARGO_MANIFEST_DIR/resources/bin/ffmpeg.
/// In release builds, looks in the app bundle and next to the executable.
pub fn get_ffmpeg_path() -> Result<PathBuf, String> {
    // Try CARGO_MANIFEST_DIR first (development mode)
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let dev_path = PathBuf::from(manifest_dir)
            .join("resources")
            .join("bin")
            .join(FFMPEG_BINARY);

        if dev_path.exists() {
            log::debug!("Found ffmpeg at development path: {:?}", dev_path);
            return Ok(dev_path);
        }
    }

    // Try relative to current executable (release mode)
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidates = [
                // macOS app bundle: Contents/MacOS/../Resources/bin/ffmpeg
                exe_dir.join("..").join("Resources").join("bin").join(FFMPEG_BINARY),
                exe_dir.join("resources").join("bin").join(FFMPEG_BINARY),
                // Portable layout: ffmpeg/ folder shipped beside the app
                exe_dir.join("ffmpeg").join(FFMPEG_BINARY),
            ];

            if let Some(found) = candidates.into_iter().find(|p| p.exists()) {
                log::debug!("Found bundled ffmpeg at: {:?}", found);
                return Ok(found);
            }
        }
    }

    Err(format!(
        "ffmpeg binary not found. Expected at resources/bin/{}",
        FFMPEG_BINARY
    ))
}

/// Verify that the bundled ffmpeg exists and is executable
pub fn verify_ffmpeg() -> Result<PathBuf, String> {
    let path = get_ffmpeg_path()?;

    // On Unix, check if executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(&path)
            .map_err(|e| format!("Failed to get ffmpeg metadata: {}", e))?;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(format!("ffmpeg at {:?} is not executable", path));
        }
    }

    log::info!("ffmpeg verified at: {:?}", path);
    Ok(path)
}

/// Output directory a new session starts with
///
/// The user's music folder, falling back to home.
pub fn default_output_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Reveal a directory in the platform file manager
pub fn open_in_file_manager(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("{} does not exist", path.display()));
    }

    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };

    std::process::Command::new(opener)
        .arg(path)
        .spawn()
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    Ok(())
}
