//! Test fixtures for validation, metadata and conversion tests
//!
//! Audio fixtures are written byte by byte so tests don't depend on a real
//! encoder. Fake encoders are small shell scripts (Unix only).

#![cfg(test)]

use std::path::{Path, PathBuf};

/// Write a silent 16-bit PCM WAV file
///
/// # Arguments
/// * `dir` - Directory to create the file in
/// * `name` - File name including extension
/// * `sample_rate` - Sample rate in Hz
/// * `channels` - Channel count
/// * `duration_secs` - Length in seconds
pub fn write_wav(
    dir: &Path,
    name: &str,
    sample_rate: u32,
    channels: u16,
    duration_secs: u32,
) -> PathBuf {
    let bits_per_sample: u16 = 16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * block_align as u32;
    let data_len = byte_rate * duration_secs;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write WAV fixture");
    path
}

/// Write an executable script that stands in for ffmpeg
///
/// The script receives the same arguments ffmpeg would (`-i <in> -y <out>`).
#[cfg(unix)]
pub fn write_fake_encoder(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).expect("Failed to chmod script");
    path
}

/// Fake encoder that copies the input (`$2`) to the output (`$4`)
#[cfg(unix)]
pub fn copying_encoder(dir: &Path) -> PathBuf {
    write_fake_encoder(dir, "ffmpeg-ok", "cp \"$2\" \"$4\"")
}

/// Fake encoder that prints "boom" to stderr and exits 1
#[cfg(unix)]
pub fn failing_encoder(dir: &Path) -> PathBuf {
    write_fake_encoder(dir, "ffmpeg-fail", "echo boom >&2\nexit 1")
}

/// Fake encoder that never finishes on its own
#[cfg(unix)]
pub fn hanging_encoder(dir: &Path) -> PathBuf {
    write_fake_encoder(dir, "ffmpeg-hang", "exec sleep 30")
}
