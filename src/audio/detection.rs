//! Input file validation and container sniffing

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::core::{ConverterError, OutputFormat};

/// Check if a file has one of the accepted audio extensions
pub fn is_supported_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| OutputFormat::from_extension(&ext.to_string_lossy()))
        .is_some()
}

/// Validate a candidate input file
///
/// The existence check runs first, so a missing file with a bad extension
/// reports `FileNotFound`.
pub fn validate_input(path: &Path) -> Result<(), ConverterError> {
    if !path.is_file() {
        log::info!("Rejected {}: not an existing file", path.display());
        return Err(ConverterError::FileNotFound(path.to_path_buf()));
    }

    if !is_supported_audio_file(path) {
        log::info!("Rejected {}: unsupported extension", path.display());
        return Err(ConverterError::UnsupportedFormat(path.to_path_buf()));
    }

    Ok(())
}

/// Probe the container and return the codec short name of its default track
///
/// Returns None if symphonia can't identify the stream.
pub fn probe_codec(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .ok()?;

    let track = probed.format.default_track()?;
    let descriptor = symphonia::default::get_codecs().get_codec(track.codec_params.codec)?;
    Some(descriptor.short_name.to_string())
}

/// Whether a decoded codec is what the file extension promises
pub fn codec_matches_extension(codec: &str, format: OutputFormat) -> bool {
    match format {
        OutputFormat::Mp3 => codec == "mp3",
        OutputFormat::Wav | OutputFormat::Aiff => codec.starts_with("pcm"),
        OutputFormat::Ogg => matches!(codec, "vorbis" | "opus" | "flac"),
        OutputFormat::Aac | OutputFormat::M4a => matches!(codec, "aac" | "alac"),
    }
}

/// Log a warning when the container disagrees with the extension
///
/// The displayed format label keeps trusting the extension.
pub fn warn_on_extension_mismatch(path: &Path) {
    let Some(format) = path
        .extension()
        .and_then(|ext| OutputFormat::from_extension(&ext.to_string_lossy()))
    else {
        return;
    };

    match probe_codec(path) {
        Some(codec) if !codec_matches_extension(&codec, format) => {
            log::warn!(
                "{} has a .{} extension but contains {} audio",
                path.display(),
                format.extension(),
                codec
            );
        }
        Some(codec) => log::debug!("{}: codec {}", path.display(), codec),
        None => log::debug!("{}: codec could not be identified", path.display()),
    }
}
