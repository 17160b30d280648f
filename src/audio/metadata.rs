//! Audio property extraction using Lofty

use std::path::Path;

use lofty::{AudioFile, Probe};

/// Shown when the tagging library can't parse the file
pub const UNREADABLE_TEXT: &str = "Could not read audio properties.";

/// Shown for properties the container doesn't expose
const NOT_AVAILABLE: &str = "N/A";

/// Audio properties of a parsed file
#[derive(Debug, Clone, PartialEq)]
pub struct AudioProperties {
    /// Length in seconds
    pub length_secs: f64,
    /// Audio bitrate in bits per second
    pub bitrate_bps: Option<u32>,
    /// Sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Channel count
    pub channels: Option<u8>,
}

impl AudioProperties {
    /// Bitrate in kbps, or 0 if the container doesn't report one
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_bps.map(|bps| bps / 1000).unwrap_or(0)
    }
}

/// Read audio properties, or None if the file can't be parsed
///
/// The file type is sniffed from the content, so a file whose extension
/// disagrees with its container is still read.
pub fn read_audio_properties(path: &Path) -> Option<AudioProperties> {
    let probed = Probe::open(path).and_then(|probe| Ok(probe.guess_file_type()?));
    let tagged_file = match probed.and_then(|probe| probe.read()) {
        Ok(file) => file,
        Err(e) => {
            log::info!("Could not read properties of {}: {}", path.display(), e);
            return None;
        }
    };

    let props = tagged_file.properties();
    Some(AudioProperties {
        length_secs: props.duration().as_secs_f64(),
        // Lofty reports kbps
        bitrate_bps: props.audio_bitrate().map(|kbps| kbps * 1000),
        sample_rate: props.sample_rate(),
        channels: props.channels(),
    })
}

/// Format label derived from the path's extension, upper-cased
///
/// This trusts the extension, not the decoded container.
pub fn format_label(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Build the info line shown under the drop area
pub fn format_description(path: &Path, props: &AudioProperties) -> String {
    let sample_rate = props
        .sample_rate
        .map(|sr| sr.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let channels = props
        .channels
        .map(|ch| ch.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "Duration: {:.2} seconds, Format: {}, Bitrate: {} kbps, Sample Rate: {} Hz, Bit Depth: {}, Channels: {}",
        props.length_secs,
        format_label(path),
        props.bitrate_kbps(),
        sample_rate,
        NOT_AVAILABLE,
        channels,
    )
}

/// Describe a validated input file for display
pub fn describe_file(path: &Path) -> String {
    match read_audio_properties(path) {
        Some(props) => format_description(path, &props),
        None => UNREADABLE_TEXT.to_string(),
    }
}
