//! Output format selection

use std::fmt;

/// The fixed set of formats offered in the format dropdown
///
/// Input files are accepted with the same set of extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Mp3,
    Wav,
    Ogg,
    Aac,
    Aiff,
    M4a,
}

impl OutputFormat {
    /// Dropdown order
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Mp3,
        OutputFormat::Wav,
        OutputFormat::Ogg,
        OutputFormat::Aac,
        OutputFormat::Aiff,
        OutputFormat::M4a,
    ];

    /// Upper-case label shown in the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Wav => "WAV",
            Self::Ogg => "OGG",
            Self::Aac => "AAC",
            Self::Aiff => "AIFF",
            Self::M4a => "M4A",
        }
    }

    /// Lower-case token used as the output file extension
    ///
    /// ffmpeg picks the encoder from this extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::Aac => "aac",
            Self::Aiff => "aiff",
            Self::M4a => "m4a",
        }
    }

    /// Parse a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
