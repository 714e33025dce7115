//! The TTS form as the rendering layer submits it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::language::{RefLanguage, TargetLanguage};

/// Placeholder shown in the reference text area. Left untouched, it is passed to
/// the engine verbatim.
pub const DEFAULT_REFERENCE_TEXT: &str =
    "Please enter the reference text, or leave blank to use the default.";

/// Placeholder shown in the target text area.
pub const DEFAULT_TARGET_TEXT: &str = "Please enter the text content to generate speech";

/// Container formats the uploader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Flac,
    Mp3,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 3] = [AudioFormat::Wav, AudioFormat::Flac, AudioFormat::Mp3];

    /// Canonical lowercase file extension.
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
            AudioFormat::Mp3 => "mp3",
        }
    }

    /// Recognize a format from a file name's extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<AudioFormat> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        AudioFormat::ALL
            .into_iter()
            .find(|format| format.extension() == ext)
    }
}

/// An uploaded reference clip: the browser-side file name plus its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    /// The recognized container format, if any.
    pub fn format(&self) -> Option<AudioFormat> {
        AudioFormat::from_file_name(&self.file_name)
    }

    /// The raw extension of the uploaded file name, as given.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name).extension()?.to_str()
    }
}

/// Everything the user can set on the TTS tab.
///
/// `Default` matches the freshly rendered page: no upload, placeholder text in
/// both areas, first dropdown option selected in both selects.
#[derive(Debug, Clone, PartialEq)]
pub struct TtsForm {
    pub uploaded_audio: Option<AudioUpload>,
    pub reference_text: String,
    pub target_text: String,
    pub reference_language: RefLanguage,
    pub target_language: TargetLanguage,
}

impl Default for TtsForm {
    fn default() -> Self {
        Self {
            uploaded_audio: None,
            reference_text: DEFAULT_REFERENCE_TEXT.to_string(),
            target_text: DEFAULT_TARGET_TEXT.to_string(),
            reference_language: RefLanguage::default(),
            target_language: TargetLanguage::default(),
        }
    }
}
