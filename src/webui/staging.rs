//! Per-request temp-file staging.
//!
//! The engine consumes file paths, so each submit writes the uploaded bytes and
//! both text fields to fresh temporary files and creates a temporary output
//! directory. All four are persisted rather than deleted on drop; cleanup is left
//! to the host OS's temp-file handling.

use std::io::{self, Write};
use std::path::PathBuf;

use super::form::AudioUpload;

/// The staged scratch paths for one synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedRequest {
    /// The uploaded clip, suffix preserved from the original file name.
    pub reference_audio: PathBuf,
    /// UTF-8 reference text.
    pub reference_text: PathBuf,
    /// UTF-8 target text.
    pub target_text: PathBuf,
    /// Empty directory for the generated `output.wav`.
    pub output_dir: PathBuf,
}

impl StagedRequest {
    /// Write the form inputs out to temporary files.
    pub fn stage(
        upload: &AudioUpload,
        reference_text: &str,
        target_text: &str,
    ) -> io::Result<StagedRequest> {
        let audio_suffix = match upload.extension() {
            Some(ext) => format!(".{ext}"),
            None => String::new(),
        };

        let staged = StagedRequest {
            reference_audio: persist_temp_file(&upload.bytes, &audio_suffix)?,
            reference_text: persist_temp_file(reference_text.as_bytes(), ".txt")?,
            target_text: persist_temp_file(target_text.as_bytes(), ".txt")?,
            output_dir: tempfile::tempdir()?.keep(),
        };

        log::debug!(
            "Staged request: audio={}, output_dir={}",
            staged.reference_audio.display(),
            staged.output_dir.display()
        );
        Ok(staged)
    }
}

/// Write `bytes` to a new temp file with the given suffix and keep it on disk.
fn persist_temp_file(bytes: &[u8], suffix: &str) -> io::Result<PathBuf> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(bytes)?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn upload() -> AudioUpload {
        AudioUpload {
            file_name: "reference.flac".to_string(),
            bytes: vec![0x66, 0x4c, 0x61, 0x43],
        }
    }

    #[test]
    fn staged_audio_keeps_the_upload_extension_and_bytes() {
        let staged =
            StagedRequest::stage(&upload(), "ref words", "target words").expect("staging");

        assert_eq!(
            staged.reference_audio.extension().and_then(|e| e.to_str()),
            Some("flac")
        );
        assert_eq!(
            fs::read(&staged.reference_audio).expect("read back"),
            upload().bytes
        );
    }

    #[test]
    fn staged_texts_match_the_form_contents() {
        let staged =
            StagedRequest::stage(&upload(), "ref words", "target words").expect("staging");

        assert_eq!(
            fs::read_to_string(&staged.reference_text).expect("read back"),
            "ref words"
        );
        assert_eq!(
            fs::read_to_string(&staged.target_text).expect("read back"),
            "target words"
        );
    }

    #[test]
    fn output_dir_starts_out_empty() {
        let staged = StagedRequest::stage(&upload(), "", "").expect("staging");

        assert!(staged.output_dir.is_dir());
        let entries: Vec<_> = fs::read_dir(&staged.output_dir)
            .expect("read dir")
            .collect();
        assert!(entries.is_empty());
    }

    #[test]
    fn upload_without_extension_still_stages() {
        let bare = AudioUpload {
            file_name: "recording".to_string(),
            bytes: vec![1, 2, 3],
        };
        let staged = StagedRequest::stage(&bare, "", "").expect("staging");
        assert_eq!(fs::read(&staged.reference_audio).expect("read back"), vec![1, 2, 3]);
    }
}
