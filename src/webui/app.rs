//! The submit flow and per-session audio state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ModelPaths;
use crate::synthesis::{SynthesisError, SynthesisSession};
use crate::VoiceEngine;

use super::form::TtsForm;
use super::staging::StagedRequest;

pub const MIME_WAV: &str = "audio/wav";

pub const MSG_MISSING_AUDIO: &str = "Please upload a reference audio file!";
pub const MSG_GENERATING: &str = "Generating speech, please wait...";
pub const MSG_SUCCESS: &str = "Speech generated successfully!";
pub const MSG_NO_AUDIO: &str =
    "Failed to generate audio. Please check model configuration or logs.";

/// Outcome banner for one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn is_success(&self) -> bool {
        matches!(self, Banner::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Banner::Success(message) | Banner::Error(message) => message,
        }
    }

    fn inference_error(err: impl std::fmt::Display) -> Banner {
        Banner::Error(format!("An error occurred during inference: {err}"))
    }
}

/// The download affordance: name, MIME type and the bytes to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download<'a> {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: &'a [u8],
}

/// One user's TTS page: the engine session, the fixed checkpoint paths, and the
/// most recently generated audio.
///
/// The audio buffer outlives individual submits so the inline player and the
/// download button keep working across page re-renders; it is replaced only by a
/// later successful generation or [`reset`](TtsApp::reset).
pub struct TtsApp<E> {
    session: SynthesisSession<E>,
    model_paths: ModelPaths,
    audio_bytes: Option<Vec<u8>>,
    last_output: Option<PathBuf>,
}

impl<E: VoiceEngine> TtsApp<E> {
    /// Wrap an engine, using the bundled checkpoint paths.
    pub fn new(engine: E) -> Self {
        Self::with_model_paths(engine, ModelPaths::default())
    }

    pub fn with_model_paths(engine: E, model_paths: ModelPaths) -> Self {
        Self {
            session: SynthesisSession::new(engine),
            model_paths,
            audio_bytes: None,
            last_output: None,
        }
    }

    /// Handle one press of the generate button.
    ///
    /// Validates the upload, stages the inputs, runs the synthesis handler, and
    /// maps every failure to a user-facing banner. Never panics on engine or I/O
    /// failures.
    pub fn generate(&mut self, form: &TtsForm) -> Banner {
        let Some(upload) = form.uploaded_audio.as_ref() else {
            return Banner::Error(MSG_MISSING_AUDIO.to_string());
        };

        log::info!("{MSG_GENERATING}");

        let staged = match StagedRequest::stage(upload, &form.reference_text, &form.target_text)
        {
            Ok(staged) => staged,
            Err(err) => return Banner::inference_error(err),
        };

        let result = self.session.synthesize(
            &self.model_paths.acoustic,
            &self.model_paths.vocoder,
            &staged.reference_audio,
            &staged.reference_text,
            form.reference_language,
            &staged.target_text,
            form.target_language,
            &staged.output_dir,
        );

        match result {
            Ok(output_path) => match fs::read(&output_path) {
                Ok(bytes) => {
                    self.audio_bytes = Some(bytes);
                    self.last_output = Some(output_path);
                    Banner::Success(MSG_SUCCESS.to_string())
                }
                Err(err) => Banner::inference_error(err),
            },
            Err(SynthesisError::NoAudio) => Banner::Error(MSG_NO_AUDIO.to_string()),
            Err(err) => Banner::inference_error(err),
        }
    }

    /// The `audio/wav` bytes for the inline player, if anything has been
    /// generated this session.
    pub fn audio(&self) -> Option<&[u8]> {
        self.audio_bytes.as_deref()
    }

    /// The download button payload.
    pub fn download(&self) -> Option<Download<'_>> {
        self.audio_bytes.as_deref().map(|bytes| Download {
            file_name: crate::synthesis::OUTPUT_FILE_NAME,
            mime: MIME_WAV,
            bytes,
        })
    }

    /// Where the most recent `output.wav` was written.
    pub fn last_output(&self) -> Option<&Path> {
        self.last_output.as_deref()
    }

    /// Drop the session audio, as on a fresh session.
    pub fn reset(&mut self) {
        self.audio_bytes = None;
        self.last_output = None;
    }
}
