//! The synthesis request handler.
//!
//! [`SynthesisSession`] owns the engine together with the paths of the checkpoints
//! it currently holds, so weight loading is an explicit, per-session operation
//! instead of ambient process state. A request reads the staged reference and
//! target text, loads the requested checkpoints (skipping ones already loaded),
//! synthesizes with fixed sampling parameters, and writes the final chunk as
//! `output.wav` in the caller's output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::language::{RefLanguage, TargetLanguage};
use crate::{EngineRequest, SamplingParams, VoiceEngine};

/// File name of the generated audio inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "output.wav";

#[derive(thiserror::Error, Debug)]
pub enum SynthesisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
    #[error("engine error: {0}")]
    Engine(Box<dyn std::error::Error>),
    #[error("the engine produced no audio")]
    NoAudio,
}

/// An engine plus the checkpoints it currently holds.
///
/// Single-caller by construction: every request takes `&mut self`, so one session
/// cannot race its own weight swaps. Sharing one engine across sessions is not
/// supported.
pub struct SynthesisSession<E> {
    engine: E,
    acoustic_path: Option<PathBuf>,
    vocoder_path: Option<PathBuf>,
}

impl<E: VoiceEngine> SynthesisSession<E> {
    /// Wrap an engine with no weights loaded yet.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            acoustic_path: None,
            vocoder_path: None,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Ensure the engine holds the given checkpoints.
    ///
    /// A checkpoint whose path already matches the loaded one is not reloaded;
    /// anything else replaces the previously loaded weights.
    pub fn load_weights(
        &mut self,
        acoustic: &Path,
        vocoder: &Path,
    ) -> Result<(), SynthesisError> {
        if self.acoustic_path.as_deref() != Some(acoustic) {
            self.engine
                .load_acoustic_model(acoustic)
                .map_err(SynthesisError::Engine)?;
            self.acoustic_path = Some(acoustic.to_path_buf());
            log::info!("Loaded acoustic weights from {}", acoustic.display());
        }

        if self.vocoder_path.as_deref() != Some(vocoder) {
            self.engine
                .load_vocoder_model(vocoder)
                .map_err(SynthesisError::Engine)?;
            self.vocoder_path = Some(vocoder.to_path_buf());
            log::info!("Loaded vocoder weights from {}", vocoder.display());
        }

        Ok(())
    }

    /// Run one synthesis request end to end.
    ///
    /// Reads the reference and target text from the given paths as UTF-8, loads
    /// the checkpoints, synthesizes with default sampling (top_p = 1,
    /// temperature = 1), and writes the last produced chunk as
    /// [`OUTPUT_FILE_NAME`] inside `output_dir`, returning the written path.
    ///
    /// If the engine yields no chunks, nothing is written and
    /// [`SynthesisError::NoAudio`] is returned.
    #[allow(clippy::too_many_arguments)]
    pub fn synthesize(
        &mut self,
        acoustic_model_path: &Path,
        vocoder_model_path: &Path,
        reference_audio_path: &Path,
        reference_text_path: &Path,
        reference_language: RefLanguage,
        target_text_path: &Path,
        target_language: TargetLanguage,
        output_dir: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        let reference_text = fs::read_to_string(reference_text_path)?;
        let target_text = fs::read_to_string(target_text_path)?;

        self.load_weights(acoustic_model_path, vocoder_model_path)?;

        let request = EngineRequest {
            reference_audio: reference_audio_path.to_path_buf(),
            reference_text,
            reference_language,
            target_text,
            target_language,
            sampling: SamplingParams::default(),
        };

        let chunks = self
            .engine
            .synthesize(&request)
            .map_err(SynthesisError::Engine)?;

        let Some(last) = chunks.last() else {
            log::warn!("Engine returned no audio chunks");
            return Err(SynthesisError::NoAudio);
        };

        let output_path = output_dir.join(OUTPUT_FILE_NAME);
        last.write_wav(&output_path)?;
        log::info!("Audio saved to {}", output_path.display());

        Ok(output_path)
    }
}
