//! # sovits-webui
//!
//! Browser-facing glue for a GPT-SoVITS style voice-cloning text-to-speech engine.
//!
//! The user uploads a short reference clip plus optional reference text, picks the
//! source and target languages, types the text to speak, and gets back a WAV they can
//! preview and download. Everything acoustic (prosody transfer, vocoding, the models
//! themselves) lives behind the [`VoiceEngine`] trait; this crate stages the form
//! inputs to disk, drives the engine, and carries the resulting bytes back to the
//! presentation layer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sovits_webui::webui::{AudioUpload, TtsApp, TtsForm};
//!
//! // `engine` is any VoiceEngine implementation wrapping your checkpoints.
//! let mut app = TtsApp::new(engine);
//!
//! let mut form = TtsForm::default();
//! form.uploaded_audio = Some(AudioUpload {
//!     file_name: "reference.wav".to_string(),
//!     bytes: clip_bytes,
//! });
//! form.target_text = "Hello from a cloned voice.".to_string();
//!
//! let banner = app.generate(&form);
//! println!("{}", banner.message());
//! if let Some(wav) = app.audio() {
//!     std::fs::write("output.wav", wav)?;
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod language;
pub mod synthesis;
pub mod webui;

use std::path::{Path, PathBuf};

use derive_builder::Builder;

use crate::language::{RefLanguage, TargetLanguage};

/// One (sample rate, waveform) unit yielded by the engine.
///
/// Samples are mono 16-bit PCM, which is also what the generated `output.wav`
/// contains. A synthesis call may yield several chunks; only the last one is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    /// Sample rate of the waveform, chosen by the engine.
    pub sample_rate: u32,
    /// Raw mono samples.
    pub samples: Vec<i16>,
}

impl AudioChunk {
    /// Write the chunk to a 16-bit mono PCM WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<(), hound::Error> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Duration of the chunk in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Sampling parameters passed to the engine on every request.
///
/// The request handler always uses the defaults; the knobs exist so engine
/// implementations can expose them in their own front ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub top_p: f32,
    pub temperature: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            top_p: 1.0,
            temperature: 1.0,
        }
    }
}

/// Inputs marshalled for one engine synthesis call.
///
/// The reference clip conditions the voice identity; the reference text is its
/// transcript (or a placeholder, passed through verbatim).
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct EngineRequest {
    /// Path to the staged reference audio clip.
    pub reference_audio: PathBuf,
    /// Transcript of the reference clip.
    pub reference_text: String,
    /// Language of the reference clip.
    pub reference_language: RefLanguage,
    /// Text to speak in the cloned voice.
    pub target_text: String,
    /// Language of the target text.
    pub target_language: TargetLanguage,
    #[builder(default)]
    pub sampling: SamplingParams,
}

/// The external voice synthesis engine.
///
/// Implementations wrap a pretrained acoustic (GPT) checkpoint and a vocoder
/// (SoVITS) checkpoint. Loading a checkpoint replaces whatever was previously
/// loaded for the lifetime of the value; [`synthesis::SynthesisSession`] tracks the
/// loaded paths so unchanged checkpoints are not reloaded on every request.
pub trait VoiceEngine {
    /// Load (or replace) the acoustic model weights.
    fn load_acoustic_model(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>>;

    /// Load (or replace) the vocoder model weights.
    fn load_vocoder_model(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>>;

    /// Synthesize speech for the given request.
    ///
    /// Returns zero or more chunks. An empty sequence is a legal outcome and is
    /// reported to the caller as a synthesis failure, not a panic.
    fn synthesize(
        &mut self,
        request: &EngineRequest,
    ) -> Result<Vec<AudioChunk>, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_round_trips_samples_and_rate() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("chunk.wav");

        let chunk = AudioChunk {
            sample_rate: 22050,
            samples: vec![0, 1, -1, i16::MAX, i16::MIN],
        };
        chunk.write_wav(&path).expect("wav write should succeed");

        let mut reader = hound::WavReader::open(&path).expect("wav should open");
        assert_eq!(reader.spec().sample_rate, 22050);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().bits_per_sample, 16);

        let samples: Vec<i16> = reader
            .samples::<i16>()
            .map(|s| s.expect("sample should decode"))
            .collect();
        assert_eq!(samples, chunk.samples);
    }

    #[test]
    fn duration_reflects_sample_rate() {
        let chunk = AudioChunk {
            sample_rate: 32000,
            samples: vec![0; 16000],
        };
        assert_eq!(chunk.duration_secs(), 0.5);
    }

    #[test]
    fn default_sampling_is_top_p_one_temperature_one() {
        let sampling = SamplingParams::default();
        assert_eq!(sampling.top_p, 1.0);
        assert_eq!(sampling.temperature, 1.0);
    }

    #[test]
    fn request_builder_fills_default_sampling() {
        let request = EngineRequestBuilder::default()
            .reference_audio("ref.wav")
            .reference_text("transcript")
            .reference_language(RefLanguage::Japanese)
            .target_text("hello")
            .target_language(TargetLanguage::English)
            .build()
            .expect("all required fields are set");

        assert_eq!(request.reference_audio, PathBuf::from("ref.wav"));
        assert_eq!(request.sampling, SamplingParams::default());
    }

    #[test]
    fn request_builder_rejects_missing_fields() {
        let result = EngineRequestBuilder::default()
            .target_text("hello")
            .build();
        assert!(result.is_err());
    }
}
