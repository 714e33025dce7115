use std::error::Error;
use std::f32::consts::TAU;
use std::path::Path;
use std::time::Instant;

use sovits_webui::language::{RefLanguage, TargetLanguage};
use sovits_webui::webui::{AudioUpload, TtsApp, TtsForm};
use sovits_webui::{AudioChunk, EngineRequest, VoiceEngine};

/// Stand-in engine that renders a sine burst instead of cloned speech, sized by
/// the target text, so the whole form-to-download path can be exercised without
/// checkpoints on disk.
struct StubEngine {
    sample_rate: u32,
}

impl VoiceEngine for StubEngine {
    fn load_acoustic_model(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        println!("(stub) acoustic weights requested: {}", path.display());
        Ok(())
    }

    fn load_vocoder_model(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        println!("(stub) vocoder weights requested: {}", path.display());
        Ok(())
    }

    fn synthesize(&mut self, request: &EngineRequest) -> Result<Vec<AudioChunk>, Box<dyn Error>> {
        // Roughly 80ms of tone per word keeps the output length text-dependent.
        let words = request.target_text.split_whitespace().count().max(1);
        let sample_count = words * (self.sample_rate as usize) * 80 / 1000;

        let samples = (0..sample_count)
            .map(|i| {
                let t = i as f32 / self.sample_rate as f32;
                ((TAU * 440.0 * t).sin() * 0.2 * f32::from(i16::MAX)) as i16
            })
            .collect();

        Ok(vec![AudioChunk {
            sample_rate: self.sample_rate,
            samples,
        }])
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut app = TtsApp::new(StubEngine { sample_rate: 32000 });

    let mut form = TtsForm::default();
    form.uploaded_audio = Some(AudioUpload {
        file_name: "reference.wav".to_string(),
        bytes: vec![0; 64],
    });
    form.reference_language = RefLanguage::English;
    form.target_language = TargetLanguage::English;
    form.target_text = "Hello from the stub voice engine".to_string();

    let start = Instant::now();
    let banner = app.generate(&form);
    println!("{} ({:.2?})", banner.message(), start.elapsed());

    if let Some(download) = app.download() {
        std::fs::write(download.file_name, download.bytes)?;
        println!(
            "Saved {} ({} bytes, {})",
            download.file_name,
            download.bytes.len(),
            download.mime
        );
    }

    Ok(())
}
