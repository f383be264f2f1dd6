//! Vosk-backed implementation of the speech-engine capability.

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use vosk::{CompleteResult, DecodingState, LogLevel, Model, Recognizer};

use super::{
    EngineConfig, RecognitionSession, SessionConfig, SpeechEngine, TranscriptPayload, WordDetail,
};

/// Speech engine backed by a Vosk model bundle.
pub struct VoskEngine {
    model: Model,
}

impl VoskEngine {
    /// Load the model bundle at `config.model_dir`. Blocks the caller; model
    /// loads can take seconds for large bundles.
    pub fn load(config: &EngineConfig) -> Result<Self> {
        // Vosk only exposes a process-wide log level.
        vosk::set_log_level(if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Error
        });

        let dir = config.model_dir.display().to_string();
        info!("Loading speech model from {}", dir);
        let model =
            Model::new(&dir).ok_or_else(|| anyhow!("failed to load speech model from {}", dir))?;

        Ok(Self { model })
    }
}

impl SpeechEngine for VoskEngine {
    fn create_session(&self, config: SessionConfig) -> Result<Box<dyn RecognitionSession>> {
        let mut recognizer = Recognizer::new(&self.model, config.sample_rate as f32)
            .ok_or_else(|| anyhow!("failed to create recognition session"))?;
        recognizer.set_words(config.words);

        debug!("Recognition session created at {}Hz", config.sample_rate);
        Ok(Box::new(VoskSession { recognizer }))
    }
}

struct VoskSession {
    recognizer: Recognizer,
}

impl VoskSession {
    fn payload_json(result: CompleteResult<'_>) -> Result<String> {
        let payload = match result.single() {
            Some(single) => TranscriptPayload {
                text: single.text.to_string(),
                result: single
                    .result
                    .iter()
                    .map(|w| WordDetail {
                        word: w.word.to_string(),
                        start: w.start,
                        end: w.end,
                        conf: w.conf,
                    })
                    .collect(),
            },
            // Multiple alternatives are only produced when requested; this
            // session never requests them.
            None => TranscriptPayload::default(),
        };
        Ok(serde_json::to_string(&payload)?)
    }
}

impl RecognitionSession for VoskSession {
    fn push(&mut self, samples: &[i16]) -> Result<bool> {
        match self.recognizer.accept_waveform(samples) {
            DecodingState::Finalized => Ok(true),
            DecodingState::Running => Ok(false),
            DecodingState::Failed => Err(anyhow!("recognizer failed to accept waveform")),
        }
    }

    fn result(&mut self) -> Result<String> {
        Self::payload_json(self.recognizer.result())
    }

    fn final_result(&mut self) -> Result<String> {
        Self::payload_json(self.recognizer.final_result())
    }
}
