use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(feature = "vosk")]
pub mod vosk;

#[cfg(feature = "vosk")]
pub use self::vosk::VoskEngine;

/// Engine-wide configuration, applied when the model bundle is loaded.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding the pre-trained model bundle. Opaque to this crate;
    /// only the engine implementation interprets its contents.
    pub model_dir: PathBuf,
    /// Forward the engine's internal logging instead of silencing it.
    /// Engines that only expose a global log level apply this process-wide.
    pub verbose: bool,
}

/// Per-session options.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Native sample rate of the audio being fed in.
    pub sample_rate: u32,
    /// Include word-level detail in result payloads.
    pub words: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            words: true,
        }
    }
}

/// A loaded speech-recognition model.
///
/// Loading the model bundle is the slow part and happens once, in
/// [`EngineFactory::create`]; sessions bound to it are cheap.
pub trait SpeechEngine {
    /// Bind a streaming recognition session to this model.
    fn create_session(&self, config: SessionConfig) -> Result<Box<dyn RecognitionSession>>;
}

/// A streaming recognition session: consumes mono 16-bit PCM chunks in order
/// and emits JSON result payloads at segment boundaries.
pub trait RecognitionSession {
    /// Feed one chunk of samples. Returns `true` when the decoder judged a
    /// segment complete and [`result`](Self::result) has a payload ready.
    fn push(&mut self, samples: &[i16]) -> Result<bool>;

    /// Payload for the segment just completed.
    fn result(&mut self) -> Result<String>;

    /// Flush any buffered partial segment and return the last payload.
    fn final_result(&mut self) -> Result<String>;
}

/// Result payload emitted by the engine: `{"text": "...", "result": [...]}`.
///
/// Only `text` is consumed downstream; word entries are carried when the
/// session asked for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptPayload {
    #[serde(default)]
    pub text: String,
    /// Word-level detail, present when the `words` session option is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub result: Vec<WordDetail>,
}

/// One recognized word with timing and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordDetail {
    pub word: String,
    pub start: f32,
    pub end: f32,
    pub conf: f32,
}

impl TranscriptPayload {
    /// Parse a raw payload string from the engine.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// Selects the concrete engine at compile time.
pub struct EngineFactory;

impl EngineFactory {
    /// Load the model bundle at `config.model_dir` and return the engine.
    ///
    /// Fails if the directory is not a valid model bundle, or if the binary
    /// was built without an engine backend.
    pub fn create(config: EngineConfig) -> Result<Box<dyn SpeechEngine>> {
        #[cfg(feature = "vosk")]
        {
            let engine = VoskEngine::load(&config)?;
            Ok(Box::new(engine))
        }

        #[cfg(not(feature = "vosk"))]
        {
            let _ = &config;
            anyhow::bail!("no speech engine compiled in (build with the `vosk` feature)")
        }
    }
}
