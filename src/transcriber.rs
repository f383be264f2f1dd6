use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::audio::{AudioError, WavAudio};
use crate::engine::{EngineConfig, EngineFactory, SessionConfig, SpeechEngine, TranscriptPayload};

/// Frames handed to the recognizer per read.
pub const CHUNK_FRAMES: usize = 4000;

/// Why a transcription attempt produced no text.
///
/// Callers that only care about the original script contract can collapse
/// any variant to an empty transcript; the variants keep "failed before
/// producing text" distinguishable from "transcribed to empty text".
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Model directory {} does not exist", .0.display())]
    MissingModel(PathBuf),

    /// Missing audio file, unsupported format, or a read failure mid-stream.
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Model load, session creation, or decode failure inside the engine.
    #[error(transparent)]
    Engine(#[from] anyhow::Error),

    #[error("malformed result payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Options for a transcription run.
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    /// Ask the engine for word-level detail in result payloads. The detail
    /// is carried through but never consumed; only `text` matters here.
    pub words: bool,
    /// Forward the engine's internal logging instead of silencing it.
    pub verbose_engine: bool,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            words: true,
            verbose_engine: false,
        }
    }
}

/// Streams one WAV file through an injected speech engine and assembles the
/// transcript from the segment payloads the engine emits.
pub struct Transcriber {
    engine: Box<dyn SpeechEngine>,
    options: TranscribeOptions,
}

impl Transcriber {
    pub fn new(engine: Box<dyn SpeechEngine>, options: TranscribeOptions) -> Self {
        Self { engine, options }
    }

    /// Run one full pass over the audio at `audio_path` and return the
    /// joined transcript.
    ///
    /// Fragments whose trimmed text is empty never enter the transcript;
    /// surviving fragments keep their arrival order and are joined with
    /// single spaces, then trimmed.
    pub fn transcribe(&self, audio_path: impl AsRef<Path>) -> Result<String, TranscribeError> {
        let audio = WavAudio::open(audio_path.as_ref())?;
        self.drive(audio)
    }

    fn drive(&self, mut audio: WavAudio) -> Result<String, TranscribeError> {
        // One session per pass; never reused across files.
        let mut session = self.engine.create_session(SessionConfig {
            sample_rate: audio.sample_rate(),
            words: self.options.words,
        })?;

        let mut fragments: Vec<String> = Vec::new();
        loop {
            let chunk = audio.read_chunk(CHUNK_FRAMES)?;
            if chunk.is_empty() {
                break;
            }
            if session.push(&chunk)? {
                let payload = TranscriptPayload::from_json(&session.result()?)?;
                if !payload.text.trim().is_empty() {
                    fragments.push(payload.text);
                }
            }
        }

        let last = TranscriptPayload::from_json(&session.final_result()?)?;
        if !last.text.trim().is_empty() {
            fragments.push(last.text);
        }

        debug!("Assembled transcript from {} segment(s)", fragments.len());
        Ok(fragments.join(" ").trim().to_string())
    }
}

/// Validate both paths, load the model at `model_dir`, and transcribe the
/// audio at `audio_path`.
///
/// Path and format validation runs before the model load, so a bad
/// invocation fails fast instead of after seconds of model loading.
pub fn transcribe_file(
    audio_path: impl AsRef<Path>,
    model_dir: impl AsRef<Path>,
    options: TranscribeOptions,
) -> Result<String, TranscribeError> {
    let model_dir = model_dir.as_ref();
    if !model_dir.exists() {
        return Err(TranscribeError::MissingModel(model_dir.to_path_buf()));
    }

    let audio_path = audio_path.as_ref();
    let audio = WavAudio::open(audio_path)?;

    info!(
        "Transcribing {} with model {}",
        audio_path.display(),
        model_dir.display()
    );

    let engine = EngineFactory::create(EngineConfig {
        model_dir: model_dir.to_path_buf(),
        verbose: options.verbose_engine,
    })?;

    Transcriber::new(engine, options).drive(audio)
}
