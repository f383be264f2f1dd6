pub mod audio;
pub mod cli;
pub mod engine;
pub mod transcriber;

pub use audio::{AudioError, WavAudio};
pub use cli::Args;
pub use engine::{
    EngineConfig, EngineFactory, RecognitionSession, SessionConfig, SpeechEngine,
    TranscriptPayload, WordDetail,
};
pub use transcriber::{
    transcribe_file, TranscribeError, TranscribeOptions, Transcriber, CHUNK_FRAMES,
};
