use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when `--model` is not supplied.
pub const MODEL_DIR_ENV: &str = "VOSK_MODEL_DIR";

/// Fallback model directory when neither `--model` nor the environment
/// variable is set.
pub const DEFAULT_MODEL_DIR: &str = "models/vosk-model-fr";

/// Command-line arguments for the `transcribe` binary.
#[derive(Debug, Parser)]
#[command(name = "transcribe")]
#[command(about = "Transcribe a mono 16-bit PCM WAV file with a local speech model")]
pub struct Args {
    /// Path to the WAV file to transcribe
    pub audio_file: PathBuf,

    /// Path to the speech model directory
    #[arg(long, env = MODEL_DIR_ENV, default_value = DEFAULT_MODEL_DIR)]
    pub model: PathBuf,

    /// Language code; the model directory already selects the language
    #[arg(long, default_value = "fr")]
    pub lang: String,
}
