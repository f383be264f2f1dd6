use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vox_transcribe::{transcribe_file, Args, TranscribeOptions};

fn main() {
    // Logs and diagnostics go to stderr; stdout carries only the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!("Requested language: {}", args.lang);

    let transcript =
        match transcribe_file(&args.audio_file, &args.model, TranscribeOptions::default()) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Error: {err}");
                String::new()
            }
        };

    // Callers capture stdout as the sole output channel, so always print
    // exactly one line and exit 0, even when transcription failed.
    println!("{transcript}");
}
