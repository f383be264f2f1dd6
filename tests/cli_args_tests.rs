// Argument parsing and model-directory resolution rules.

use clap::Parser;
use std::path::PathBuf;
use vox_transcribe::cli::{Args, DEFAULT_MODEL_DIR, MODEL_DIR_ENV};

#[test]
fn model_resolution_prefers_flag_then_env_then_default() {
    // Single test so the environment mutations cannot race each other.
    std::env::remove_var(MODEL_DIR_ENV);
    let args = Args::try_parse_from(["transcribe", "audio.wav"]).unwrap();
    assert_eq!(args.model, PathBuf::from(DEFAULT_MODEL_DIR));

    std::env::set_var(MODEL_DIR_ENV, "models/vosk-model-en");
    let args = Args::try_parse_from(["transcribe", "audio.wav"]).unwrap();
    assert_eq!(args.model, PathBuf::from("models/vosk-model-en"));

    let args = Args::try_parse_from(["transcribe", "audio.wav", "--model", "models/custom"]).unwrap();
    assert_eq!(args.model, PathBuf::from("models/custom"));

    std::env::remove_var(MODEL_DIR_ENV);
}

#[test]
fn lang_defaults_to_fr_and_is_accepted() {
    let args = Args::try_parse_from(["transcribe", "audio.wav"]).unwrap();
    assert_eq!(args.lang, "fr");

    let args = Args::try_parse_from(["transcribe", "audio.wav", "--lang", "en"]).unwrap();
    assert_eq!(args.lang, "en");
}

#[test]
fn audio_file_is_required() {
    assert!(Args::try_parse_from(["transcribe"]).is_err());
}

#[test]
fn audio_file_is_positional() {
    let args = Args::try_parse_from(["transcribe", "recordings/call.wav"]).unwrap();
    assert_eq!(args.audio_file, PathBuf::from("recordings/call.wav"));
}
