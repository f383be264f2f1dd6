use hound::{SampleFormat, WavReader};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors produced while opening or reading the input WAV container.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("WAV file {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// Wrong channel count, sample width, or compression type.
    #[error("Audio file must be WAV format mono PCM.")]
    UnsupportedFormat,

    #[error("failed to read WAV file: {0}")]
    Wav(#[from] hound::Error),
}

/// A validated mono 16-bit PCM WAV file, read in fixed-size frame chunks.
///
/// The reader is dropped (and the file handle released) when this value goes
/// out of scope, on error paths included.
pub struct WavAudio {
    reader: WavReader<BufReader<File>>,
}

impl WavAudio {
    /// Open `path` and check the header fields the recognizer depends on:
    /// exactly one channel, 16-bit samples, integer (uncompressed) PCM.
    ///
    /// The sample rate is read from the header and passed through; any rate
    /// is accepted.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AudioError::NotFound(path.to_path_buf()));
        }

        let reader = WavReader::open(path)?;
        let spec = reader.spec();
        debug!(
            "Opened {}: {}Hz, {} channel(s), {} bits",
            path.display(),
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample
        );

        if spec.channels != 1
            || spec.bits_per_sample != 16
            || spec.sample_format != SampleFormat::Int
        {
            return Err(AudioError::UnsupportedFormat);
        }

        Ok(Self { reader })
    }

    /// Sample rate from the WAV header.
    pub fn sample_rate(&self) -> u32 {
        self.reader.spec().sample_rate
    }

    /// Read up to `frames` frames from the current position. An empty vector
    /// means end of stream. The input is mono, so one frame is one sample.
    pub fn read_chunk(&mut self, frames: usize) -> Result<Vec<i16>, AudioError> {
        let mut chunk = Vec::with_capacity(frames);
        for sample in self.reader.samples::<i16>().take(frames) {
            chunk.push(sample?);
        }
        Ok(chunk)
    }
}
