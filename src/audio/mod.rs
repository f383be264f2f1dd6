pub mod file;

pub use file::{AudioError, WavAudio};
