//! Audio I/O modules
//!
//! WAV decoding into mono floating-point waveforms using hound.

pub mod decoder;
pub mod waveform;

pub use decoder::{decode_audio, decode_wav_bytes};
pub use waveform::Waveform;
