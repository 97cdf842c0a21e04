//! Feature extraction modules
//!
//! This module contains the time-frequency transforms:
//! - Window functions
//! - Short-time Fourier transform and magnitude
//! - Per-frame spectrograms stacked into sequences

pub mod spectrogram;
pub mod stft;
pub mod window;
