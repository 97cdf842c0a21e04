//! Audio preprocessing modules
//!
//! This module contains utilities for preparing a waveform for the STFT:
//! - Tail zero-padding and segmentation into fixed-length frames

pub mod segmentation;

pub use segmentation::{slice_audio_to_time_series, FrameBatch};
