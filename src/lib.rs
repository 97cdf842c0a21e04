//! # wav-spectro
//!
//! Converts a mono 16 kHz WAV file into a sequence of one-second magnitude
//! spectrograms, the input front-end for sequence-to-sequence audio models.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wav_spectro::get_spectrograms_sequence;
//!
//! let sequence = get_spectrograms_sequence("speech.wav")?;
//! // [num_frames, 124, 128, 1]
//! println!("{:?}", sequence.shape());
//! # Ok::<(), wav_spectro::SpectrogramError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! WAV file → decode (mono f32) → pad + slice into 1 s frames → STFT + |·| per frame → [frames, time, freq, 1]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

use std::path::Path;

// Re-export main types
pub use config::SpectrogramConfig;
pub use error::SpectrogramError;
pub use features::spectrogram::{Spectrogram, SpectrogramSequence, SpectrogramSequencer};
pub use features::window::WindowFunction;
pub use io::Waveform;
pub use preprocessing::FrameBatch;

/// Convert a WAV file into a spectrogram sequence with the default parameters
///
/// 16 kHz input, 16000-sample frames, window 255, hop 128.
///
/// # Returns
///
/// Sequence of shape `[num_frames, 124, 128, 1]`, one entry per second of
/// audio (the last second zero-padded)
///
/// # Errors
///
/// Returns `SpectrogramError::DecodeError` if the file cannot be read or is
/// not a valid mono WAV stream. No partial result is returned.
pub fn get_spectrograms_sequence<P: AsRef<Path>>(
    path: P,
) -> Result<SpectrogramSequence, SpectrogramError> {
    get_spectrograms_sequence_with_config(path, &SpectrogramConfig::default())
}

/// Convert a WAV file into a spectrogram sequence
///
/// # Errors
///
/// Returns `SpectrogramError::InvalidInput` for an invalid configuration,
/// `DecodeError` for an unreadable or non-mono file (or a rate mismatch with
/// `strict_sample_rate`), and `ShapeError` if a frame of the wrong length
/// reaches the STFT.
pub fn get_spectrograms_sequence_with_config<P: AsRef<Path>>(
    path: P,
    config: &SpectrogramConfig,
) -> Result<SpectrogramSequence, SpectrogramError> {
    config.validate()?;
    let waveform = io::decode_audio(path)?;
    spectrograms_from_waveform(&waveform, config)
}

/// Run segmentation and spectrogram extraction on an already decoded waveform
///
/// # Errors
///
/// Same as [`get_spectrograms_sequence_with_config`], minus file decoding.
pub fn spectrograms_from_waveform(
    waveform: &Waveform,
    config: &SpectrogramConfig,
) -> Result<SpectrogramSequence, SpectrogramError> {
    let sequencer = SpectrogramSequencer::new(config.clone())?;

    if waveform.sample_rate() != config.sample_rate {
        if config.strict_sample_rate {
            return Err(SpectrogramError::DecodeError(format!(
                "Sample rate {} Hz does not match expected {} Hz",
                waveform.sample_rate(),
                config.sample_rate
            )));
        }
        log::warn!(
            "Sample rate {} Hz differs from expected {} Hz; continuing without resampling",
            waveform.sample_rate(),
            config.sample_rate
        );
    }

    let frames = preprocessing::slice_audio_to_time_series(waveform, config.frame_length)?;
    let sequence = sequencer.process(&frames)?;

    log::debug!(
        "Produced spectrogram sequence {:?} from {:.2}s of audio",
        sequence.shape(),
        waveform.duration_seconds()
    );

    Ok(sequence)
}
