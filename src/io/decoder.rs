//! WAV decoding using hound
//!
//! Reads the whole file once, then decodes the in-memory stream into a mono
//! [`Waveform`]. Integer PCM is scaled into `[-1.0, 1.0)` by `2^(bits - 1)`,
//! 32-bit float PCM is passed through unchanged.
//!
//! Only single-channel files are accepted. A file declaring more than one
//! channel is rejected rather than having a channel dimension silently dropped.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::SpectrogramError;
use crate::io::waveform::Waveform;

/// Decode a mono WAV file into a waveform
///
/// # Arguments
///
/// * `path` - Path to a WAV file
///
/// # Errors
///
/// Returns `SpectrogramError::DecodeError` if the file cannot be read, is not
/// a valid WAV stream, uses an unsupported bit depth, or has more than one channel.
///
/// # Example
///
/// ```no_run
/// use wav_spectro::io::decode_audio;
///
/// let waveform = decode_audio("speech.wav")?;
/// println!("{} samples at {} Hz", waveform.len(), waveform.sample_rate());
/// # Ok::<(), wav_spectro::SpectrogramError>(())
/// ```
pub fn decode_audio<P: AsRef<Path>>(path: P) -> Result<Waveform, SpectrogramError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let bytes = std::fs::read(path).map_err(|e| {
        SpectrogramError::DecodeError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    decode_wav_bytes(&bytes)
}

/// Decode an in-memory WAV stream into a waveform
///
/// # Errors
///
/// Same as [`decode_audio`], minus the file read.
pub fn decode_wav_bytes(bytes: &[u8]) -> Result<Waveform, SpectrogramError> {
    let mut reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(SpectrogramError::DecodeError(format!(
            "Expected mono audio, found {} channels",
            spec.channels
        )));
    }

    let samples: Vec<f32> = match spec.sample_format {
        // hound only yields 32-bit float specs
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            if !matches!(spec.bits_per_sample, 8 | 16 | 24 | 32) {
                return Err(SpectrogramError::DecodeError(format!(
                    "Unsupported PCM bit depth: {}",
                    spec.bits_per_sample
                )));
            }
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    log::debug!(
        "Decoded {} samples at {} Hz ({}-bit {:?})",
        samples.len(),
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    Ok(Waveform::new(samples, spec.sample_rate))
}
