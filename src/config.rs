//! Configuration parameters for spectrogram extraction

use serde::{Deserialize, Serialize};

use crate::error::SpectrogramError;
use crate::features::window::WindowFunction;

/// Expected input sample rate in Hz
pub const SAMPLE_RATE: u32 = 16_000;

/// Samples per frame (one second at [`SAMPLE_RATE`])
pub const FRAME_LENGTH: usize = 16_000;

/// STFT window length in samples
pub const WINDOW_LENGTH: usize = 255;

/// STFT hop length in samples
pub const HOP_LENGTH: usize = 128;

/// Spectrogram extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramConfig {
    /// Expected sample rate of decoded audio (default: 16000)
    pub sample_rate: u32,

    /// Samples per frame (default: 16000)
    pub frame_length: usize,

    /// STFT window length (default: 255)
    pub window_length: usize,

    /// STFT hop length (default: 128)
    pub hop_length: usize,

    /// FFT size (default: None, meaning `window_length`)
    ///
    /// Frequency bin count is `fft_length / 2 + 1`. Use `Some(256)` to get
    /// the 129-bin layout produced by power-of-two rounding.
    pub fft_length: Option<usize>,

    /// Window applied to each STFT segment (default: periodic Hann)
    pub window: WindowFunction,

    /// Reject files whose declared rate differs from `sample_rate` (default: false)
    /// When false the mismatch is only logged.
    pub strict_sample_rate: bool,

    /// Compute per-frame spectrograms on the rayon pool (default: false)
    pub parallel: bool,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            frame_length: FRAME_LENGTH,
            window_length: WINDOW_LENGTH,
            hop_length: HOP_LENGTH,
            fft_length: None,
            window: WindowFunction::HannPeriodic,
            strict_sample_rate: false,
            parallel: false,
        }
    }
}

impl SpectrogramConfig {
    /// Check that all lengths are usable together
    pub fn validate(&self) -> Result<(), SpectrogramError> {
        if self.sample_rate == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }
        if self.frame_length == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Frame length must be > 0".to_string(),
            ));
        }
        if self.window_length == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Window length must be > 0".to_string(),
            ));
        }
        if self.hop_length == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Hop length must be > 0".to_string(),
            ));
        }
        if self.fft_size() < self.window_length {
            return Err(SpectrogramError::InvalidInput(format!(
                "FFT length {} is shorter than window length {}",
                self.fft_size(),
                self.window_length
            )));
        }
        if self.window_length > self.frame_length {
            return Err(SpectrogramError::InvalidInput(format!(
                "Window length {} exceeds frame length {}",
                self.window_length, self.frame_length
            )));
        }
        Ok(())
    }

    /// FFT size actually used
    pub fn fft_size(&self) -> usize {
        self.fft_length.unwrap_or(self.window_length)
    }

    /// Time bins per frame: `floor((frame_length - window_length) / hop_length) + 1`
    pub fn num_time_bins(&self) -> usize {
        if self.hop_length == 0 || self.frame_length < self.window_length {
            return 0;
        }
        (self.frame_length - self.window_length) / self.hop_length + 1
    }

    /// Frequency bins per time bin
    pub fn num_freq_bins(&self) -> usize {
        self.fft_size() / 2 + 1
    }

    /// Shape of the sequence produced for `num_frames` frames
    pub fn output_shape(&self, num_frames: usize) -> [usize; 4] {
        [num_frames, self.num_time_bins(), self.num_freq_bins(), 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = SpectrogramConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_time_bins(), 124);
        assert_eq!(config.num_freq_bins(), 128);
        assert_eq!(config.output_shape(3), [3, 124, 128, 1]);
    }

    #[test]
    fn test_power_of_two_fft() {
        let config = SpectrogramConfig {
            fft_length: Some(256),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.num_freq_bins(), 129);
        assert_eq!(config.num_time_bins(), 124);
    }

    #[test]
    fn test_invalid_parameters() {
        let zero_hop = SpectrogramConfig {
            hop_length: 0,
            ..Default::default()
        };
        assert!(zero_hop.validate().is_err());

        let short_fft = SpectrogramConfig {
            fft_length: Some(128),
            ..Default::default()
        };
        assert!(short_fft.validate().is_err());

        let long_window = SpectrogramConfig {
            frame_length: 200,
            ..Default::default()
        };
        assert!(long_window.validate().is_err());
    }
}
