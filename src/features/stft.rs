//! Short-time Fourier transform of real signals
//!
//! Windows start at `t * hop_length` for every position where a full window
//! fits (no centering, no end padding). Each segment is multiplied by the
//! window, zero-padded to `fft_length`, and transformed with rustfft. Only the
//! non-negative frequencies are kept: `fft_length / 2 + 1` bins.
//!
//! # Example
//!
//! ```
//! use wav_spectro::features::stft::Stft;
//! use wav_spectro::features::window::WindowFunction;
//!
//! let stft = Stft::new(255, 128, 255, WindowFunction::HannPeriodic)?;
//! let mags = stft.magnitudes(&vec![0.0f32; 16_000]);
//! assert_eq!(mags.dim(), (124, 128));
//! # Ok::<(), wav_spectro::SpectrogramError>(())
//! ```

use std::sync::Arc;

use ndarray::Array2;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::SpectrogramError;
use crate::features::window::WindowFunction;

/// Planned STFT with a precomputed window
///
/// The FFT plan is shared, so one `Stft` can be used from several threads.
#[derive(Clone)]
pub struct Stft {
    window: Vec<f32>,
    hop_length: usize,
    fft_length: usize,
    fft: Arc<dyn Fft<f32>>,
}

impl std::fmt::Debug for Stft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stft")
            .field("window_length", &self.window.len())
            .field("hop_length", &self.hop_length)
            .field("fft_length", &self.fft_length)
            .finish()
    }
}

impl Stft {
    /// Plan an STFT
    ///
    /// # Errors
    ///
    /// Returns `SpectrogramError::InvalidInput` if any length is 0 or
    /// `fft_length < window_length`
    pub fn new(
        window_length: usize,
        hop_length: usize,
        fft_length: usize,
        window: WindowFunction,
    ) -> Result<Self, SpectrogramError> {
        if window_length == 0 || hop_length == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Window and hop length must be > 0".to_string(),
            ));
        }
        if fft_length < window_length {
            return Err(SpectrogramError::InvalidInput(format!(
                "FFT length {} is shorter than window length {}",
                fft_length, window_length
            )));
        }

        let fft = FftPlanner::<f32>::new().plan_fft_forward(fft_length);

        Ok(Self {
            window: window.generate(window_length),
            hop_length,
            fft_length,
            fft,
        })
    }

    /// Window length in samples
    pub fn window_length(&self) -> usize {
        self.window.len()
    }

    /// Hop length in samples
    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// Number of frequency bins per time bin
    pub fn num_freq_bins(&self) -> usize {
        self.fft_length / 2 + 1
    }

    /// Number of time bins for a signal of `signal_len` samples
    pub fn num_time_bins(&self, signal_len: usize) -> usize {
        if signal_len < self.window.len() {
            0
        } else {
            (signal_len - self.window.len()) / self.hop_length + 1
        }
    }

    /// Complex STFT, shape `[time_bins, freq_bins]`
    pub fn compute(&self, signal: &[f32]) -> Array2<Complex<f32>> {
        let n_time = self.num_time_bins(signal.len());
        let n_freq = self.num_freq_bins();
        let mut out = Array2::<Complex<f32>>::zeros((n_time, n_freq));

        let mut buffer = vec![Complex::new(0.0f32, 0.0); self.fft_length];
        let mut scratch = vec![Complex::new(0.0f32, 0.0); self.fft.get_inplace_scratch_len()];

        for (t, mut row) in out.rows_mut().into_iter().enumerate() {
            self.transform_segment(signal, t, &mut buffer, &mut scratch);
            for (dst, src) in row.iter_mut().zip(&buffer[..n_freq]) {
                *dst = *src;
            }
        }

        out
    }

    /// Magnitude STFT, shape `[time_bins, freq_bins]`
    ///
    /// Same as `magnitude(&self.compute(signal))` without the complex intermediate.
    pub fn magnitudes(&self, signal: &[f32]) -> Array2<f32> {
        let n_time = self.num_time_bins(signal.len());
        let n_freq = self.num_freq_bins();
        let mut out = Array2::<f32>::zeros((n_time, n_freq));

        let mut buffer = vec![Complex::new(0.0f32, 0.0); self.fft_length];
        let mut scratch = vec![Complex::new(0.0f32, 0.0); self.fft.get_inplace_scratch_len()];

        for (t, mut row) in out.rows_mut().into_iter().enumerate() {
            self.transform_segment(signal, t, &mut buffer, &mut scratch);
            for (dst, src) in row.iter_mut().zip(&buffer[..n_freq]) {
                *dst = src.norm();
            }
        }

        out
    }

    fn transform_segment(
        &self,
        signal: &[f32],
        t: usize,
        buffer: &mut [Complex<f32>],
        scratch: &mut [Complex<f32>],
    ) {
        let start = t * self.hop_length;
        let segment = &signal[start..start + self.window.len()];

        for (slot, (&s, &w)) in buffer.iter_mut().zip(segment.iter().zip(&self.window)) {
            *slot = Complex::new(s * w, 0.0);
        }
        for slot in buffer[self.window.len()..].iter_mut() {
            *slot = Complex::new(0.0, 0.0);
        }

        self.fft.process_with_scratch(buffer, scratch);
    }
}

/// Element-wise magnitude of a complex spectrogram
pub fn magnitude(stft: &Array2<Complex<f32>>) -> Array2<f32> {
    stft.mapv(|c| c.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(bin: usize, fft_length: usize, len: usize, sample_rate: f32) -> Vec<f32> {
        let freq = bin as f32 * sample_rate / fft_length as f32;
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_bin_counts() {
        let stft = Stft::new(255, 128, 255, WindowFunction::HannPeriodic).unwrap();
        assert_eq!(stft.num_freq_bins(), 128);
        assert_eq!(stft.num_time_bins(16_000), 124);
        assert_eq!(stft.num_time_bins(255), 1);
        assert_eq!(stft.num_time_bins(254), 0);

        let padded = Stft::new(255, 128, 256, WindowFunction::HannPeriodic).unwrap();
        assert_eq!(padded.num_freq_bins(), 129);
    }

    #[test]
    fn test_silence_is_zero() {
        let stft = Stft::new(255, 128, 255, WindowFunction::HannPeriodic).unwrap();
        let mags = stft.magnitudes(&vec![0.0f32; 16_000]);
        assert_eq!(mags.dim(), (124, 128));
        assert!(mags.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_tone_peaks_at_expected_bin() {
        let stft = Stft::new(255, 128, 255, WindowFunction::HannPeriodic).unwrap();
        let signal = tone(32, 255, 16_000, 16_000.0);
        let mags = stft.magnitudes(&signal);

        for row in mags.rows() {
            let (peak, _) = row
                .iter()
                .enumerate()
                .fold((0, f32::MIN), |best, (i, &m)| if m > best.1 { (i, m) } else { best });
            assert_eq!(peak, 32);
        }
    }

    #[test]
    fn test_magnitude_matches_complex_path() {
        let stft = Stft::new(64, 32, 64, WindowFunction::HannSymmetric).unwrap();
        let signal: Vec<f32> = (0..1000).map(|i| ((i * 7919) % 101) as f32 / 50.0 - 1.0).collect();

        let fused = stft.magnitudes(&signal);
        let via_complex = magnitude(&stft.compute(&signal));

        assert_eq!(fused.dim(), via_complex.dim());
        for (a, b) in fused.iter().zip(via_complex.iter()) {
            assert!((a - b).abs() < 1e-5);
            assert!(*a >= 0.0);
        }
    }

    #[test]
    fn test_rectangular_dc() {
        let stft = Stft::new(8, 8, 8, WindowFunction::Rectangular).unwrap();
        let mags = stft.magnitudes(&[1.0f32; 16]);
        assert_eq!(mags.dim(), (2, 5));
        assert!((mags[[0, 0]] - 8.0).abs() < 1e-5);
        assert!(mags[[0, 1]].abs() < 1e-5);
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(Stft::new(0, 128, 255, WindowFunction::HannPeriodic).is_err());
        assert!(Stft::new(255, 0, 255, WindowFunction::HannPeriodic).is_err());
        assert!(Stft::new(255, 128, 200, WindowFunction::HannPeriodic).is_err());
    }
}
