//! Per-frame magnitude spectrograms stacked into a sequence
//!
//! Each frame of a [`FrameBatch`] goes through STFT and magnitude, then gains a
//! trailing channel axis: `[time_bins, freq_bins, 1]`. The results are stacked
//! in frame order into `[num_frames, time_bins, freq_bins, 1]`.

use ndarray::{Array3, Array4, ArrayView1, ArrayView3, Axis};
use rayon::prelude::*;

use crate::config::SpectrogramConfig;
use crate::error::SpectrogramError;
use crate::features::stft::Stft;
use crate::preprocessing::segmentation::FrameBatch;

/// Magnitude spectrogram of one frame, `[time_bins, freq_bins, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    data: Array3<f32>,
}

impl Spectrogram {
    /// `[time_bins, freq_bins, 1]`
    pub fn shape(&self) -> [usize; 3] {
        let (t, f, c) = self.data.dim();
        [t, f, c]
    }

    /// Borrow the values
    pub fn as_array(&self) -> &Array3<f32> {
        &self.data
    }

    /// Take ownership of the values
    pub fn into_array(self) -> Array3<f32> {
        self.data
    }
}

/// Ordered spectrograms, `[num_frames, time_bins, freq_bins, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramSequence {
    data: Array4<f32>,
}

impl SpectrogramSequence {
    /// Stack spectrograms that all have shape `[time_bins, freq_bins, 1]`
    ///
    /// # Errors
    ///
    /// Returns `SpectrogramError::ShapeError` if any entry has another shape
    pub fn from_spectrograms(
        spectrograms: &[Spectrogram],
        time_bins: usize,
        freq_bins: usize,
    ) -> Result<Self, SpectrogramError> {
        let expected = [time_bins, freq_bins, 1];
        let mut data = Array4::<f32>::zeros((spectrograms.len(), time_bins, freq_bins, 1));

        for (i, (spec, mut slot)) in spectrograms
            .iter()
            .zip(data.axis_iter_mut(Axis(0)))
            .enumerate()
        {
            if spec.shape() != expected {
                return Err(SpectrogramError::ShapeError(format!(
                    "Spectrogram {} has shape {:?}, expected {:?}",
                    i,
                    spec.shape(),
                    expected
                )));
            }
            slot.assign(&spec.data);
        }

        Ok(Self { data })
    }

    /// Number of spectrograms
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// True when the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `[num_frames, time_bins, freq_bins, 1]`
    pub fn shape(&self) -> [usize; 4] {
        let (n, t, f, c) = self.data.dim();
        [n, t, f, c]
    }

    /// Spectrogram at `index`
    pub fn get(&self, index: usize) -> Option<ArrayView3<'_, f32>> {
        (index < self.len()).then(|| self.data.index_axis(Axis(0), index))
    }

    /// Iterate spectrograms in frame order
    pub fn iter(&self) -> ndarray::iter::AxisIter<'_, f32, ndarray::Ix3> {
        self.data.axis_iter(Axis(0))
    }

    /// Borrow the dense array
    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    /// Take ownership of the dense array
    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}

/// Turns frame batches into spectrogram sequences
///
/// Holds the planned STFT, so reuse one sequencer across files with the same config.
#[derive(Debug, Clone)]
pub struct SpectrogramSequencer {
    config: SpectrogramConfig,
    stft: Stft,
}

impl SpectrogramSequencer {
    /// Validate `config` and plan the STFT
    pub fn new(config: SpectrogramConfig) -> Result<Self, SpectrogramError> {
        config.validate()?;
        let stft = Stft::new(
            config.window_length,
            config.hop_length,
            config.fft_size(),
            config.window,
        )?;
        Ok(Self { config, stft })
    }

    /// Configuration in use
    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }

    /// Spectrogram of a single frame
    ///
    /// # Errors
    ///
    /// Returns `SpectrogramError::ShapeError` if the frame length differs from
    /// the configured frame length
    pub fn frame_spectrogram(&self, frame: ArrayView1<f32>) -> Result<Spectrogram, SpectrogramError> {
        if frame.len() != self.config.frame_length {
            return Err(SpectrogramError::ShapeError(format!(
                "Frame has {} samples, expected {}",
                frame.len(),
                self.config.frame_length
            )));
        }

        let mags = match frame.as_slice() {
            Some(samples) => self.stft.magnitudes(samples),
            None => self.stft.magnitudes(&frame.to_vec()),
        };

        Ok(Spectrogram {
            data: mags.insert_axis(Axis(2)),
        })
    }

    /// Spectrograms for every frame, in frame order
    ///
    /// With `config.parallel` the frames are spread over the rayon pool; the
    /// output is identical to the sequential path.
    ///
    /// # Errors
    ///
    /// Returns `SpectrogramError::ShapeError` if the batch frame length differs
    /// from the configured frame length
    pub fn process(&self, frames: &FrameBatch) -> Result<SpectrogramSequence, SpectrogramError> {
        if frames.frame_length() != self.config.frame_length {
            return Err(SpectrogramError::ShapeError(format!(
                "Frame batch has frame length {}, expected {}",
                frames.frame_length(),
                self.config.frame_length
            )));
        }

        log::debug!(
            "Computing {} spectrograms (parallel={})",
            frames.num_frames(),
            self.config.parallel
        );

        let view = frames.view();
        let spectrograms = if self.config.parallel {
            (0..frames.num_frames())
                .into_par_iter()
                .map(|i| self.frame_spectrogram(view.row(i)))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            view.rows()
                .into_iter()
                .map(|row| self.frame_spectrogram(row))
                .collect::<Result<Vec<_>, _>>()?
        };

        SpectrogramSequence::from_spectrograms(
            &spectrograms,
            self.config.num_time_bins(),
            self.config.num_freq_bins(),
        )
    }
}
