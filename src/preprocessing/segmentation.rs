//! Fixed-length frame segmentation
//!
//! Algorithm:
//! 1. `remainder = len % frame_length`
//! 2. If `remainder != 0`, append `frame_length - remainder` zeros to the tail
//! 3. Reshape into `len / frame_length` contiguous, non-overlapping frames
//!
//! An empty waveform yields an empty batch.
//!
//! # Example
//!
//! ```
//! use wav_spectro::io::Waveform;
//! use wav_spectro::preprocessing::slice_audio_to_time_series;
//!
//! let waveform = Waveform::new(vec![0.1f32; 24_000], 16_000);
//! let frames = slice_audio_to_time_series(&waveform, 16_000)?;
//! assert_eq!(frames.num_frames(), 2);
//! # Ok::<(), wav_spectro::SpectrogramError>(())
//! ```

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::SpectrogramError;
use crate::io::waveform::Waveform;

/// Sequence of equal-length frames, `[num_frames, frame_length]`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBatch {
    frames: Array2<f32>,
}

impl FrameBatch {
    /// Wrap an existing `[num_frames, frame_length]` array
    pub fn from_array(frames: Array2<f32>) -> Self {
        Self { frames }
    }

    /// Number of frames
    pub fn num_frames(&self) -> usize {
        self.frames.nrows()
    }

    /// Samples per frame
    pub fn frame_length(&self) -> usize {
        self.frames.ncols()
    }

    /// True when the batch holds no frames
    pub fn is_empty(&self) -> bool {
        self.num_frames() == 0
    }

    /// Frame `index`, if present
    pub fn frame(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.num_frames()).then(|| self.frames.row(index))
    }

    /// Iterate frames in temporal order
    pub fn rows(&self) -> ndarray::iter::Lanes<'_, f32, ndarray::Ix1> {
        self.frames.rows()
    }

    /// Borrow the underlying array
    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.frames.view()
    }

    /// Take ownership of the underlying array
    pub fn into_array(self) -> Array2<f32> {
        self.frames
    }
}

/// Number of zeros needed to bring `len` up to a multiple of `frame_length`
pub fn padding_for(len: usize, frame_length: usize) -> usize {
    match len % frame_length {
        0 => 0,
        remainder => frame_length - remainder,
    }
}

/// Zero-pad the tail of a waveform and slice it into fixed-length frames
///
/// # Arguments
///
/// * `waveform` - Decoded mono waveform
/// * `frame_length` - Samples per frame (16000 for one second at 16 kHz)
///
/// # Returns
///
/// `ceil(len / frame_length)` frames in original order; the last frame is
/// zero-filled beyond the end of the waveform.
///
/// # Errors
///
/// Returns `SpectrogramError::InvalidInput` if `frame_length` is 0
pub fn slice_audio_to_time_series(
    waveform: &Waveform,
    frame_length: usize,
) -> Result<FrameBatch, SpectrogramError> {
    if frame_length == 0 {
        return Err(SpectrogramError::InvalidInput(
            "Frame length must be > 0".to_string(),
        ));
    }

    let samples = waveform.samples();
    let pad = padding_for(samples.len(), frame_length);

    let mut padded = Vec::with_capacity(samples.len() + pad);
    padded.extend_from_slice(samples);
    padded.resize(samples.len() + pad, 0.0);

    let num_frames = padded.len() / frame_length;
    log::debug!(
        "Segmenting {} samples (+{} padding) into {} frames of {}",
        samples.len(),
        pad,
        num_frames,
        frame_length
    );

    let frames = Array2::from_shape_vec((num_frames, frame_length), padded)?;
    Ok(FrameBatch { frames })
}
