//! Window functions applied to STFT segments

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Window shape applied before each FFT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowFunction {
    /// Periodic Hann: `0.5 - 0.5 * cos(2πn / N)`
    HannPeriodic,
    /// Symmetric Hann: `0.5 - 0.5 * cos(2πn / (N - 1))`
    HannSymmetric,
    /// All ones
    Rectangular,
}

impl WindowFunction {
    /// Generate `len` window coefficients
    pub fn generate(self, len: usize) -> Vec<f32> {
        match self {
            WindowFunction::HannPeriodic => hann(len, len as f32),
            WindowFunction::HannSymmetric if len <= 1 => vec![1.0; len],
            WindowFunction::HannSymmetric => hann(len, (len - 1) as f32),
            WindowFunction::Rectangular => vec![1.0; len],
        }
    }
}

fn hann(len: usize, denom: f32) -> Vec<f32> {
    (0..len)
        .map(|n| 0.5 - 0.5 * (2.0 * PI * n as f32 / denom).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_hann() {
        let w = WindowFunction::HannPeriodic.generate(4);
        let expected = [0.0, 0.5, 1.0, 0.5];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6, "{:?}", w);
        }
    }

    #[test]
    fn test_symmetric_hann_endpoints() {
        let w = WindowFunction::HannSymmetric.generate(5);
        assert!(w[0].abs() < 1e-6);
        assert!(w[4].abs() < 1e-6);
        assert!((w[2] - 1.0).abs() < 1e-6);
        assert_eq!(WindowFunction::HannSymmetric.generate(1), vec![1.0]);
        assert!(WindowFunction::HannSymmetric.generate(0).is_empty());
    }

    #[test]
    fn test_lengths() {
        assert_eq!(WindowFunction::HannPeriodic.generate(255).len(), 255);
        assert!(WindowFunction::Rectangular.generate(0).is_empty());
    }
}
