use candle_core::Tensor;
use thiserror::Error;

// Per-bin std floor, relative to the largest std across all bins. Keeps the
// normalization divisor away from zero in near-silent frequency bands.
const STD_FLOOR_RATIO: f64 = 1e-4;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("expected frames with {expected} frequency bins, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("no frames seen, cannot produce statistics")]
    NoData,

    #[error(transparent)]
    Tensor(#[from] candle_core::Error),
}

/// Streaming mean/variance over spectrogram magnitude frames.
///
/// Uses Welford's online algorithm with one accumulator per frequency bin,
/// so a full dataset pass needs memory proportional to the bin count only.
/// The resulting (mean, std) pair is intended as the model input scaler.
#[derive(Clone, Debug, Default)]
pub struct StreamingStats {
    count: u64,
    mean: Vec<f64>,
    m2: Vec<f64>,
}

impl StreamingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate one frame, a vector of magnitudes with one entry per
    /// frequency bin. The first frame fixes the bin count; later frames
    /// must match it.
    pub fn update(&mut self, frame: &[f32]) -> Result<(), StatsError> {
        if self.count == 0 {
            self.mean = vec![0.0; frame.len()];
            self.m2 = vec![0.0; frame.len()];
        } else if frame.len() != self.mean.len() {
            return Err(StatsError::DimensionMismatch {
                expected: self.mean.len(),
                got: frame.len(),
            });
        }

        self.count += 1;
        let n = self.count as f64;

        for (bin, &value) in frame.iter().enumerate() {
            let value = value as f64;
            let delta = value - self.mean[bin];
            self.mean[bin] += delta / n;
            self.m2[bin] += delta * (value - self.mean[bin]);
        }

        Ok(())
    }

    /// Incorporate a whole `(frames, bins)` magnitude tensor, e.g. one
    /// track's spectrogram.
    pub fn update_spectrogram(&mut self, magnitudes: &Tensor) -> Result<(), StatsError> {
        let frames = magnitudes.to_vec2::<f32>()?;
        for frame in &frames {
            self.update(frame)?;
        }

        Ok(())
    }

    /// Number of frames seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of frequency bins, zero until the first frame arrives.
    pub fn num_bins(&self) -> usize {
        self.mean.len()
    }

    /// Consume the accumulator and return per-bin (mean, std).
    ///
    /// Std is the population standard deviation, floored per bin against
    /// `STD_FLOOR_RATIO` times the largest std. If every bin is constant
    /// the floor itself is zero and the zero stds pass through unchanged.
    pub fn finalize(self) -> Result<(Vec<f32>, Vec<f32>), StatsError> {
        if self.count == 0 {
            return Err(StatsError::NoData);
        }

        let n = self.count as f64;
        let std: Vec<f64> = self.m2.iter().map(|m2| (m2 / n).sqrt()).collect();
        let floor = STD_FLOOR_RATIO * std.iter().copied().fold(0.0f64, f64::max);

        let mean = self.mean.iter().map(|&m| m as f32).collect();
        let std = std.into_iter().map(|s| s.max(floor) as f32).collect();

        Ok((mean, std))
    }
}
