use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrequencyError {
    #[error("no FFT bin lies at or below {bandwidth} Hz")]
    EmptyBandwidth { bandwidth: f32 },
}

/// Largest FFT bin index whose center frequency does not exceed `bandwidth`.
///
/// Bin centers follow the linear grid `k * sample_rate / n_fft` for
/// `k in 0..=n_fft / 2`. Used to cap the model input at a frequency
/// bandwidth instead of the full spectrum.
pub fn bandwidth_to_max_bin(
    sample_rate: u32,
    n_fft: usize,
    bandwidth: f32,
) -> Result<usize, FrequencyError> {
    let mut max_bin = None;

    for k in 0..=n_fft / 2 {
        let freq = k as f64 * sample_rate as f64 / n_fft as f64;
        if freq <= bandwidth as f64 {
            max_bin = Some(k);
        }
    }

    max_bin.ok_or(FrequencyError::EmptyBandwidth { bandwidth })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trainer_settings() {
        // floor(16000 * 4096 / 44100) = 1486
        assert_eq!(bandwidth_to_max_bin(44100, 4096, 16000.0).unwrap(), 1486);
    }

    #[test]
    fn test_zero_bandwidth_keeps_dc_bin() {
        assert_eq!(bandwidth_to_max_bin(44100, 4096, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_full_bandwidth_keeps_all_bins() {
        assert_eq!(bandwidth_to_max_bin(44100, 4096, 44100.0).unwrap(), 2048);
    }

    #[test]
    fn test_negative_bandwidth_is_empty() {
        assert!(matches!(
            bandwidth_to_max_bin(44100, 4096, -1.0),
            Err(FrequencyError::EmptyBandwidth { .. })
        ));
    }
}
