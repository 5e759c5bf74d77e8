// Spectral features via a direct DFT: centroid, rolloff, dominant frequency

/// Fraction of cumulative magnitude defining the rolloff point.
const ROLLOFF_FRACTION: f64 = 0.85;

/// Spectral summary of one analysis frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralFeatures {
    /// Magnitude-weighted mean frequency (Hz)
    pub centroid_hz: f32,
    /// Frequency below which 85% of spectral magnitude lies (Hz)
    pub rolloff_hz: f32,
}

/// Magnitude spectrum of the frame, all N bins. Frames are short (1-2k
/// samples), so the O(N^2) direct transform is acceptable here.
pub fn magnitude_spectrum(samples: &[f32]) -> Vec<f64> {
    let n: usize = samples.len();
    let mut magnitudes: Vec<f64> = Vec::with_capacity(n);

    for k in 0..n {
        let mut re: f64 = 0.0;
        let mut im: f64 = 0.0;

        for (i, &sample) in samples.iter().enumerate() {
            let angle: f64 =
                -2.0 * std::f64::consts::PI * (k as f64) * (i as f64) / n as f64;
            re += sample as f64 * angle.cos();
            im += sample as f64 * angle.sin();
        }

        magnitudes.push((re * re + im * im).sqrt());
    }

    magnitudes
}

/// Centroid and rolloff over the lower half-spectrum.
pub fn measure(samples: &[f32], sample_rate: u32) -> SpectralFeatures {
    let magnitudes: Vec<f64> = magnitude_spectrum(samples);
    let n: usize = magnitudes.len();
    let bin_hz: f64 = sample_rate as f64 / n as f64;

    let mut weighted: f64 = 0.0;
    let mut total: f64 = 0.0;
    for (k, magnitude) in magnitudes.iter().take(n / 2).enumerate() {
        weighted += k as f64 * bin_hz * magnitude;
        total += magnitude;
    }

    let centroid_hz: f64 = if total > 0.0 { weighted / total } else { 0.0 };

    let threshold: f64 = ROLLOFF_FRACTION * total;
    let mut cumulative: f64 = 0.0;
    let mut rolloff_hz: f64 = 0.0;
    for (k, magnitude) in magnitudes.iter().take(n / 2).enumerate() {
        cumulative += magnitude;
        if cumulative >= threshold {
            rolloff_hz = k as f64 * bin_hz;
            break;
        }
    }

    SpectralFeatures {
        centroid_hz: centroid_hz as f32,
        rolloff_hz: rolloff_hz as f32,
    }
}

/// Strongest bin inside [min_hz, max_hz]; 0 when nothing in the band has
/// any energy.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32, min_hz: f32, max_hz: f32) -> f32 {
    let magnitudes: Vec<f64> = magnitude_spectrum(samples);
    let n: usize = magnitudes.len();
    let bin_hz: f64 = sample_rate as f64 / n as f64;

    let mut best_magnitude: f64 = 0.0;
    let mut best_hz: f64 = 0.0;

    for (k, magnitude) in magnitudes.iter().take(n / 2).enumerate().skip(1) {
        let freq: f64 = k as f64 * bin_hz;
        if freq >= min_hz as f64 && freq <= max_hz as f64 && *magnitude > best_magnitude {
            best_magnitude = *magnitude;
            best_hz = freq;
        }
    }

    best_hz as f32
}
