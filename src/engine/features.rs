// Temporal features: zero-crossing rate and RMS energy

/// Sign changes per sample across the clip.
pub fn zero_crossing_rate(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let crossings: usize = samples
        .windows(2)
        .filter(|pair| (pair[1] >= 0.0) != (pair[0] >= 0.0))
        .count();

    crossings as f32 / samples.len() as f32
}

/// Root-mean-square energy of the clip.
pub fn rms_energy(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}
