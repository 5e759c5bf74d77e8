// Audio preprocessing: DC removal, rumble filtering, peak normalization

use std::f32::consts::PI;

/// Low-frequency content below this is treated as rumble, not voice.
const RUMBLE_CUTOFF_HZ: f32 = 80.0;

/// Conditions raw samples for analysis: removes the DC offset, filters
/// rumble below 80Hz, and normalizes the peak to [-1, 1].
pub fn prepare(samples: &[f32], sample_rate: u32) -> Vec<f32> {
    let mut out: Vec<f32> = remove_dc(samples);
    high_pass(&mut out, RUMBLE_CUTOFF_HZ, sample_rate);
    normalize(&mut out);
    out
}

/// Subtracts the mean so the signal is centered around zero.
pub fn remove_dc(samples: &[f32]) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mean: f32 = samples.iter().sum::<f32>() / samples.len() as f32;
    samples.iter().map(|s| s - mean).collect()
}

/// Single-pole RC high-pass filter, applied in place.
pub fn high_pass(samples: &mut [f32], cutoff_hz: f32, sample_rate: u32) {
    if samples.len() < 2 {
        return;
    }

    let rc: f32 = 1.0 / (2.0 * PI * cutoff_hz);
    let dt: f32 = 1.0 / sample_rate as f32;
    let alpha: f32 = rc / (rc + dt);

    let mut prev_input: f32 = samples[0];
    let mut prev_output: f32 = samples[0];

    for i in 1..samples.len() {
        let input: f32 = samples[i];
        samples[i] = alpha * (prev_output + input - prev_input);
        prev_input = input;
        prev_output = samples[i];
    }
}

/// Scales samples so the largest magnitude is 1. Silence is left untouched.
pub fn normalize(samples: &mut [f32]) {
    let peak: f32 = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    if peak > 0.0 {
        for s in samples.iter_mut() {
            *s /= peak;
        }
    }
}
