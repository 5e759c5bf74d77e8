// Pitch detection: framewise autocorrelation with a zero-crossing assist
// and an outlier-robust median

use super::AnalyzerConfig;

/// Frames whose mean-square energy falls below this are treated as silence.
const SILENT_FRAME_FLOOR: f32 = 1e-6;
/// Minimum normalized correlation for a period to count as voiced.
const CORRELATION_FLOOR: f32 = 0.3;
/// The zero-crossing estimate assists only while fewer than this many
/// autocorrelation votes exist.
const MIN_PRIMARY_VOTES: usize = 3;

/// Collects per-frame pitch estimates across the clip.
pub fn frame_estimates(samples: &[f32], config: &AnalyzerConfig) -> Vec<f32> {
    let frame_len: usize = config.pitch_frame_len;
    let hop: usize = config.pitch_hop_len;

    let mut estimates: Vec<f32> = Vec::new();
    let mut start: usize = 0;

    while start + frame_len < samples.len() {
        let frame: &[f32] = &samples[start..start + frame_len];
        start += hop;

        let mean_square: f32 =
            frame.iter().map(|s| s * s).sum::<f32>() / frame.len() as f32;
        if mean_square < SILENT_FRAME_FLOOR {
            continue;
        }

        let primary: f32 = autocorrelation_pitch(
            frame,
            config.sample_rate,
            config.min_pitch_hz,
            config.max_pitch_hz,
        );
        if primary > config.min_pitch_hz && primary < config.max_pitch_hz {
            estimates.push(primary);
        }

        if estimates.len() < MIN_PRIMARY_VOTES {
            let assist: f32 = zero_crossing_pitch(
                frame,
                config.sample_rate,
                config.min_pitch_hz,
                config.max_pitch_hz,
            );
            if assist > config.min_pitch_hz && assist < config.max_pitch_hz {
                estimates.push(assist);
            }
        }
    }

    estimates
}

/// Normalized autocorrelation pitch estimate for one frame. Returns 0 when
/// no period inside the configured range clears the correlation floor.
pub fn autocorrelation_pitch(
    frame: &[f32],
    sample_rate: u32,
    min_pitch_hz: f32,
    max_pitch_hz: f32,
) -> f32 {
    let min_period: usize = (sample_rate as f32 / max_pitch_hz) as usize;
    let max_period: usize = (sample_rate as f32 / min_pitch_hz) as usize;

    let frame_energy: f32 = frame.iter().map(|s| s * s).sum();
    if frame_energy < SILENT_FRAME_FLOOR {
        return 0.0;
    }

    let mut best_period: usize = 0;
    let mut best_correlation: f32 = -1.0;

    for period in min_period..=max_period {
        if period >= frame.len() / 2 {
            break;
        }

        let mut correlation: f32 = 0.0;
        let mut energy_head: f32 = 0.0;
        let mut energy_tail: f32 = 0.0;

        for i in 0..frame.len() - period {
            correlation += frame[i] * frame[i + period];
            energy_head += frame[i] * frame[i];
            energy_tail += frame[i + period] * frame[i + period];
        }

        let normalizer: f32 = (energy_head * energy_tail).sqrt();
        if normalizer > 0.0 {
            let normalized: f32 = correlation / normalizer;
            if normalized > best_correlation && normalized > CORRELATION_FLOOR {
                best_correlation = normalized;
                best_period = period;
            }
        }
    }

    if best_period > 0 {
        sample_rate as f32 / best_period as f32
    } else {
        0.0
    }
}

/// Zero-crossing pitch estimate; crude, used only to assist sparse frames.
pub fn zero_crossing_pitch(
    frame: &[f32],
    sample_rate: u32,
    min_pitch_hz: f32,
    max_pitch_hz: f32,
) -> f32 {
    let crossings: usize = frame
        .windows(2)
        .filter(|pair| (pair[1] >= 0.0) != (pair[0] >= 0.0))
        .count();

    let estimate: f32 = crossings as f32 / (2.0 * frame.len() as f32 / sample_rate as f32);

    if estimate > min_pitch_hz && estimate < max_pitch_hz {
        estimate
    } else {
        0.0
    }
}

/// Median of the estimates after IQR outlier rejection. Returns 0 for an
/// empty set.
pub fn median_pitch(estimates: &[f32]) -> f32 {
    if estimates.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<f32> = estimates.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1: f32 = sorted[(sorted.len() as f32 * 0.25) as usize];
    let q3: f32 = sorted[(sorted.len() as f32 * 0.75) as usize];
    let reach: f32 = 1.5 * (q3 - q1);

    let kept: Vec<f32> = sorted
        .iter()
        .copied()
        .filter(|p| *p >= q1 - reach && *p <= q3 + reach)
        .collect();

    if kept.is_empty() {
        return 0.0;
    }

    let mid: usize = kept.len() / 2;
    if kept.len() % 2 == 0 {
        (kept[mid - 1] + kept[mid]) / 2.0
    } else {
        kept[mid]
    }
}
