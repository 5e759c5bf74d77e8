// Voice fingerprinting engine.
//
// Port of the VoiceGuard capture pipeline's fingerprinting stage: a voice
// recording (mono f32 PCM) is reduced to a small set of acoustic features
// (pitch, spectral centroid and rolloff, zero-crossing rate, RMS energy),
// classified, scored for confidence, and condensed into a deterministic
// 8-hex-char digest.

pub mod features;
pub mod fingerprint;
pub mod pitch;
pub mod preprocess;
pub mod spectral;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use self::spectral::SpectralFeatures;

/// Tuning knobs for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Sample rate of incoming recordings (Hz)
    pub sample_rate: u32,
    /// Minimum human pitch (Hz)
    pub min_pitch_hz: f32,
    /// Maximum human pitch (Hz)
    pub max_pitch_hz: f32,
    /// Analysis frame length for pitch detection (samples)
    pub pitch_frame_len: usize,
    /// Hop between pitch frames (samples)
    pub pitch_hop_len: usize,
    /// Frame length for the spectral feature DFT (samples)
    pub spectral_frame_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            min_pitch_hz: 50.0,
            max_pitch_hz: 800.0,
            pitch_frame_len: 4096,
            pitch_hop_len: 2048,
            spectral_frame_len: 1024,
        }
    }
}

/// Coarse voice register classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceType {
    VeryLowPitch,
    Male,
    HighMaleLowFemale,
    Female,
    VeryHighPitch,
    Unclear,
}

/// Recording quality assessment derived from confidence and energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Observed pitch extremes across voiced frames (Hz).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRange {
    pub min_hz: f32,
    pub max_hz: f32,
}

/// The extracted voice fingerprint and its supporting features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceFingerprint {
    /// Deterministic 8-hex-char digest of the quantized features
    pub fingerprint: String,
    /// Fundamental frequency estimate (Hz)
    pub pitch_hz: f32,
    /// RMS energy of the conditioned signal
    pub energy: f32,
    /// Spectral centroid (Hz)
    pub brightness_hz: f32,
    /// Zero-crossing rate (crossings per sample)
    pub texture: f32,
    /// Heuristic confidence score, 10..=100
    pub confidence: u8,
    pub voice_type: VoiceType,
    /// Present only when at least one frame was voiced
    pub pitch_range: Option<PitchRange>,
    pub quality: SignalQuality,
}

/// Stateless analyzer; one instance per configuration.
#[derive(Debug, Clone, Default)]
pub struct VoiceAnalyzer {
    config: AnalyzerConfig,
}

impl VoiceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full analysis pipeline over a mono PCM clip.
    pub fn extract_fingerprint(&self, samples: &[f32]) -> Result<VoiceFingerprint> {
        if samples.is_empty() {
            bail!("cannot fingerprint an empty recording");
        }
        if samples.len() < self.config.spectral_frame_len {
            bail!(
                "recording too short: {} samples (minimum {})",
                samples.len(),
                self.config.spectral_frame_len
            );
        }

        debug!(
            "processing {} samples at {}Hz",
            samples.len(),
            self.config.sample_rate
        );

        let processed: Vec<f32> = preprocess::prepare(samples, self.config.sample_rate);

        let estimates: Vec<f32> = pitch::frame_estimates(&processed, &self.config);
        let mut pitch_hz: f32 = pitch::median_pitch(&estimates);
        debug!("{} pitch estimates, median {pitch_hz}Hz", estimates.len());

        if pitch_hz == 0.0 {
            // No frame voted: fall back to the dominant in-range frequency
            let tail: usize = processed.len().min(2 * self.config.spectral_frame_len);
            pitch_hz = spectral::dominant_frequency(
                &processed[..tail],
                self.config.sample_rate,
                self.config.min_pitch_hz,
                self.config.max_pitch_hz,
            );
            debug!("fallback pitch: {pitch_hz}Hz");
        }

        let spectrum: SpectralFeatures = spectral::measure(
            &processed[..self.config.spectral_frame_len],
            self.config.sample_rate,
        );
        let zcr: f32 = features::zero_crossing_rate(&processed);
        let energy: f32 = features::rms_energy(&processed);

        let voice_type: VoiceType = classify_voice_type(pitch_hz, energy);
        let confidence: u8 = score_confidence(&estimates, energy, &spectrum);
        let quality: SignalQuality = assess_quality(energy, confidence);

        let pitch_range: Option<PitchRange> = if estimates.is_empty() {
            None
        } else {
            let min_hz: f32 = estimates.iter().copied().fold(f32::INFINITY, f32::min);
            let max_hz: f32 = estimates.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            Some(PitchRange {
                min_hz: min_hz.round(),
                max_hz: max_hz.round(),
            })
        };

        Ok(VoiceFingerprint {
            fingerprint: fingerprint::digest(
                pitch_hz,
                spectrum.centroid_hz,
                spectrum.rolloff_hz,
                zcr,
                energy,
            ),
            pitch_hz: round_to(pitch_hz, 1),
            energy: round_to(energy, 4),
            brightness_hz: spectrum.centroid_hz.round(),
            texture: round_to(zcr, 4),
            confidence,
            voice_type,
            pitch_range,
            quality,
        })
    }
}

/// Register classification thresholds from the capture pipeline.
fn classify_voice_type(pitch_hz: f32, energy: f32) -> VoiceType {
    if energy < 0.001 {
        return VoiceType::Unclear;
    }

    if pitch_hz < 85.0 {
        VoiceType::VeryLowPitch
    } else if pitch_hz < 165.0 {
        VoiceType::Male
    } else if pitch_hz < 265.0 {
        if pitch_hz > 200.0 {
            VoiceType::Female
        } else {
            VoiceType::HighMaleLowFemale
        }
    } else if pitch_hz < 400.0 {
        VoiceType::Female
    } else {
        VoiceType::VeryHighPitch
    }
}

/// Heuristic confidence: pitch consistency, signal energy and plausible
/// spectral content each add to a base of 50.
fn score_confidence(estimates: &[f32], energy: f32, spectrum: &SpectralFeatures) -> u8 {
    let mut confidence: f32 = 50.0;

    if estimates.len() > 3 {
        let mean: f32 = estimates.iter().sum::<f32>() / estimates.len() as f32;
        let variance: f32 = estimates
            .iter()
            .map(|p| (p - mean) * (p - mean))
            .sum::<f32>()
            / estimates.len() as f32;
        let variation: f32 = variance.sqrt() / mean;

        if variation < 0.1 {
            confidence += 30.0;
        } else if variation < 0.2 {
            confidence += 20.0;
        } else if variation < 0.3 {
            confidence += 10.0;
        }
    }

    if energy > 0.01 {
        confidence += 15.0;
    } else if energy > 0.005 {
        confidence += 10.0;
    } else if energy > 0.001 {
        confidence += 5.0;
    }

    if spectrum.centroid_hz > 100.0 && spectrum.centroid_hz < 4000.0 {
        confidence += 5.0;
    }

    confidence.clamp(10.0, 100.0).round() as u8
}

fn assess_quality(energy: f32, confidence: u8) -> SignalQuality {
    if confidence > 80 && energy > 0.01 {
        SignalQuality::Excellent
    } else if confidence > 60 && energy > 0.005 {
        SignalQuality::Good
    } else if confidence > 40 && energy > 0.001 {
        SignalQuality::Fair
    } else {
        SignalQuality::Poor
    }
}

fn round_to(value: f32, places: i32) -> f32 {
    let factor: f32 = 10f32.powi(places);
    (value * factor).round() / factor
}
