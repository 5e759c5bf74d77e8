// Deterministic fingerprint digest over quantized voice features

use sha2::{Digest, Sha256};

/// Length of the hex digest kept as the fingerprint.
const DIGEST_LEN: usize = 8;

/// Quantizes the feature vector and condenses it into a short hex digest.
/// Identical features always produce the identical fingerprint.
pub fn digest(pitch_hz: f32, centroid_hz: f32, rolloff_hz: f32, zcr: f32, energy: f32) -> String {
    let feature_string: String = format!(
        "{}|{}|{}|{}|{}",
        pitch_hz.round() as i64,
        centroid_hz.round() as i64,
        rolloff_hz.round() as i64,
        (zcr * 10_000.0).round() as i64,
        (energy * 10_000.0).round() as i64,
    );

    let hash = Sha256::digest(feature_string.as_bytes());

    hash.iter()
        .take(DIGEST_LEN / 2)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
