//! tests/global_errors/413.rs
//! Ensures that sending a large payload (> 2MB by default) triggers 413.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app();

    // Generate a payload slightly larger than 2MB.
    let oversized_payload: Vec<u8> = vec![b'X'; 2_097_152 + 100];

    let client: reqwest::Client = reqwest::Client::new();
    let resp: reqwest::Response = client
        .post(format!("{}/voice/verify", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
