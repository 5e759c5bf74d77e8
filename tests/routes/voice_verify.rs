//! tests/routes/voice_verify.rs
//! The verification endpoint accepts an uploaded payload and acknowledges
//! the call with its placeholder message.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn verify_acknowledges_with_placeholder() {
    let base_url: String = common::spawn_app();

    // A small payload standing in for a voice recording.
    let payload: Vec<u8> = vec![0u8; 1024];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/voice/verify", base_url))
        .body(payload)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("TODO"), "body: {body}");

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("verification"));
}
