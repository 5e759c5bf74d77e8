//! tests/routes/voice_register.rs
//! The registration endpoint acknowledges the call with its placeholder
//! message until enrollment is wired up.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn register_acknowledges_with_placeholder() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/voice/register", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("TODO"), "body: {body}");

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("registration"));
}
