//! tests/routes/root.rs
//! The root banner advertises the service name and version.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn root_returns_the_service_banner() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("VoiceGuard API v0.1.0"), "body: {body}");

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Voice ownership infrastructure"));
}
