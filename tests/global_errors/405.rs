//! tests/global_errors/405.rs
//! Ensures that using the wrong HTTP method on a defined path returns 405.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_405_for_wrong_method_on_verify() {
    let base_url: String = common::spawn_app();

    // /voice/verify only accepts POST.
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/voice/verify", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn returns_405_for_wrong_method_on_health() {
    let base_url: String = common::spawn_app();

    // /health only accepts GET.
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
