//! tests/routes/cors.rs
//! Cross-origin requests receive permissive CORS headers: the request
//! origin is mirrored and credentials are allowed.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn cross_origin_request_receives_allow_origin_header() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .header("Origin", "https://app.voiceguard.example")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let allow_origin = resp
        .headers()
        .get("access-control-allow-origin")
        .expect("missing access-control-allow-origin header");
    assert_eq!(allow_origin, "https://app.voiceguard.example");

    let allow_credentials = resp
        .headers()
        .get("access-control-allow-credentials")
        .expect("missing access-control-allow-credentials header");
    assert_eq!(allow_credentials, "true");
}

#[tokio::test]
async fn preflight_request_is_answered() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/voice/verify", base_url))
        .header("Origin", "https://app.voiceguard.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    assert!(resp.headers().contains_key("access-control-allow-methods"));
}
