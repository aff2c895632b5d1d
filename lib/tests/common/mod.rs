//! Shared helpers for the integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use soulsync::config::ServiceConfig;
use soulsync::service::CommonService;

/// Nothing listens here, so every provider call fails fast.
pub const CLOSED_URL: &str = "http://127.0.0.1:1";

pub fn offline_config() -> ServiceConfig {
    ServiceConfig {
        groq_api_url: format!("{}/chat", CLOSED_URL),
        groq_api_key: "test-key".to_owned(),
        spotify_token_url: format!("{}/token", CLOSED_URL),
        spotify_api_url: format!("{}/v1", CLOSED_URL),
        spotify_client_id: "id".to_owned(),
        spotify_client_secret: "secret".to_owned(),
        ..Default::default()
    }
}

pub fn offline_service() -> CommonService {
    CommonService::new(&offline_config())
}

/// Config whose providers all live on one mock server.
pub fn mock_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        groq_api_url: format!("{}/chat", base_url),
        groq_api_key: "test-key".to_owned(),
        spotify_token_url: format!("{}/token", base_url),
        spotify_api_url: format!("{}/v1", base_url),
        spotify_client_id: "id".to_owned(),
        spotify_client_secret: "secret".to_owned(),
        ..Default::default()
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn send(app: Router, method: &str, path: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = send(app, "POST", path, body).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn song_names(songs: &Value) -> Vec<String> {
    songs
        .as_array()
        .unwrap()
        .iter()
        .map(|song| song["name"].as_str().unwrap().to_owned())
        .collect()
}
