//! HTTP surface of the three functions.
//!
//! Every route answers `OPTIONS` with a CORS preflight and `POST` with JSON.
//! Only a body that does not parse is reported as an error (500); provider
//! failures are absorbed by the fallbacks in each handler.

pub mod detect_mood;
pub mod future_self;
pub mod spotify_songs;

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{post, MethodRouter};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::service::CommonService;

pub const DETECT_MOOD_PATH: &str = "/detect-mood";
pub const FUTURE_SELF_PATH: &str = "/future-self";
pub const SPOTIFY_SONGS_PATH: &str = "/spotify-songs";

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";


fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers
}

pub fn build_error_response(message: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, cors_headers(), Json(json!({ "error": message }))).into_response()
}

pub fn build_success_response<T: Serialize>(body: &T) -> Response {
    (cors_headers(), Json(body)).into_response()
}

pub async fn preflight() -> Response {
    (cors_headers(), "ok").into_response()
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> anyhow::Result<T> {
    Ok(serde_json::from_slice(body)?)
}


pub fn detect_mood_route() -> MethodRouter<CommonService> {
    post(detect_mood::detect_mood).options(preflight)
}

pub fn future_self_route() -> MethodRouter<CommonService> {
    post(future_self::future_self).options(preflight)
}

pub fn spotify_songs_route() -> MethodRouter<CommonService> {
    post(spotify_songs::spotify_songs).options(preflight)
}

/// All three functions behind their public paths.
pub fn build_router(service: CommonService) -> Router {
    Router::new()
        .route(DETECT_MOOD_PATH, detect_mood_route())
        .route(FUTURE_SELF_PATH, future_self_route())
        .route(SPOTIFY_SONGS_PATH, spotify_songs_route())
        .with_state(service)
}

/// A single function deployed on its own answers on any path.
pub fn function_router(route: MethodRouter<CommonService>, service: CommonService) -> Router {
    Router::new()
        .route("/", route.clone())
        .route("/*path", route)
        .with_state(service)
}
