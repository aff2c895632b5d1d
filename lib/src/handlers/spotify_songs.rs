
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

use crate::mood::Mood;
use crate::service::common_structs::{Song, SpotifySongsRequest};
use crate::service::CommonService;
use crate::tables::DEFAULT_SEARCH_QUERY;
use crate::utilities::with_fallback;
use super::{build_error_response, build_success_response, parse_body};


/// Songs for a mood name as sent by the client.
///
/// An unknown name searches the catalog with a generic query and falls back
/// to the thoughtful list.
pub async fn handle(service: &CommonService, mood: &str) -> Vec<Song> {
    let known = mood.parse::<Mood>().ok();
    let query = match known {
        Some(mood) => service.tables.search_query(mood),
        None => DEFAULT_SEARCH_QUERY,
    };

    with_fallback(
        "spotify-songs",
        service.spotify.search_songs(query),
        || service.tables.fallback_songs(known.unwrap_or(Mood::DEFAULT)).to_vec(),
    ).await
}


pub async fn spotify_songs(
    State(service): State<CommonService>,
    body: Bytes
) -> Response {
    let request_id = Uuid::new_v4();

    let request = match parse_body::<SpotifySongsRequest>(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%request_id, error = %error, "invalid spotify-songs body");
            return build_error_response(&error.to_string());
        },
    };

    let songs = handle(&service, &request.mood).await;
    info!(%request_id, mood = %request.mood, count = songs.len(), "songs resolved");
    build_success_response(&songs)
}
