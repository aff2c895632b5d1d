

use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use super::common_structs::Song;

pub const SEARCH_LIMIT: usize = 5;
const CLIENT_CREDENTIALS_BODY: &str = "grant_type=client_credentials";


#[derive(Debug, Clone)]
pub struct SpotifyService {
    client: Client,
    token_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<SearchTracks>,
}

#[derive(Debug, Deserialize)]
struct SearchTracks {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    preview_url: Option<String>,
    external_urls: Option<ExternalUrls>,
    album: Option<Album>,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
}

impl From<Track> for Song {
    fn from(track: Track) -> Self {
        Song {
            name: track.name,
            artist: track.artists.into_iter().next().map(|a| a.name).unwrap_or_default(),
            preview_url: track.preview_url,
            external_url: track.external_urls.and_then(|urls| urls.spotify),
            image: track.album.and_then(|album| album.images.into_iter().next()).map(|image| image.url),
        }
    }
}


impl SpotifyService {
    pub fn new(client: &Client, config: &ServiceConfig) -> Self {
        Self {
            client: client.to_owned(),
            token_url: config.spotify_token_url.to_owned(),
            api_url: config.spotify_api_url.trim_end_matches('/').to_owned(),
            client_id: config.spotify_client_id.to_owned(),
            client_secret: config.spotify_client_secret.to_owned(),
        }
    }

    /// Token exchange followed by a track search, at most `SEARCH_LIMIT` songs.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>> {
        let token = self.access_token().await?;
        self.search_tracks(&token, query).await
    }

    async fn access_token(&self) -> Result<String> {
        let response = self.client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(CLIENT_CREDENTIALS_BODY)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("token request returned {}", status);
        }

        let token: TokenResponse = response.json().await?;
        token.access_token
            .filter(|token| !token.is_empty())
            .context("token response has no access_token")
    }

    async fn search_tracks(&self, token: &str, query: &str) -> Result<Vec<Song>> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.api_url,
            urlencoding::encode(query),
            SEARCH_LIMIT
        );

        let response = self.client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("search returned {}", status);
        }

        let search: SearchResponse = response.json().await?;
        let songs: Vec<Song> = search.tracks
            .map(|tracks| tracks.items)
            .unwrap_or_default()
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(Song::from)
            .collect();

        debug!(query, count = songs.len(), "catalog search finished");
        Ok(songs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_maps_to_song() {
        let raw = serde_json::json!({
            "name": "Weightless",
            "artists": [{"name": "Marconi Union"}, {"name": "Other"}],
            "preview_url": null,
            "external_urls": {"spotify": "https://open.spotify.com/track/1"},
            "album": {"images": [{"url": "https://i.scdn.co/a.jpg"}, {"url": "https://i.scdn.co/b.jpg"}]}
        });
        let song = Song::from(serde_json::from_value::<Track>(raw).unwrap());
        assert_eq!(song.name, "Weightless");
        assert_eq!(song.artist, "Marconi Union");
        assert_eq!(song.preview_url, None);
        assert_eq!(song.external_url.as_deref(), Some("https://open.spotify.com/track/1"));
        assert_eq!(song.image.as_deref(), Some("https://i.scdn.co/a.jpg"));
    }

    #[test]
    fn sparse_track_is_tolerated() {
        let song = Song::from(serde_json::from_value::<Track>(serde_json::json!({"name": "Solo"})).unwrap());
        assert_eq!(song.artist, "");
        assert!(song.external_url.is_none() && song.image.is_none());

        let encoded = serde_json::to_value(&song).unwrap();
        assert!(encoded.get("preview_url").is_none());
    }
}
