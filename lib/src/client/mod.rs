//! Client side of SoulSync: calls the functions and keeps playback state.
//!
//! [`ApiClient`] talks to the deployed functions and degrades locally when a
//! call fails. [`CommonService`](crate::service::CommonService) implements the
//! same traits in-process (see `local`), which is what the CLI uses when no
//! remote URL is configured.

pub mod avatar;
pub mod local;
pub mod player;

use std::env;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::env_or;
use crate::env_keys::{SOULSYNC_API_URL, SUPABASE_ANON_KEY};
use crate::handlers::{DETECT_MOOD_PATH, FUTURE_SELF_PATH, SPOTIFY_SONGS_PATH};
use crate::mood::keyword_matcher::KeywordMoodMatcher;
use crate::mood::Mood;
use crate::service::common_structs::{
    DetectMoodRequest, FutureSelfRequest, MoodResult, PersonaResponse, Song, SpotifySongsRequest,
    UserProfile,
};
use crate::tables::StaticMusicTables;
use crate::utilities::with_fallback;

pub const DEFAULT_API_URL: &str = "http://localhost:54321/functions/v1";


/// Mood and persona lookups. Implementations never fail; they degrade instead.
#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn detect_mood(&self, journal: &str) -> MoodResult;
    async fn future_self(&self, journal: &str, profile: &UserProfile, mood: Mood) -> PersonaResponse;
}

/// Where the player gets its tracks from.
#[async_trait]
pub trait MusicSource: Send + Sync {
    async fn ai_track(&self, mood: Mood) -> Result<String>;
    async fn songs(&self, mood: Mood) -> Result<Vec<Song>>;
}


#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
    tables: Arc<StaticMusicTables>,
    matcher: Arc<KeywordMoodMatcher>,
}

impl ApiClient {
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            bearer_token: bearer_token.filter(|token| !token.is_empty()),
            tables: Arc::new(StaticMusicTables::new()),
            matcher: Arc::new(KeywordMoodMatcher::new()),
        }
    }

    /// Empty values count as unset, the same as for [`ServiceConfig`](crate::config::ServiceConfig).
    pub fn from_env() -> Self {
        let base_url = env_or(SOULSYNC_API_URL, DEFAULT_API_URL);
        Self::new(&base_url, env::var(SUPABASE_ANON_KEY).ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tables(&self) -> Arc<StaticMusicTables> {
        self.tables.clone()
    }

    async fn post_json<B: Serialize + Sync, R: DeserializeOwned + Send>(&self, path: &str, body: &B) -> Result<R> {
        let mut request = self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!("{} returned {}", path, status);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JournalApi for ApiClient {
    async fn detect_mood(&self, journal: &str) -> MoodResult {
        let body = DetectMoodRequest { journal: journal.to_owned() };
        with_fallback(
            "client detect-mood",
            self.post_json(DETECT_MOOD_PATH, &body),
            || MoodResult::new(self.matcher.detect(journal), None),
        ).await
    }

    async fn future_self(&self, journal: &str, profile: &UserProfile, mood: Mood) -> PersonaResponse {
        let body = FutureSelfRequest {
            journal: journal.to_owned(),
            user_data: profile.to_owned(),
            mood: mood.as_str().to_owned(),
        };
        let reply: PersonaResponse = with_fallback(
            "client future-self",
            self.post_json(FUTURE_SELF_PATH, &body),
            || self.tables.pick_persona_fallback(mood),
        ).await;

        if reply.is_complete() {
            reply
        } else {
            warn!("future-self reply has empty fields, using canned reply");
            self.tables.pick_persona_fallback(mood)
        }
    }
}

#[async_trait]
impl MusicSource for ApiClient {
    async fn ai_track(&self, mood: Mood) -> Result<String> {
        Ok(self.tables.ai_track(mood).to_owned())
    }

    async fn songs(&self, mood: Mood) -> Result<Vec<Song>> {
        let body = SpotifySongsRequest { mood: mood.as_str().to_owned() };
        let songs = with_fallback(
            "client spotify-songs",
            self.post_json(SPOTIFY_SONGS_PATH, &body),
            || self.tables.fallback_songs(mood).to_vec(),
        ).await;
        Ok(songs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_url_uses_default() {
        env::set_var(SOULSYNC_API_URL, "");
        assert_eq!(ApiClient::from_env().base_url(), DEFAULT_API_URL);

        env::set_var(SOULSYNC_API_URL, "http://functions.test/v1/");
        assert_eq!(ApiClient::from_env().base_url(), "http://functions.test/v1");
        env::remove_var(SOULSYNC_API_URL);
    }

    #[test]
    fn empty_bearer_token_is_dropped() {
        let client = ApiClient::new(DEFAULT_API_URL, Some(String::new()));
        assert!(client.bearer_token.is_none());
    }
}
