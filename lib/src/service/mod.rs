pub mod groq_service;
pub mod spotify_service;
pub mod common_structs;

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::mood::keyword_matcher::KeywordMoodMatcher;
use crate::tables::StaticMusicTables;


/// Everything a handler needs, built once per process and cloned into each request.
#[derive(Debug, Clone)]
pub struct CommonService {
    pub groq: groq_service::GroqService,
    pub spotify: spotify_service::SpotifyService,
    pub tables: Arc<StaticMusicTables>,
    pub matcher: Arc<KeywordMoodMatcher>,
}

impl CommonService {
    pub fn new(config: &ServiceConfig) -> Self {
        let http_client = reqwest::Client::new();

        Self {
            groq: groq_service::GroqService::new(&http_client, config),
            spotify: spotify_service::SpotifyService::new(&http_client, config),
            tables: Arc::new(StaticMusicTables::new()),
            matcher: Arc::new(KeywordMoodMatcher::new()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&ServiceConfig::from_env())
    }
}
