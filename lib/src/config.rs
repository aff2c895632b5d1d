use std::env;

use crate::env_keys::{
    CHAT_MODEL, GROQ_API_KEY, GROQ_API_URL, SPOTIFY_API_URL, SPOTIFY_CLIENT_ID,
    SPOTIFY_CLIENT_SECRET, SPOTIFY_TOKEN_URL,
};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";


/// Provider endpoints and credentials for the handlers.
///
/// Credentials are not validated. Empty values make the provider calls fail,
/// which sends every request down its fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub groq_api_url: String,
    pub groq_api_key: String,
    pub chat_model: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            groq_api_url: env_or(GROQ_API_URL, DEFAULT_GROQ_API_URL),
            groq_api_key: env_or(GROQ_API_KEY, ""),
            chat_model: env_or(CHAT_MODEL, DEFAULT_CHAT_MODEL),
            spotify_token_url: env_or(SPOTIFY_TOKEN_URL, DEFAULT_SPOTIFY_TOKEN_URL),
            spotify_api_url: env_or(SPOTIFY_API_URL, DEFAULT_SPOTIFY_API_URL),
            spotify_client_id: env_or(SPOTIFY_CLIENT_ID, ""),
            spotify_client_secret: env_or(SPOTIFY_CLIENT_SECRET, ""),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            groq_api_url: DEFAULT_GROQ_API_URL.to_owned(),
            groq_api_key: "".to_owned(),
            chat_model: DEFAULT_CHAT_MODEL.to_owned(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_owned(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_owned(),
            spotify_client_id: "".to_owned(),
            spotify_client_secret: "".to_owned(),
        }
    }
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or(default.to_owned())
}
