use anyhow::Result;
use async_trait::async_trait;

use crate::handlers::{detect_mood, future_self, spotify_songs};
use crate::mood::Mood;
use crate::service::common_structs::{MoodResult, PersonaResponse, Song, UserProfile};
use crate::service::CommonService;
use super::{JournalApi, MusicSource};


// In-process calls into the handler logic, no HTTP hop.

#[async_trait]
impl JournalApi for CommonService {
    async fn detect_mood(&self, journal: &str) -> MoodResult {
        detect_mood::handle(self, journal).await
    }

    async fn future_self(&self, journal: &str, profile: &UserProfile, mood: Mood) -> PersonaResponse {
        future_self::handle(self, journal, profile, mood).await
    }
}

#[async_trait]
impl MusicSource for CommonService {
    async fn ai_track(&self, mood: Mood) -> Result<String> {
        Ok(self.tables.ai_track(mood).to_owned())
    }

    async fn songs(&self, mood: Mood) -> Result<Vec<Song>> {
        Ok(spotify_songs::handle(self, mood.as_str()).await)
    }
}
