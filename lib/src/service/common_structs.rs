
use serde::{Deserialize, Serialize};

use crate::mood::Mood;


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MoodResult {
    pub mood: Mood,
    pub emoji: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence: Option<f64>,
}

impl MoodResult {
    pub fn new(mood: Mood, confidence: Option<f64>) -> Self {
        Self {
            mood,
            emoji: mood.emoji().to_owned(),
            confidence,
        }
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub dreams: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub inspiration: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PersonaResponse {
    pub message: String,
    pub advice: String,
    pub encouragement: String,
}

impl PersonaResponse {
    pub fn new(message: &str, advice: &str, encouragement: &str) -> Self {
        Self {
            message: message.to_owned(),
            advice: advice.to_owned(),
            encouragement: encouragement.to_owned(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.message.trim().is_empty()
            && !self.advice.trim().is_empty()
            && !self.encouragement.trim().is_empty()
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

impl Song {
    pub fn with_preview(name: &str, artist: &str, preview_url: &str) -> Self {
        Self {
            name: name.to_owned(),
            artist: artist.to_owned(),
            preview_url: Some(preview_url.to_owned()),
            external_url: None,
            image: None,
        }
    }
}


// request bodies

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectMoodRequest {
    pub journal: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FutureSelfRequest {
    pub journal: String,
    #[serde(rename = "userData")]
    pub user_data: UserProfile,
    pub mood: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifySongsRequest {
    pub mood: String,
}
