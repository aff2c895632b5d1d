//! Read-only per-mood data: AI tracks, fallback songs, playlists, catalog
//! search queries and canned persona replies.
//!
//! Built once with [`StaticMusicTables::new`] and shared behind an `Arc`.
//! Every table is an array indexed by [`Mood::index`], so lookups are total.

use rand::seq::SliceRandom;

use crate::mood::Mood;
use crate::service::common_structs::{PersonaResponse, Song};

/// Catalog query used when the requested mood is not one we know.
pub const DEFAULT_SEARCH_QUERY: &str = "chill music";


#[derive(Debug, Clone)]
pub struct StaticMusicTables {
    ai_tracks: [&'static str; 7],
    playlists: [&'static str; 7],
    search_queries: [&'static str; 7],
    fallback_songs: [Vec<Song>; 7],
    persona_fallbacks: [Vec<PersonaResponse>; 7],
}

impl StaticMusicTables {
    pub fn new() -> Self {
        Self {
            ai_tracks: Mood::ALL.map(ai_track_for),
            playlists: Mood::ALL.map(playlist_for),
            search_queries: Mood::ALL.map(search_query_for),
            fallback_songs: Mood::ALL.map(fallback_songs_for),
            persona_fallbacks: Mood::ALL.map(persona_fallbacks_for),
        }
    }

    pub fn ai_track(&self, mood: Mood) -> &str {
        self.ai_tracks[mood.index()]
    }

    pub fn playlist(&self, mood: Mood) -> &str {
        self.playlists[mood.index()]
    }

    pub fn search_query(&self, mood: Mood) -> &str {
        self.search_queries[mood.index()]
    }

    pub fn fallback_songs(&self, mood: Mood) -> &[Song] {
        &self.fallback_songs[mood.index()]
    }

    pub fn persona_fallbacks(&self, mood: Mood) -> &[PersonaResponse] {
        &self.persona_fallbacks[mood.index()]
    }

    /// Picks one canned reply for the mood, or a generic one if the mood's list is empty.
    pub fn pick_persona_fallback(&self, mood: Mood) -> PersonaResponse {
        self.persona_fallbacks(mood)
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(generic_persona_fallback)
    }
}

impl Default for StaticMusicTables {
    fn default() -> Self {
        Self::new()
    }
}


fn ai_track_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "https://example.com/ai-music/happy-vibes.mp3",
        Mood::Calm => "https://example.com/ai-music/peaceful-meditation.mp3",
        Mood::Excited => "https://example.com/ai-music/energy-burst.mp3",
        Mood::Thoughtful => "https://example.com/ai-music/deep-reflection.mp3",
        Mood::Sad => "https://example.com/ai-music/healing-journey.mp3",
        Mood::Anxious => "https://example.com/ai-music/calm-anxiety.mp3",
        Mood::Energetic => "https://example.com/ai-music/power-boost.mp3",
    }
}

fn playlist_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "https://open.spotify.com/playlist/37i9dQZF1DX0XUsuxWHRQd",
        Mood::Calm => "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO",
        Mood::Excited => "https://open.spotify.com/playlist/37i9dQZF1DX1lVhptIYRda",
        Mood::Thoughtful => "https://open.spotify.com/playlist/37i9dQZF1DX4E3UdUs7fUx",
        Mood::Sad => "https://open.spotify.com/playlist/37i9dQZF1DX7qK8ma5wgG1",
        // same playlist as calm
        Mood::Anxious => "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO",
        Mood::Energetic => "https://open.spotify.com/playlist/37i9dQZF1DX76Wlfdnj7AP",
    }
}

fn search_query_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "upbeat happy pop",
        Mood::Calm => "chill relaxing ambient",
        Mood::Excited => "energetic pump up",
        Mood::Thoughtful => "reflective indie folk",
        Mood::Sad => "melancholy sad ballad",
        Mood::Anxious => "calming anxiety relief",
        Mood::Energetic => "workout high energy",
    }
}

fn fallback_songs_for(mood: Mood) -> Vec<Song> {
    let pairs: [(&str, &str, &str); 2] = match mood {
        Mood::Happy => [
            ("Happy", "Pharrell Williams", "https://example.com/happy1.mp3"),
            ("Good 4 U", "Olivia Rodrigo", "https://example.com/happy2.mp3"),
        ],
        Mood::Calm => [
            ("Weightless", "Marconi Union", "https://example.com/calm1.mp3"),
            ("River", "Leon Bridges", "https://example.com/calm2.mp3"),
        ],
        Mood::Excited => [
            ("Can't Stop the Feeling", "Justin Timberlake", "https://example.com/excited1.mp3"),
            ("Uptown Funk", "Bruno Mars", "https://example.com/excited2.mp3"),
        ],
        Mood::Thoughtful => [
            ("The Night We Met", "Lord Huron", "https://example.com/thoughtful1.mp3"),
            ("Mad World", "Gary Jules", "https://example.com/thoughtful2.mp3"),
        ],
        Mood::Sad => [
            ("Someone Like You", "Adele", "https://example.com/sad1.mp3"),
            ("Hurt", "Johnny Cash", "https://example.com/sad2.mp3"),
        ],
        Mood::Anxious => [
            ("Breathe", "Telepopmusik", "https://example.com/anxious1.mp3"),
            ("Stress Relief", "Nature Sounds", "https://example.com/anxious2.mp3"),
        ],
        Mood::Energetic => [
            ("Thunder", "Imagine Dragons", "https://example.com/energetic1.mp3"),
            ("Eye of the Tiger", "Survivor", "https://example.com/energetic2.mp3"),
        ],
    };
    pairs
        .iter()
        .map(|(name, artist, preview)| Song::with_preview(name, artist, preview))
        .collect()
}

fn persona_fallbacks_for(mood: Mood) -> Vec<PersonaResponse> {
    let reply = match mood {
        Mood::Happy => PersonaResponse::new(
            "I love seeing you this joyful! 💫 Your happiness today is building the foundation for all our future adventures.",
            "Keep nurturing this positive energy - it's your superpower!",
            "You're absolutely glowing today, and I'm so proud of how far we've come! ✨",
        ),
        Mood::Calm => PersonaResponse::new(
            "This peaceful energy you're cultivating is exactly what our future self needed. 🌸",
            "These moments of calm are when our best ideas bloom. Trust the process.",
            "Your inner peace today is creating ripples of wisdom for tomorrow. Keep flowing! 🌊",
        ),
        Mood::Excited => PersonaResponse::new(
            "Your excitement is infectious! 🚀 I can feel the momentum building toward something incredible.",
            "Channel this energy into those dreams we talked about - now's the perfect time!",
            "This enthusiasm is pure magic - ride this wave as far as it takes you! ⭐",
        ),
        Mood::Thoughtful => PersonaResponse::new(
            "I love how deeply you're reflecting today. 🌙 These thoughts are seeds of wisdom.",
            "Trust your intuition - it's guiding us exactly where we need to go.",
            "Your thoughtfulness today is shaping our most beautiful tomorrows. Keep questioning! 💭",
        ),
        Mood::Sad => PersonaResponse::new(
            "I see you, and I feel this with you. 💙 You have to do this — not just for you, but for me.",
            "Let yourself feel this fully - it's part of our journey to joy.",
            "You're so much stronger than you know. I'm here, and we'll get through this together. 🫂",
        ),
        Mood::Anxious => PersonaResponse::new(
            "I understand this anxiety, and I want you to know - everything works out beautifully. 🌈",
            "Take three deep breaths with me. Focus on what you can control right now.",
            "Your courage in facing these feelings is exactly what makes us unstoppable. You've got this! 💪",
        ),
        Mood::Energetic => PersonaResponse::new(
            "This energy is EVERYTHING! ⚡ I can feel you're ready to conquer the world today.",
            "Use this momentum to tackle one thing that's been on your mind - you're unstoppable right now!",
            "Your energy today is literally changing our future timeline. Keep going, superstar! 🌟",
        ),
    };
    vec![reply]
}

fn generic_persona_fallback() -> PersonaResponse {
    PersonaResponse::new(
        "I'm right here with you, today and every day after. 💫",
        crate::service::groq_service::prompts::FALLBACK_ADVICE,
        crate::service::groq_service::prompts::FALLBACK_ENCOURAGEMENT,
    )
}
