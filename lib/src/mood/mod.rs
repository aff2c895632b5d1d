pub mod keyword_matcher;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};


/// The closed set of moods. Declaration order is the enumeration order used
/// to break ties in keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Excited,
    Thoughtful,
    Sad,
    Anxious,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Excited,
        Mood::Thoughtful,
        Mood::Sad,
        Mood::Anxious,
        Mood::Energetic,
    ];

    pub const DEFAULT: Mood = Mood::Thoughtful;

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Thoughtful => "thoughtful",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Energetic => "energetic",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
            Mood::Thoughtful => "🤔",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Energetic => "⚡",
        }
    }

    /// Position in `Mood::ALL`, used to index per-mood tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a mood coming from a request, coercing anything unknown to the default.
    pub fn parse_or_default(value: &str) -> Mood {
        value.parse().unwrap_or(Mood::DEFAULT)
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        for mood in Mood::ALL {
            if mood.as_str() == normalized {
                return Ok(mood)
            }
        }
        bail!("unknown mood: {}", s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
