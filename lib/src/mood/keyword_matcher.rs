use super::Mood;


/// Keyword lists per mood, in `Mood::ALL` order.
const KEYWORDS: [(Mood, &[&str]); 7] = [
    (Mood::Happy, &["happy", "joy", "excited", "amazing", "wonderful", "great", "awesome"]),
    (Mood::Calm, &["calm", "peaceful", "relaxed", "serene", "quiet"]),
    (Mood::Excited, &["excited", "can't wait", "thrilled", "pumped", "awesome"]),
    (Mood::Thoughtful, &["thinking", "reflect", "consider", "ponder", "wonder"]),
    (Mood::Sad, &["sad", "down", "depressed", "crying", "hurt", "pain", "lonely"]),
    (Mood::Anxious, &["anxious", "worried", "stress", "nervous", "panic", "fear"]),
    (Mood::Energetic, &["energy", "motivated", "pumped", "active", "productive"]),
];


/// Last-resort mood detection by counting keyword hits.
#[derive(Debug, Clone)]
pub struct KeywordMoodMatcher {
    keywords: Vec<(Mood, Vec<&'static str>)>,
}

impl KeywordMoodMatcher {
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS
                .iter()
                .map(|(mood, words)| (*mood, words.to_vec()))
                .collect(),
        }
    }

    pub fn detect(&self, text: &str) -> Mood {
        self.detect_with_matches(text).0
    }

    /// Returns the winning mood and how many of its keywords occurred.
    ///
    /// Only a strictly greater count replaces the current winner, so ties go to
    /// the mood listed first. No hits at all yields `Mood::DEFAULT` with zero.
    pub fn detect_with_matches(&self, text: &str) -> (Mood, usize) {
        let lower = text.to_lowercase();
        let mut detected = Mood::DEFAULT;
        let mut max_matches = 0;

        for (mood, words) in self.keywords.iter() {
            let matches = words.iter().filter(|word| lower.contains(**word)).count();
            if matches > max_matches {
                max_matches = matches;
                detected = *mood;
            }
        }
        (detected, max_matches)
    }
}

impl Default for KeywordMoodMatcher {
    fn default() -> Self {
        Self::new()
    }
}
