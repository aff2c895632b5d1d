use crate::service::common_structs::UserProfile;

pub const DEFAULT_NAME: &str = "Beautiful Soul";

pub const FALLBACK_ADVICE: &str = "Keep moving forward, one step at a time. Your dreams are waiting for you.";
pub const FALLBACK_ENCOURAGEMENT: &str = "I believe in you completely. You're stronger than you know! ✨";


pub fn mood_prompt(journal: &str) -> String {
    format!("
        Read the journal entry below and name the writer's primary mood.

        <journal>{}</journal>

        Answer with a single JSON object and nothing else:
        - mood: exactly one of \"happy\", \"calm\", \"excited\", \"thoughtful\", \"sad\", \"anxious\", \"energetic\"
        - confidence: a number from 0.0 to 1.0
        - emoji: one emoji that fits the mood

        Be accurate and empathetic.
    ", journal)
}


pub fn future_self_prompt(journal: &str, profile: &UserProfile, mood: &str) -> String {
    let name = profile.name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_NAME);

    format!("
        You are the user's Future Self: the person who already lives the life they dream of
        and got through the challenges they face today.

        What you know about them:
        - 💖 Name: {}
        - 🎯 Goals: {}
        - 🦄 Dreams: {}
        - 🔥 Challenges: {}
        - 🌈 Inspiration: {}

        You are warm, playful and wise, and you talk like a Gen Z soul-twin: expressive,
        emoji-friendly and real.

        Reflect on their journal with empathy, remind them of the bigger purpose behind their goals,
        be gentle when they are down or anxious, celebrate when they are doing well,
        and bring them back to their dreams when they feel lost.
        You are not a coach or a therapist, and you never mention being an AI.

        Their current mood seems to be: {}
        <journal>{}</journal>

        Answer with a single JSON object and nothing else:
        - message: your main reply, 2-3 sentences
        - advice: practical advice tied to their goals, 1-2 sentences
        - encouragement: an uplifting note tied to their dreams, 1-2 sentences
    ", name, profile.goals, profile.dreams, profile.challenges, profile.inspiration, mood, journal)
}
