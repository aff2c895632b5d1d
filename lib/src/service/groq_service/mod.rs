
pub mod prompts;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::mood::Mood;
use crate::utilities::{extract_json_block, truncate_chars};
use super::common_structs::{MoodResult, PersonaResponse, UserProfile};
use prompts::{future_self_prompt, mood_prompt, FALLBACK_ADVICE, FALLBACK_ENCOURAGEMENT};

const MOOD_TEMPERATURE: f32 = 0.3;
const MOOD_MAX_TOKENS: u32 = 100;
const PERSONA_TEMPERATURE: f32 = 0.7;
const PERSONA_MAX_TOKENS: u32 = 500;

const RAW_MESSAGE_CHARS: usize = 200;
// Confidence used when the model names a valid mood but omits the score.
const DEFAULT_CONFIDENCE: f64 = 0.6;


#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoodReply {
    mood: String,
    confidence: Option<f64>,
    emoji: Option<String>,
}


/// Client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct GroqService {
    client: Client,
    api_url: String,
    api_key: String,
    chat_model: String,
}

impl GroqService {
    pub fn new(client: &Client, config: &ServiceConfig) -> Self {
        Self {
            client: client.to_owned(),
            api_url: config.groq_api_url.to_owned(),
            api_key: config.groq_api_key.to_owned(),
            chat_model: config.chat_model.to_owned(),
        }
    }

    /// Asks the model for the journal's mood.
    ///
    /// Errors on transport failure, unusable output, or a mood outside the fixed set.
    pub async fn detect_mood(&self, journal: &str) -> Result<MoodResult> {
        let output = self.send(&mood_prompt(journal), MOOD_TEMPERATURE, MOOD_MAX_TOKENS).await?;
        parse_mood_output(&output)
    }

    /// Asks the model to answer as the user's future self.
    ///
    /// Only transport level failures are errors. Output that is not the expected
    /// JSON is kept as a truncated message with stock advice and encouragement.
    pub async fn future_self(&self, journal: &str, profile: &UserProfile, mood: Mood) -> Result<PersonaResponse> {
        let prompt = future_self_prompt(journal, profile, mood.as_str());
        let output = self.send(&prompt, PERSONA_TEMPERATURE, PERSONA_MAX_TOKENS).await?;
        Ok(parse_persona_output(&output))
    }

    async fn send(&self, prompt: &str, temperature: f32, max_tokens: u32) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.chat_model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature,
            max_tokens,
        };

        let response = self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("chat completion returned {}", status);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("chat completion has no content")?;

        debug!(content = %content, "chat completion received");
        Ok(content)
    }
}


pub(crate) fn parse_mood_output(output: &str) -> Result<MoodResult> {
    let reply: MoodReply = serde_json::from_str(extract_json_block(output))
        .context("mood output is not JSON")?;
    let mood: Mood = reply.mood.parse()?;

    let confidence = reply.confidence
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_CONFIDENCE);

    let emoji = reply.emoji
        .map(|e| e.trim().to_owned())
        .filter(|e| !e.is_empty())
        .unwrap_or(mood.emoji().to_owned());

    Ok(MoodResult { mood, emoji, confidence: Some(confidence) })
}


pub(crate) fn parse_persona_output(output: &str) -> PersonaResponse {
    if let Ok(reply) = serde_json::from_str::<PersonaResponse>(extract_json_block(output)) {
        if reply.is_complete() {
            return reply
        }
    }
    debug!("persona output is not the expected JSON, keeping raw text");
    PersonaResponse {
        message: format!("{}...", truncate_chars(output, RAW_MESSAGE_CHARS)),
        advice: FALLBACK_ADVICE.to_owned(),
        encouragement: FALLBACK_ENCOURAGEMENT.to_owned(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mood_json() {
        let result = parse_mood_output(r#"{"mood": "calm", "confidence": 0.9, "emoji": "🧘"}"#).unwrap();
        assert_eq!(result.mood, Mood::Calm);
        assert_eq!(result.confidence, Some(0.9));
        assert_eq!(result.emoji, "🧘");
    }

    #[test]
    fn mood_json_gaps_are_filled() {
        let result = parse_mood_output("```json\n{\"mood\": \"Sad\", \"confidence\": 3.5}\n```").unwrap();
        assert_eq!(result.mood, Mood::Sad);
        assert_eq!(result.confidence, Some(1.0));
        assert_eq!(result.emoji, "😢");

        let result = parse_mood_output(r#"{"mood": "happy", "emoji": ""}"#).unwrap();
        assert_eq!(result.confidence, Some(DEFAULT_CONFIDENCE));
        assert_eq!(result.emoji, "😊");
    }

    #[test]
    fn rejects_unknown_or_malformed_mood() {
        assert!(parse_mood_output(r#"{"mood": "furious", "confidence": 0.9}"#).is_err());
        assert!(parse_mood_output("I think you are happy").is_err());
    }

    #[test]
    fn persona_json_is_used_as_is() {
        let reply = parse_persona_output(r#"{"message": "m", "advice": "a", "encouragement": "e"}"#);
        assert_eq!(reply, PersonaResponse::new("m", "a", "e"));
    }

    #[test]
    fn persona_text_is_truncated() {
        let raw = "x".repeat(300);
        let reply = parse_persona_output(&raw);
        assert_eq!(reply.message, format!("{}...", "x".repeat(200)));
        assert_eq!(reply.advice, FALLBACK_ADVICE);
        assert_eq!(reply.encouragement, FALLBACK_ENCOURAGEMENT);
    }

    #[test]
    fn persona_with_blank_field_is_treated_as_text() {
        let raw = r#"{"message": "m", "advice": "", "encouragement": "e"}"#;
        let reply = parse_persona_output(raw);
        assert!(reply.message.starts_with("{\"message\""));
        assert!(reply.is_complete());
    }
}
