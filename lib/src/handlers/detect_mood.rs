
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

use crate::mood::keyword_matcher::KeywordMoodMatcher;
use crate::service::common_structs::{DetectMoodRequest, MoodResult};
use crate::service::CommonService;
use crate::utilities::with_fallback;
use super::{build_error_response, build_success_response, parse_body};

const MATCHED_CONFIDENCE: f64 = 0.8;
const UNMATCHED_CONFIDENCE: f64 = 0.6;


/// Keyword based result used whenever the model cannot be used.
pub fn keyword_mood_result(matcher: &KeywordMoodMatcher, journal: &str) -> MoodResult {
    let (mood, matches) = matcher.detect_with_matches(journal);
    let confidence = if matches > 0 { MATCHED_CONFIDENCE } else { UNMATCHED_CONFIDENCE };
    MoodResult::new(mood, Some(confidence))
}

pub async fn handle(service: &CommonService, journal: &str) -> MoodResult {
    with_fallback(
        "detect-mood",
        service.groq.detect_mood(journal),
        || keyword_mood_result(&service.matcher, journal),
    ).await
}


pub async fn detect_mood(
    State(service): State<CommonService>,
    body: Bytes
) -> Response {
    let request_id = Uuid::new_v4();

    let request = match parse_body::<DetectMoodRequest>(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%request_id, error = %error, "invalid detect-mood body");
            return build_error_response(&error.to_string());
        },
    };

    let result = handle(&service, &request.journal).await;
    info!(%request_id, mood = %result.mood, confidence = ?result.confidence, "mood detected");
    build_success_response(&result)
}
