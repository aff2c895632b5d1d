use std::future::Future;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::warn;


/// Runs an external call and recovers with `fallback` when it fails.
///
/// The error is logged with `label` and never returned.
pub async fn with_fallback<T, Fut, F>(label: &str, attempt: Fut, fallback: F) -> T
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce() -> T,
{
    match attempt.await {
        Ok(value) => value,
        Err(error) => {
            warn!(call = label, error = ?error, "external call failed, using fallback");
            fallback()
        },
    }
}


const FENCE_PATTERN: &str = r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$";

fn fence_regex() -> &'static Result<Regex, regex::Error> {
    static FENCE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(FENCE_PATTERN))
}

// Models like to wrap JSON answers in ```json fences.
pub fn extract_json_block(raw: &str) -> &str {
    let trimmed = raw.trim();
    let fence = match fence_regex() {
        Ok(fence) => fence,
        Err(error) => {
            warn!(error = %error, "code fence pattern failed to compile");
            return trimmed;
        },
    };
    match fence.captures(trimmed).and_then(|captures| captures.get(1)) {
        Some(inner) => inner.as_str(),
        None => trimmed,
    }
}


/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
