use crate::modules::protocol::MoodAnalysis;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodParseError {
    #[error("mood response is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mood response is not a json object")]
    NotAnObject,
}

/// Strips a surrounding markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(stripped) = t.strip_prefix("```") else {
        return t;
    };
    let stripped = match stripped.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &stripped[4..],
        _ => stripped,
    };
    let stripped = stripped.trim_start();
    stripped.strip_suffix("```").unwrap_or(stripped).trim()
}

/// Parses the vision model's `{"keywords": [...], "genre": "..."}` answer.
///
/// Non-string keywords are skipped, keywords are trimmed and empties
/// dropped; a missing or blank genre becomes `None`.
pub fn parse_mood_result(text: &str) -> Result<MoodAnalysis, MoodParseError> {
    let parsed: Value = serde_json::from_str(strip_code_fence(text))?;
    let Value::Object(obj) = parsed else {
        return Err(MoodParseError::NotAnObject);
    };

    let keywords = match obj.get("keywords") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let genre = obj
        .get("genre")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(MoodAnalysis { keywords, genre })
}
