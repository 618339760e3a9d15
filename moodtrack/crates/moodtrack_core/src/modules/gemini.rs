use crate::modules::config::{ConfigError, StudioConfig};
use crate::modules::media::VideoInput;
use crate::modules::mood_parser::parse_mood_result;
use crate::modules::mood_prompt::MOOD_PROMPT;
use crate::modules::protocol::MoodAnalysis;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("gemini request failed: status={status} body={body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("gemini auth error: {0}")]
    Auth(String),
    #[error("no text in gemini response")]
    EmptyResponse,
    #[error("gemini response parse failed: {0}")]
    Parse(String),
}

// Request URLs are stripped so error text never carries credentials.
impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        GeminiError::Http(e.without_url())
    }
}

impl From<ConfigError> for GeminiError {
    fn from(e: ConfigError) -> Self {
        GeminiError::Auth(e.to_string())
    }
}

fn mood_payload(video: &VideoInput, with_schema: bool) -> Value {
    let contents = json!([
        {
            "role": "user",
            "parts": [
                { "inlineData": { "mimeType": video.mime_type, "data": video.data_base64 } },
                { "text": MOOD_PROMPT }
            ]
        }
    ]);
    if !with_schema {
        return json!({
            "contents": contents,
            "generationConfig": { "responseMimeType": "application/json" }
        });
    }
    json!({
        "contents": contents,
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseJsonSchema": {
                "type": "OBJECT",
                "properties": {
                    "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "genre": { "type": "STRING" }
                },
                "required": ["keywords", "genre"]
            }
        }
    })
}

/// Asks the vision model for mood keywords and a genre guess for a clip.
pub async fn analyze_mood(
    config: &StudioConfig,
    video: &VideoInput,
) -> Result<MoodAnalysis, GeminiError> {
    let api_key = config.require_api_key()?;
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let url = format!("{API_BASE}/{}:generateContent", config.gemini_model);
    let payload_with_schema = mood_payload(video, true);
    let payload_no_schema = mood_payload(video, false);

    let mut backoff = Duration::from_millis(500);
    for attempt in 1..=3 {
        let resp = client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(if attempt == 1 {
                &payload_with_schema
            } else {
                &payload_no_schema
            })
            .send()
            .await?;

        if resp.status().is_success() {
            let body = resp.text().await?;
            let text = extract_candidate_text(&body)?;
            let analysis = parse_mood_result(&text)
                .map_err(|e| GeminiError::Parse(format!("{e}: {text}")))?;
            tracing::info!(
                keywords = ?analysis.keywords,
                genre = ?analysis.genre,
                "mood analysis complete"
            );
            return Ok(analysis);
        }

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
            && body.to_ascii_lowercase().contains("api key")
        {
            return Err(GeminiError::Auth(body));
        }

        // Some endpoints reject schema fields; retry once without schema.
        if attempt == 1
            && status == StatusCode::BAD_REQUEST
            && body.to_ascii_lowercase().contains("unknown")
        {
            tracing::warn!("gemini rejected response schema, retrying without it");
            continue;
        }

        let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
        if !retryable || attempt == 3 {
            return Err(GeminiError::BadStatus { status, body });
        }
        tracing::warn!(%status, attempt, "gemini request failed, backing off");
        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(Duration::from_secs(5));
    }

    Err(GeminiError::Parse("exhausted retries".to_string()))
}

/// Pulls the first text part out of a `generateContent` response body.
pub fn extract_candidate_text(body: &str) -> Result<String, GeminiError> {
    #[derive(Deserialize)]
    struct Envelope {
        candidates: Option<Vec<Candidate>>,
    }
    #[derive(Deserialize)]
    struct Candidate {
        content: Option<Content>,
    }
    #[derive(Deserialize)]
    struct Content {
        parts: Option<Vec<Part>>,
    }
    #[derive(Deserialize)]
    struct Part {
        text: Option<String>,
    }

    let env: Envelope =
        serde_json::from_str(body).map_err(|e| GeminiError::Parse(format!("{e}: {body}")))?;
    env.candidates
        .into_iter()
        .flatten()
        .filter_map(|c| c.content)
        .filter_map(|c| c.parts)
        .flatten()
        .filter_map(|p| p.text)
        .find(|t| !t.trim().is_empty())
        .ok_or(GeminiError::EmptyResponse)
}
