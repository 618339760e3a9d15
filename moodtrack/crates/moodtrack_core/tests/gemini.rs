use moodtrack_core::config::StudioConfig;
use moodtrack_core::gemini::{analyze_mood, extract_candidate_text, GeminiError};
use moodtrack_core::media::VideoInput;
use serde_json::json;

#[test]
fn first_non_blank_text_part_is_returned() {
    let body = json!({
        "candidates": [
            { "content": { "parts": [ { "text": "  " }, { "inlineData": {} } ] } },
            { "content": { "parts": [ { "text": "{\"keywords\":[\"밝은\"],\"genre\":\"일상\"}" } ] } }
        ]
    })
    .to_string();
    assert_eq!(
        extract_candidate_text(&body).unwrap(),
        "{\"keywords\":[\"밝은\"],\"genre\":\"일상\"}"
    );
}

#[test]
fn missing_candidates_are_empty_responses() {
    for body in [
        json!({}),
        json!({ "candidates": [] }),
        json!({ "candidates": [ { "finishReason": "SAFETY" } ] }),
    ] {
        assert!(matches!(
            extract_candidate_text(&body.to_string()),
            Err(GeminiError::EmptyResponse)
        ));
    }
}

#[test]
fn non_json_body_is_a_parse_error() {
    assert!(matches!(
        extract_candidate_text("<html>"),
        Err(GeminiError::Parse(_))
    ));
}

#[tokio::test]
async fn analysis_requires_an_api_key() {
    let config = StudioConfig::default();
    let video = VideoInput::from_bytes(&[1, 2, 3], "video/mp4").unwrap();
    let err = analyze_mood(&config, &video).await.unwrap_err();
    assert!(matches!(err, GeminiError::Auth(_)));
}

#[tokio::test]
async fn transport_errors_do_not_echo_the_request_url() {
    let err = reqwest::Client::new()
        .get("http://127.0.0.1:1/v1beta/models/m:generateContent?key=top-secret-key")
        .send()
        .await
        .unwrap_err();
    assert!(err.url().is_some());

    let err = GeminiError::from(err);
    let text = err.to_string();
    assert!(text.starts_with("http error"), "{text}");
    assert!(!text.contains("top-secret-key"), "{text}");
    assert!(!format!("{err:?}").contains("top-secret-key"));
}
