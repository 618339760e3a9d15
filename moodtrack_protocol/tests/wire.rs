use moodtrack_protocol::*;
use serde_json::json;

#[test]
fn client_messages_use_single_top_level_field() {
    let setup = LiveMusicClientMessage::Setup(LiveMusicClientSetup {
        model: "models/lyria-realtime-exp".to_string(),
    });
    assert_eq!(
        serde_json::to_value(&setup).unwrap(),
        json!({ "setup": { "model": "models/lyria-realtime-exp" } })
    );

    let play = LiveMusicClientMessage::PlaybackControl(PlaybackControl::Play);
    assert_eq!(
        serde_json::to_value(&play).unwrap(),
        json!({ "playbackControl": "PLAY" })
    );

    let content = LiveMusicClientMessage::ClientContent(LiveMusicClientContent {
        weighted_prompts: vec![WeightedPrompt {
            text: "warm piano".to_string(),
            weight: 1.0,
        }],
    });
    assert_eq!(
        serde_json::to_value(&content).unwrap(),
        json!({ "clientContent": { "weightedPrompts": [ { "text": "warm piano", "weight": 1.0 } ] } })
    );
}

#[test]
fn generation_config_skips_unset_fields() {
    let cfg = LiveMusicClientMessage::MusicGenerationConfig(LiveMusicGenerationConfig {
        bpm: Some(88),
        guidance: Some(4.0),
        ..Default::default()
    });
    assert_eq!(
        serde_json::to_value(&cfg).unwrap(),
        json!({ "musicGenerationConfig": { "bpm": 88, "guidance": 4.0 } })
    );
}

#[test]
fn server_message_exposes_audio_chunks() {
    let raw = r#"{"serverContent":{"audioChunks":[{"data":"AAEC","mimeType":"audio/l16;rate=48000;channels=2"}]},"somethingNew":1}"#;
    let msg: LiveMusicServerMessage = serde_json::from_str(raw).unwrap();
    assert!(msg.setup_complete.is_none());
    assert_eq!(msg.audio_chunks().len(), 1);
    assert_eq!(msg.audio_chunks()[0].data.as_deref(), Some("AAEC"));

    let done: LiveMusicServerMessage = serde_json::from_str(r#"{"setupComplete":{}}"#).unwrap();
    assert!(done.setup_complete.is_some());
    assert!(done.audio_chunks().is_empty());
}

#[test]
fn mood_analysis_omits_missing_genre() {
    let a = MoodAnalysis {
        keywords: vec!["따뜻한".to_string()],
        genre: None,
    };
    assert_eq!(serde_json::to_value(&a).unwrap(), json!({ "keywords": ["따뜻한"] }));
}
