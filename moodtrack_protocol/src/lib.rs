use serde::{Deserialize, Serialize};

/// Generation parameters derived from mood keywords and an optional genre.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromptConfig {
    pub prompt: String,
    pub bpm: i32,
    pub brightness: f64,
    pub density: f64,
}

/// Output of the vision step: free-form mood keywords plus a genre guess.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MoodAnalysis {
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenrePreset {
    pub keyword: String,
    pub label: String,
}

// Streaming music session wire format. Client messages carry exactly one
// top-level field, which maps onto an externally tagged enum.

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub enum LiveMusicClientMessage {
    Setup(LiveMusicClientSetup),
    ClientContent(LiveMusicClientContent),
    MusicGenerationConfig(LiveMusicGenerationConfig),
    PlaybackControl(PlaybackControl),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LiveMusicClientSetup {
    pub model: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveMusicClientContent {
    pub weighted_prompts: Vec<WeightedPrompt>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightedPrompt {
    pub text: String,
    pub weight: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LiveMusicGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaybackControl {
    Play,
    Pause,
    Stop,
    ResetContext,
}

/// Server frames may carry any subset of these fields; unknown ones are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LiveMusicServerMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_complete: Option<SetupComplete>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_content: Option<LiveMusicServerContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_prompt: Option<FilteredPrompt>,
}

impl LiveMusicServerMessage {
    pub fn audio_chunks(&self) -> &[AudioChunk] {
        self.server_content
            .as_ref()
            .and_then(|c| c.audio_chunks.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SetupComplete {}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LiveMusicServerContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_chunks: Option<Vec<AudioChunk>>,
}

/// Base64-encoded PCM payload as sent on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AudioChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilteredPrompt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_reason: Option<String>,
}
