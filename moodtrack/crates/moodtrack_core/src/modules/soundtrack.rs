use crate::modules::config::StudioConfig;
use crate::modules::gemini::{analyze_mood, GeminiError};
use crate::modules::lyria::{capture_pcm, LyriaError};
use crate::modules::media::VideoInput;
use crate::modules::prompt_resolver::resolve;
use crate::modules::protocol::{MoodAnalysis, PromptConfig};
use crate::modules::wav::{encode_wav, pcm_duration, WavSpec};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundtrackError {
    #[error("mood analysis failed: {0}")]
    Analysis(#[from] GeminiError),
    #[error("music generation failed: {0}")]
    Generation(#[from] LyriaError),
    #[error("music session produced no audio")]
    NoAudio,
}

#[derive(Debug, Clone)]
pub struct Soundtrack {
    pub prompt_config: PromptConfig,
    pub wav: Vec<u8>,
}

pub async fn generate_soundtrack<S: AsRef<str>>(
    config: &StudioConfig,
    keywords: &[S],
    genre: Option<&str>,
) -> Result<Soundtrack, SoundtrackError> {
    let prompt_config = resolve(keywords, genre);
    tracing::info!(
        bpm = prompt_config.bpm,
        brightness = prompt_config.brightness,
        density = prompt_config.density,
        "starting soundtrack generation"
    );

    let pcm = capture_pcm(config, &prompt_config).await?;
    soundtrack_from_pcm(prompt_config, &pcm)
}

/// Packages captured PCM as a WAV soundtrack. An empty capture is an error.
pub fn soundtrack_from_pcm(
    prompt_config: PromptConfig,
    pcm: &[u8],
) -> Result<Soundtrack, SoundtrackError> {
    if pcm.is_empty() {
        return Err(SoundtrackError::NoAudio);
    }

    let spec = WavSpec::default();
    tracing::info!(seconds = pcm_duration(pcm.len(), spec).as_secs_f64(), "soundtrack captured");
    Ok(Soundtrack {
        prompt_config,
        wav: encode_wav(pcm, spec),
    })
}

/// Analyzes a clip and scores it in one go.
pub async fn score_video(
    config: &StudioConfig,
    video: &VideoInput,
) -> Result<(MoodAnalysis, Soundtrack), SoundtrackError> {
    let analysis = analyze_mood(config, video).await?;
    let soundtrack =
        generate_soundtrack(config, &analysis.keywords, analysis.genre.as_deref()).await?;
    Ok((analysis, soundtrack))
}

pub fn soundtrack_file_name(label: &str) -> String {
    let cleaned: String = label
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "kdrama-bgm.wav".to_string()
    } else {
        format!("kdrama-bgm-{cleaned}.wav")
    }
}
