use crate::modules::config::{ConfigError, StudioConfig};
use crate::modules::protocol::{
    LiveMusicClientContent, LiveMusicClientMessage, LiveMusicClientSetup,
    LiveMusicGenerationConfig, LiveMusicServerMessage, PlaybackControl, PromptConfig,
    WeightedPrompt,
};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::{DecodePaddingMode, Engine as _};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use url::Url;

pub const LYRIA_WS_URL: &str = "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1alpha.GenerativeService.BidiGenerateMusic";

const TEMPERATURE: f32 = 1.0;
const GUIDANCE: f32 = 4.0;
const SETUP_TIMEOUT: Duration = Duration::from_secs(15);

// Chunks are not always padded.
const AUDIO_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum LyriaError {
    #[error("websocket error: {0}")]
    Ws(#[from] WsError),
    #[error("invalid session url: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to encode client message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("session closed before setup completed")]
    ClosedBeforeSetup,
    #[error("timed out waiting for session setup")]
    SetupTimeout,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn session_url(api_key: &str) -> Result<Url, LyriaError> {
    Ok(Url::parse_with_params(LYRIA_WS_URL, &[("key", api_key)])?)
}

pub fn setup_message(model: &str) -> LiveMusicClientMessage {
    LiveMusicClientMessage::Setup(LiveMusicClientSetup {
        model: model.to_string(),
    })
}

/// Prompt and generation config sent once setup completes, before PLAY.
pub fn steering_messages(config: &PromptConfig) -> [LiveMusicClientMessage; 2] {
    [
        LiveMusicClientMessage::ClientContent(LiveMusicClientContent {
            weighted_prompts: vec![WeightedPrompt {
                text: config.prompt.clone(),
                weight: 1.0,
            }],
        }),
        LiveMusicClientMessage::MusicGenerationConfig(LiveMusicGenerationConfig {
            temperature: Some(TEMPERATURE),
            guidance: Some(GUIDANCE),
            bpm: Some(config.bpm),
            density: Some(config.density as f32),
            brightness: Some(config.brightness as f32),
            seed: None,
        }),
    ]
}

/// Server frames arrive as JSON in either text or binary frames.
pub fn decode_server_frame(msg: &Message) -> Option<LiveMusicServerMessage> {
    let text = match msg {
        Message::Text(t) => t.as_str(),
        Message::Binary(b) => std::str::from_utf8(b).ok()?,
        _ => return None,
    };
    match serde_json::from_str(text) {
        Ok(m) => Some(m),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable server frame");
            None
        }
    }
}

/// Decodes every audio chunk of a frame. Undecodable chunks are skipped.
pub fn decode_audio(msg: &LiveMusicServerMessage) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in msg.audio_chunks() {
        let Some(data) = chunk.data.as_deref() else {
            continue;
        };
        match AUDIO_ENGINE.decode(data) {
            Ok(bytes) => out.extend(bytes),
            Err(e) => tracing::warn!(error = %e, len = data.len(), "skipping undecodable audio chunk"),
        }
    }
    out
}

async fn send<W>(write: &mut W, msg: &LiveMusicClientMessage) -> Result<(), LyriaError>
where
    W: Sink<Message, Error = WsError> + Unpin,
{
    let text = serde_json::to_string(msg)?;
    write.send(Message::Text(text.into())).await?;
    Ok(())
}

pub async fn wait_for_setup<S>(read: &mut S, timeout: Duration) -> Result<(), LyriaError>
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
{
    let deadline = Instant::now() + timeout;
    loop {
        match tokio::time::timeout_at(deadline, read.next()).await {
            Err(_) => return Err(LyriaError::SetupTimeout),
            Ok(None) | Ok(Some(Ok(Message::Close(_)))) => {
                return Err(LyriaError::ClosedBeforeSetup)
            }
            Ok(Some(Err(e))) => return Err(e.into()),
            Ok(Some(Ok(msg))) => {
                if decode_server_frame(&msg).is_some_and(|m| m.setup_complete.is_some()) {
                    return Ok(());
                }
            }
        }
    }
}

/// Appends incoming PCM to `pcm` until `deadline`. Returns whether the
/// session is still open afterwards.
pub async fn collect_until<S>(
    read: &mut S,
    pcm: &mut Vec<u8>,
    deadline: Instant,
) -> Result<bool, LyriaError>
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
{
    loop {
        let msg = match tokio::time::timeout_at(deadline, read.next()).await {
            Err(_) => return Ok(true),
            Ok(None) | Ok(Some(Ok(Message::Close(_)))) => return Ok(false),
            Ok(Some(Err(WsError::ConnectionClosed | WsError::AlreadyClosed))) => return Ok(false),
            Ok(Some(Err(e))) => return Err(e.into()),
            Ok(Some(Ok(msg))) => msg,
        };
        let Some(server) = decode_server_frame(&msg) else {
            continue;
        };
        if let Some(filtered) = server.filtered_prompt.as_ref() {
            tracing::warn!(
                text = filtered.text.as_deref().unwrap_or_default(),
                reason = filtered.filtered_reason.as_deref().unwrap_or_default(),
                "music prompt was filtered"
            );
        }
        pcm.extend(decode_audio(&server));
    }
}

/// Drives one generation session over an already connected socket:
/// setup, prompt and config, PLAY, collection, then PAUSE and a grace
/// drain when the server has not closed on its own.
pub async fn run_session<W, R>(
    write: &mut W,
    read: &mut R,
    config: &StudioConfig,
    prompt: &PromptConfig,
) -> Result<Vec<u8>, LyriaError>
where
    W: Sink<Message, Error = WsError> + Unpin,
    R: Stream<Item = Result<Message, WsError>> + Unpin,
{
    send(write, &setup_message(&config.lyria_model)).await?;
    wait_for_setup(read, SETUP_TIMEOUT).await?;
    tracing::info!(model = %config.lyria_model, "music session ready");

    for msg in steering_messages(prompt) {
        send(write, &msg).await?;
    }
    send(write, &LiveMusicClientMessage::PlaybackControl(PlaybackControl::Play)).await?;

    let mut pcm = Vec::new();
    let open = collect_until(read, &mut pcm, Instant::now() + config.collect_window).await?;
    if open {
        send(write, &LiveMusicClientMessage::PlaybackControl(PlaybackControl::Pause)).await?;
        // Late chunks still arrive after PAUSE.
        collect_until(read, &mut pcm, Instant::now() + config.grace_period).await?;
        if let Err(e) = write.close().await {
            tracing::debug!(error = %e, "music session close failed");
        }
    } else {
        tracing::warn!("music session closed before the collection window ended");
    }

    tracing::info!(bytes = pcm.len(), "music capture finished");
    Ok(pcm)
}

/// Connects to the live music service and runs one session.
pub async fn capture_pcm(
    config: &StudioConfig,
    prompt: &PromptConfig,
) -> Result<Vec<u8>, LyriaError> {
    let url = session_url(config.require_api_key()?)?;
    let (socket, _) = tokio_tungstenite::connect_async(url.as_str()).await?;
    let (mut write, mut read) = socket.split();
    run_session(&mut write, &mut read, config, prompt).await
}
