use base64::prelude::{Engine as _, BASE64_STANDARD};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read video file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid data url for video")]
    InvalidDataUrl,
    #[error("video file only (mp4, webm, etc.), got {0:?}")]
    NotVideo(String),
    #[error("cannot infer video type from file name {0}")]
    UnknownExtension(PathBuf),
    #[error("video payload is empty")]
    Empty,
}

/// A video clip ready for inline upload to the vision model.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInput {
    pub mime_type: String,
    pub data_base64: String,
}

impl VideoInput {
    /// Accepts `data:video/<subtype>;base64,<payload>`.
    pub fn from_data_url(url: &str) -> Result<Self, MediaError> {
        let rest = url.strip_prefix("data:").ok_or(MediaError::InvalidDataUrl)?;
        let (meta, payload) = rest.split_once(',').ok_or(MediaError::InvalidDataUrl)?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or(MediaError::InvalidDataUrl)?;
        if !is_video_mime(mime) || payload.is_empty() {
            return Err(MediaError::InvalidDataUrl);
        }
        Ok(Self {
            mime_type: mime.to_ascii_lowercase(),
            data_base64: payload.to_string(),
        })
    }

    /// Raw base64 with an optional mime hint; data URLs are accepted too.
    pub fn from_base64(raw: &str, mime: Option<&str>) -> Result<Self, MediaError> {
        let raw = raw.trim();
        if raw.starts_with("data:") {
            return Self::from_data_url(raw);
        }
        if raw.is_empty() {
            return Err(MediaError::Empty);
        }
        let mime = mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_VIDEO_MIME);
        Ok(Self {
            mime_type: mime.to_string(),
            data_base64: raw.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, MediaError> {
        if !is_video_mime(mime) {
            return Err(MediaError::NotVideo(mime.to_string()));
        }
        if bytes.is_empty() {
            return Err(MediaError::Empty);
        }
        Ok(Self {
            mime_type: mime.to_ascii_lowercase(),
            data_base64: BASE64_STANDARD.encode(bytes),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, MediaError> {
        let mime =
            mime_for_path(path).ok_or_else(|| MediaError::UnknownExtension(path.to_path_buf()))?;
        let bytes = std::fs::read(path).map_err(|source| MediaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, mime)
    }
}

fn is_video_mime(mime: &str) -> bool {
    let m = mime.trim().to_ascii_lowercase();
    match m.strip_prefix("video/") {
        Some(sub) => {
            !sub.is_empty()
                && sub
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        }
        None => false,
    }
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        "mkv" => Some("video/x-matroska"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}
