use crate::modules::genre_table::{self, GenreTuning};
use crate::modules::mood_lexicon;
use crate::modules::protocol::PromptConfig;

pub const DEFAULT_BPM: i32 = 85;
pub const DEFAULT_BRIGHTNESS: f64 = 0.5;
pub const DEFAULT_DENSITY: f64 = 0.4;

pub const MIN_BPM: i32 = 50;
pub const MAX_BPM: i32 = 160;

const MOOD_WEIGHT: f64 = 0.3;
const GENRE_WEIGHT: f64 = 0.7;

pub const GENERIC_STYLE: &str = "Cinematic, emotional, instrumental soundtrack";
const OPENING_DIRECTIVE: &str =
    "Open with a bold, immediate musical statement from the very first beat, with no slow fade-in";
const INSTRUMENTAL_ONLY: &str = "Instrumental only, no vocals";

#[derive(Default)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

fn blend(mood: f64, genre: f64) -> f64 {
    mood * MOOD_WEIGHT + genre * GENRE_WEIGHT
}

/// Maps mood keywords and an optional genre label to generation parameters.
///
/// Total over all inputs: unknown keywords are dropped and an unknown genre
/// behaves like no genre. The numeric fields are always clamped
/// (`bpm` to 50..=160, `brightness`/`density` to 0..=1).
pub fn resolve<S: AsRef<str>>(keywords: &[S], genre: Option<&str>) -> PromptConfig {
    let mut bpm = Mean::default();
    let mut brightness = Mean::default();
    let mut density = Mean::default();

    for kw in keywords {
        let kw = kw.as_ref();
        let Some(tuning) = mood_lexicon::lookup(kw) else {
            tracing::debug!(keyword = kw, "mood keyword not in lexicon, dropped");
            continue;
        };
        if let Some(v) = tuning.bpm {
            bpm.push(f64::from(v));
        }
        if let Some(v) = tuning.brightness {
            brightness.push(v);
        }
        if let Some(v) = tuning.density {
            density.push(v);
        }
    }

    let genre_tuning = genre.and_then(genre_table::lookup);
    if let (Some(label), None) = (genre, genre_tuning) {
        tracing::debug!(genre = label, "unknown genre, ignoring");
    }

    let (out_bpm, out_brightness, out_density) = match genre_tuning {
        Some(g) => (
            bpm.value()
                .map_or(g.bpm, |m| blend(m, f64::from(g.bpm)).round() as i32),
            brightness.value().map_or(g.brightness, |m| blend(m, g.brightness)),
            density.value().map_or(g.density, |m| blend(m, g.density)),
        ),
        None => (
            bpm.value().map_or(DEFAULT_BPM, |m| m.round() as i32),
            brightness.value().unwrap_or(DEFAULT_BRIGHTNESS),
            density.value().unwrap_or(DEFAULT_DENSITY),
        ),
    };

    let config = PromptConfig {
        prompt: build_prompt(keywords, genre_tuning),
        bpm: out_bpm.clamp(MIN_BPM, MAX_BPM),
        brightness: out_brightness.clamp(0.0, 1.0),
        density: out_density.clamp(0.0, 1.0),
    };
    tracing::debug!(
        bpm = config.bpm,
        brightness = config.brightness,
        density = config.density,
        genre_resolved = genre_tuning.is_some(),
        "resolved prompt config"
    );
    config
}

fn build_prompt<S: AsRef<str>>(keywords: &[S], genre: Option<&GenreTuning>) -> String {
    let style = genre.map_or(GENERIC_STYLE, |g| g.style_text);
    let hint = keywords
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{style}. {OPENING_DIRECTIVE}. Mood hint: {hint}. {INSTRUMENTAL_ONLY}.")
}
