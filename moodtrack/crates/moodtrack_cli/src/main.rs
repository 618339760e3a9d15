use clap::{Parser, Subcommand};
use moodtrack_core::config::StudioConfig;
use moodtrack_core::gemini::analyze_mood;
use moodtrack_core::media::VideoInput;
use moodtrack_core::prompt_resolver::resolve;
use moodtrack_core::soundtrack::{generate_soundtrack, score_video, soundtrack_file_name, Soundtrack};
use moodtrack_core::{genre_table, mood_lexicon};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(name = "moodtrack", about = "Mood-tagged soundtrack generation for short video clips")]
struct Args {
    /// Read the Gemini API key from a file instead of GEMINI_API_KEY.
    #[arg(long, value_name = "PATH", global = true)]
    api_key_file: Option<PathBuf>,

    #[arg(long, global = true)]
    gemini_model: Option<String>,

    #[arg(long, global = true)]
    lyria_model: Option<String>,

    /// Seconds of audio to collect from the music session (1..=60).
    #[arg(long, global = true)]
    collect_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generation parameters for keywords and an optional genre (offline).
    Resolve {
        #[arg(long = "keyword", value_delimiter = ',')]
        keywords: Vec<String>,
        #[arg(long)]
        genre: Option<String>,
    },
    /// List the known genre labels.
    Genres,
    /// List the mood lexicon.
    Lexicon,
    /// Extract mood keywords and a genre guess from a video clip.
    Analyze {
        #[arg(long, value_name = "PATH")]
        video: PathBuf,
    },
    /// Generate a soundtrack WAV from keywords and an optional genre.
    Generate {
        #[arg(long = "keyword", value_delimiter = ',')]
        keywords: Vec<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Analyze a video clip and generate a matching soundtrack WAV.
    Score {
        #[arg(long, value_name = "PATH")]
        video: PathBuf,
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    match args.command {
        Command::Resolve { keywords, genre } => {
            let keywords = clean_keywords(keywords);
            let out = resolve(&keywords, genre.as_deref().map(str::trim));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Genres => {
            println!("{}", serde_json::to_string_pretty(&genre_table::presets())?);
        }
        Command::Lexicon => {
            for (key, t) in mood_lexicon::entries() {
                println!(
                    "{key:<12} bpm={:<5} brightness={:<5} density={}",
                    fmt_opt(t.bpm),
                    fmt_opt(t.brightness),
                    fmt_opt(t.density)
                );
            }
        }
        Command::Analyze { video } => {
            let video = VideoInput::from_file(&video)?;
            let analysis = analyze_mood(&config, &video).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Generate {
            keywords,
            genre,
            out,
        } => {
            let keywords = clean_keywords(keywords);
            let genre = genre.as_deref().map(str::trim).filter(|g| !g.is_empty());
            let soundtrack = generate_soundtrack(&config, &keywords, genre).await?;
            let label = genre
                .map(str::to_string)
                .or_else(|| keywords.first().cloned())
                .unwrap_or_default();
            let path = out.unwrap_or_else(|| PathBuf::from(soundtrack_file_name(&label)));
            write_soundtrack(&path, &soundtrack)?;
        }
        Command::Score { video, out } => {
            let video = VideoInput::from_file(&video)?;
            let (analysis, soundtrack) = score_video(&config, &video).await?;
            eprintln!("keywords: {}", analysis.keywords.join(", "));
            eprintln!("genre: {}", analysis.genre.as_deref().unwrap_or("-"));
            let label = analysis.genre.clone().unwrap_or_default();
            let path = out.unwrap_or_else(|| PathBuf::from(soundtrack_file_name(&label)));
            write_soundtrack(&path, &soundtrack)?;
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<StudioConfig> {
    let mut config = StudioConfig::from_env();

    if let Some(path) = args.api_key_file.as_deref() {
        let key = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("failed to read api key file {}: {e}", path.display())
        })?;
        config.api_key = Some(Zeroizing::new(key.trim().to_string()));
    }
    if let Some(m) = args.gemini_model.as_deref() {
        config.gemini_model = m.trim().to_string();
    }
    if let Some(m) = args.lyria_model.as_deref() {
        config.lyria_model = m.trim().to_string();
    }
    if let Some(secs) = args.collect_secs {
        config.collect_window = Duration::from_secs(secs.clamp(1, 60));
    }

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn clean_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

fn write_soundtrack(path: &Path, soundtrack: &Soundtrack) -> anyhow::Result<()> {
    std::fs::write(path, &soundtrack.wav)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    eprintln!("wrote {} ({} bytes)", path.display(), soundtrack.wav.len());
    println!("{}", serde_json::to_string_pretty(&soundtrack.prompt_config)?);
    Ok(())
}

fn fmt_opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}
