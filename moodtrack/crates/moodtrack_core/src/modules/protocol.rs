pub use moodtrack_protocol::{
    AudioChunk, FilteredPrompt, GenrePreset, LiveMusicClientContent, LiveMusicClientMessage,
    LiveMusicClientSetup, LiveMusicGenerationConfig, LiveMusicServerMessage, MoodAnalysis,
    PlaybackControl, PromptConfig, WeightedPrompt,
};
