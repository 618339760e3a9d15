pub mod config;
pub mod gemini;
pub mod genre_table;
pub mod lyria;
pub mod media;
pub mod mood_lexicon;
pub mod mood_parser;
pub mod mood_prompt;
pub mod prompt_resolver;
pub mod protocol;
pub mod soundtrack;
pub mod wav;
