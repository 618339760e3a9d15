mod modules;

pub use modules::{
    config, gemini, genre_table, lyria, media, mood_lexicon, mood_parser, mood_prompt,
    prompt_resolver, protocol, soundtrack, wav,
};
