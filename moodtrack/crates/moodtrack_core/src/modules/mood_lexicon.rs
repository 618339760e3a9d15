/// Acoustic bias contributed by a single mood keyword. Unset fields do not
/// take part in aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodTuning {
    pub bpm: Option<i32>,
    pub brightness: Option<f64>,
    pub density: Option<f64>,
}

const fn full(bpm: i32, brightness: f64, density: f64) -> MoodTuning {
    MoodTuning {
        bpm: Some(bpm),
        brightness: Some(brightness),
        density: Some(density),
    }
}

const fn only_brightness(brightness: f64) -> MoodTuning {
    MoodTuning {
        bpm: None,
        brightness: Some(brightness),
        density: None,
    }
}

const fn only_density(density: f64) -> MoodTuning {
    MoodTuning {
        bpm: None,
        brightness: None,
        density: Some(density),
    }
}

const fn tempo_density(bpm: i32, density: f64) -> MoodTuning {
    MoodTuning {
        bpm: Some(bpm),
        brightness: None,
        density: Some(density),
    }
}

// Keys are stored lowercase. Order matters only for equal-length fuzzy ties.
const LEXICON: &[(&str, MoodTuning)] = &[
    // color / temperature
    ("따뜻한", full(85, 0.7, 0.4)),
    ("차가운", full(90, 0.35, 0.4)),
    ("밝은", full(100, 0.8, 0.5)),
    ("어두운", full(75, 0.25, 0.5)),
    ("화사한", full(105, 0.85, 0.5)),
    ("선명한", full(105, 0.75, 0.6)),
    ("파스텔", full(88, 0.7, 0.35)),
    ("흑백", full(70, 0.3, 0.3)),
    ("무채색", full(72, 0.3, 0.3)),
    // lighting
    ("부드러운", full(78, 0.6, 0.3)),
    ("드라마틱한", full(110, 0.45, 0.75)),
    ("자연광", full(90, 0.65, 0.35)),
    ("역광", only_brightness(0.55)),
    ("네온", full(118, 0.6, 0.7)),
    ("노을", full(80, 0.6, 0.35)),
    // expression
    ("행복한", full(120, 0.8, 0.6)),
    ("설레는", full(108, 0.75, 0.5)),
    ("미소", full(110, 0.75, 0.5)),
    ("신나는", full(132, 0.8, 0.75)),
    ("슬픈", full(65, 0.3, 0.3)),
    ("우울한", full(62, 0.25, 0.3)),
    ("쓸쓸한", full(68, 0.35, 0.25)),
    ("외로운", full(66, 0.35, 0.25)),
    ("그리운", full(72, 0.45, 0.3)),
    ("긴장감", full(120, 0.4, 0.7)),
    ("불안한", full(105, 0.3, 0.65)),
    ("화난", full(140, 0.4, 0.85)),
    ("진지한", full(85, 0.4, 0.5)),
    ("평온한", full(72, 0.55, 0.25)),
    ("편안한", full(75, 0.6, 0.3)),
    ("로맨틱한", full(82, 0.65, 0.4)),
    // composition / space
    ("안정감", tempo_density(80, 0.35)),
    ("역동적인", full(130, 0.6, 0.8)),
    ("웅장한", full(100, 0.5, 0.85)),
    ("고요한", full(60, 0.45, 0.15)),
    ("몽환적인", full(76, 0.6, 0.35)),
    ("신비로운", full(84, 0.5, 0.45)),
    ("실내", only_density(0.35)),
    ("야외", only_brightness(0.65)),
    // english aliases
    ("warm", full(85, 0.7, 0.4)),
    ("cold", full(90, 0.35, 0.4)),
    ("bright", full(100, 0.8, 0.5)),
    ("dark", full(75, 0.25, 0.5)),
    ("soft", full(78, 0.6, 0.3)),
    ("dramatic", full(110, 0.45, 0.75)),
    ("happy", full(120, 0.8, 0.6)),
    ("excited", full(132, 0.8, 0.75)),
    ("sad", full(65, 0.3, 0.3)),
    ("lonely", full(66, 0.35, 0.25)),
    ("nostalgic", full(72, 0.45, 0.3)),
    ("tense", full(120, 0.4, 0.7)),
    ("anxious", full(105, 0.3, 0.65)),
    ("angry", full(140, 0.4, 0.85)),
    ("calm", full(72, 0.55, 0.25)),
    ("cozy", full(75, 0.6, 0.3)),
    ("romantic", full(82, 0.65, 0.4)),
    ("dynamic", full(130, 0.6, 0.8)),
    ("epic", full(100, 0.5, 0.85)),
    ("dreamy", full(76, 0.6, 0.35)),
    ("mysterious", full(84, 0.5, 0.45)),
];

pub fn entries() -> &'static [(&'static str, MoodTuning)] {
    LEXICON
}

pub fn lookup_exact(keyword: &str) -> Option<&'static MoodTuning> {
    let k = keyword.to_lowercase();
    LEXICON.iter().find(|(key, _)| *key == k).map(|(_, t)| t)
}

/// Substring containment in either direction. The longest qualifying key
/// wins; equal lengths keep the earliest table entry.
pub fn lookup_fuzzy(keyword: &str) -> Option<(&'static str, &'static MoodTuning)> {
    let k = keyword.to_lowercase();
    if k.is_empty() {
        return None;
    }

    let mut best: Option<(&'static str, &'static MoodTuning, usize)> = None;
    for (key, tuning) in LEXICON {
        if !(k.contains(key) || key.contains(k.as_str())) {
            continue;
        }
        let len = key.chars().count();
        if best.map_or(true, |(_, _, best_len)| len > best_len) {
            best = Some((*key, tuning, len));
        }
    }
    best.map(|(key, tuning, _)| (key, tuning))
}

pub fn lookup(keyword: &str) -> Option<&'static MoodTuning> {
    lookup_exact(keyword).or_else(|| lookup_fuzzy(keyword).map(|(_, t)| t))
}
