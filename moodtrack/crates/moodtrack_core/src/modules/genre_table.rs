use crate::modules::protocol::GenrePreset;

/// Baseline acoustic identity of a drama genre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreTuning {
    pub style_text: &'static str,
    pub bpm: i32,
    pub brightness: f64,
    pub density: f64,
}

const GENRES: &[(&str, GenreTuning)] = &[
    (
        "로맨스",
        GenreTuning {
            style_text: "Tender Korean drama romance soundtrack with soft piano melody, gentle acoustic guitar arpeggios, warm string ensemble, and delicate celesta. Sweet, emotional, and heartwarming",
            bpm: 88,
            brightness: 0.65,
            density: 0.4,
        },
    ),
    (
        "멜로",
        GenreTuning {
            style_text: "Deeply emotional Korean melodrama soundtrack with melancholic solo violin, sorrowful piano chords, lush string orchestra swells, and gentle oboe. Bittersweet and tearful",
            bpm: 70,
            brightness: 0.4,
            density: 0.3,
        },
    ),
    (
        "스릴러",
        GenreTuning {
            style_text: "Intense Korean thriller drama soundtrack with dark pulsing synths, tense string tremolo, low brass drones, eerie piano notes, and suspenseful percussion. Dark and gripping",
            bpm: 115,
            brightness: 0.25,
            density: 0.7,
        },
    ),
    (
        "미스터리",
        GenreTuning {
            style_text: "Enigmatic Korean mystery drama soundtrack with sparse plucked strings, muted piano clusters, ticking percussion, and low clarinet lines. Curious and shadowy",
            bpm: 96,
            brightness: 0.3,
            density: 0.5,
        },
    ),
    (
        "사극",
        GenreTuning {
            style_text: "Epic Korean historical drama soundtrack with gayageum, daegeum, and haegeum traditional instruments layered with grand orchestral strings, deep taiko drums, and majestic brass. Cinematic and powerful",
            bpm: 100,
            brightness: 0.5,
            density: 0.7,
        },
    ),
    (
        "판타지",
        GenreTuning {
            style_text: "Ethereal Korean fantasy drama soundtrack with shimmering harp arpeggios, soaring orchestral strings, mystical choir pads, enchanting flute melody, and magical celesta bells. Dreamy and wondrous",
            bpm: 90,
            brightness: 0.7,
            density: 0.5,
        },
    ),
    (
        "코미디",
        GenreTuning {
            style_text: "Playful Korean comedy drama soundtrack with bouncy pizzicato strings, cheerful ukulele, light xylophone melody, whimsical woodwinds, and upbeat claps. Fun and lighthearted",
            bpm: 130,
            brightness: 0.8,
            density: 0.6,
        },
    ),
    (
        "액션",
        GenreTuning {
            style_text: "High-energy Korean action drama soundtrack with driving orchestral percussion, powerful brass hits, fast string ostinato, intense electric guitar riffs, and cinematic impact drums. Adrenaline-pumping",
            bpm: 150,
            brightness: 0.6,
            density: 0.8,
        },
    ),
    (
        "일상",
        GenreTuning {
            style_text: "Warm Korean slice-of-life drama soundtrack with gentle acoustic guitar fingerpicking, soft piano chords, light brushed drums, cozy ukulele, and mellow flute. Calm and comforting",
            bpm: 95,
            brightness: 0.6,
            density: 0.3,
        },
    ),
    (
        "의학",
        GenreTuning {
            style_text: "Focused Korean medical drama soundtrack with steady electronic pulses, hopeful string pads, clean piano motifs, and restrained percussion. Urgent yet humane",
            bpm: 100,
            brightness: 0.45,
            density: 0.6,
        },
    ),
    (
        "법정",
        GenreTuning {
            style_text: "Weighty Korean legal drama soundtrack with staccato low strings, solemn brass chords, measured timpani, and a cool piano theme. Tense and principled",
            bpm: 104,
            brightness: 0.35,
            density: 0.6,
        },
    ),
];

pub fn lookup(label: &str) -> Option<&'static GenreTuning> {
    GENRES.iter().find(|(l, _)| *l == label).map(|(_, t)| t)
}

pub fn presets() -> Vec<GenrePreset> {
    GENRES
        .iter()
        .map(|(label, _)| GenrePreset {
            keyword: label.to_string(),
            label: label.to_string(),
        })
        .collect()
}
