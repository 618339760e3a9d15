use moodtrack_core::wav::{encode_wav, header_sizes, pcm_duration, WavSpec, WAV_HEADER_LEN};
use std::time::Duration;

fn u16_at(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn u32_at(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[test]
fn header_matches_default_operating_point() {
    let pcm = vec![0x11u8; 1000];
    let wav = encode_wav(&pcm, WavSpec::default());

    assert_eq!(wav.len(), WAV_HEADER_LEN + pcm.len());
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), 1000 + 36);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
    assert_eq!(u16_at(&wav, 22), 2);
    assert_eq!(u32_at(&wav, 24), 48_000);
    assert_eq!(u32_at(&wav, 28), 192_000);
    assert_eq!(u16_at(&wav, 32), 4);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 1000);
    assert_eq!(&wav[44..], &pcm[..]);
}

#[test]
fn empty_pcm_still_gets_a_valid_header() {
    let wav = encode_wav(&[], WavSpec::default());
    assert_eq!(wav.len(), WAV_HEADER_LEN);
    assert_eq!(u32_at(&wav, 4), 36);
    assert_eq!(u32_at(&wav, 40), 0);
}

#[test]
fn mono_spec_changes_rates() {
    let spec = WavSpec {
        sample_rate: 22_050,
        channels: 1,
        bits_per_sample: 8,
    };
    let wav = encode_wav(&[1, 2, 3], spec);
    assert_eq!(u16_at(&wav, 22), 1);
    assert_eq!(u32_at(&wav, 28), 22_050);
    assert_eq!(u16_at(&wav, 32), 1);
    assert_eq!(u16_at(&wav, 34), 8);
}

#[test]
fn duration_from_byte_count() {
    assert_eq!(pcm_duration(192_000 * 10, WavSpec::default()), Duration::from_secs(10));
    assert_eq!(pcm_duration(0, WavSpec::default()), Duration::ZERO);
}

#[test]
fn header_sizes_saturate_at_the_riff_limit() {
    assert_eq!(header_sizes(1000), (1036, 1000));
    assert_eq!(header_sizes(u32::MAX as usize - 10), (u32::MAX, u32::MAX - 10));
    assert_eq!(header_sizes(usize::MAX), (u32::MAX, u32::MAX));
}
