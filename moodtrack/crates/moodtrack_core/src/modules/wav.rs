use std::time::Duration;

pub const WAV_HEADER_LEN: usize = 44;

/// PCM layout of the raw samples. The live music service emits 48 kHz,
/// stereo, 16-bit little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            bits_per_sample: 16,
        }
    }
}

impl WavSpec {
    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

/// RIFF chunk size and `data` chunk size for `pcm_len` bytes of samples.
/// RIFF sizes are 32-bit, so both saturate at `u32::MAX` (4 GiB).
pub fn header_sizes(pcm_len: usize) -> (u32, u32) {
    let data_len = u32::try_from(pcm_len).unwrap_or(u32::MAX);
    let riff_len = data_len.saturating_add(WAV_HEADER_LEN as u32 - 8);
    (riff_len, data_len)
}

/// Prepends a canonical 44-byte RIFF/WAVE header to raw PCM.
pub fn encode_wav(pcm: &[u8], spec: WavSpec) -> Vec<u8> {
    let (riff_len, data_len) = header_sizes(pcm.len());
    let mut out = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_len.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&spec.channels.to_le_bytes());
    out.extend_from_slice(&spec.sample_rate.to_le_bytes());
    out.extend_from_slice(&spec.byte_rate().to_le_bytes());
    out.extend_from_slice(&spec.block_align().to_le_bytes());
    out.extend_from_slice(&spec.bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

pub fn pcm_duration(pcm_len: usize, spec: WavSpec) -> Duration {
    let rate = spec.byte_rate();
    if rate == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(pcm_len as f64 / f64::from(rate))
}
