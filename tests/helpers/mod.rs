#![allow(dead_code)]

/// Minimal PCM WAV container around raw 16-bit samples. `channels` frames
/// are interleaved.
pub fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

pub fn sine_wave(freq_hz: f32, sample_rate: u32, duration_secs: f32) -> Vec<i16> {
    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (0.5 * (2.0 * std::f32::consts::PI * freq_hz * t).sin() * i16::MAX as f32) as i16
        })
        .collect()
}
