mod helpers;

use helpers::{build_wav, sine_wave};
use hivesense::application::ports::{AudioDecoder, AudioDecoderError};
use hivesense::infrastructure::audio::SymphoniaAudioDecoder;

#[test]
fn given_wav_bytes_when_decoding_then_native_sample_rate_is_preserved() {
    let samples = sine_wave(440.0, 44_100, 0.5);
    let wav = build_wav(44_100, 1, &samples);
    let decoder = SymphoniaAudioDecoder;

    let decoded = decoder.decode(&wav).unwrap();

    assert_eq!(decoded.sample_rate, 44_100);
    assert_eq!(decoded.samples.len(), samples.len());
}

#[test]
fn given_low_sample_rate_wav_when_decoding_then_no_resampling_occurs() {
    let samples = sine_wave(200.0, 8_000, 0.25);
    let wav = build_wav(8_000, 1, &samples);
    let decoder = SymphoniaAudioDecoder;

    let decoded = decoder.decode(&wav).unwrap();

    assert_eq!(decoded.sample_rate, 8_000);
    assert_eq!(decoded.samples.len(), samples.len());
}

#[test]
fn given_stereo_wav_when_decoding_then_downmixes_to_mono() {
    let frames = 4_410;
    // Interleave left/right with opposite signs; the downmix averages them.
    let mut interleaved = Vec::with_capacity(frames * 2);
    for _ in 0..frames {
        interleaved.push(10_000i16);
        interleaved.push(-10_000i16);
    }
    let wav = build_wav(44_100, 2, &interleaved);
    let decoder = SymphoniaAudioDecoder;

    let decoded = decoder.decode(&wav).unwrap();

    assert_eq!(decoded.samples.len(), frames);
    assert!(decoded.samples.iter().all(|s| s.abs() < 1e-3));
}

#[test]
fn given_corrupted_bytes_when_decoding_then_returns_decoding_error() {
    let garbage = vec![0xFFu8; 128];
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&garbage);

    assert!(matches!(result, Err(AudioDecoderError::DecodingFailed(_))));
}

#[test]
fn given_empty_bytes_when_decoding_then_returns_decoding_error() {
    let decoder = SymphoniaAudioDecoder;

    let result = decoder.decode(&[]);

    assert!(matches!(result, Err(AudioDecoderError::DecodingFailed(_))));
}
