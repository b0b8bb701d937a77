use hivesense::application::ports::FeatureExtractor;
use hivesense::domain::MFCC_DIMENSIONS;
use hivesense::infrastructure::audio::MfccExtractor;

fn sine(freq_hz: f32, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.5 * (2.0 * std::f32::consts::PI * freq_hz * t).sin()
        })
        .collect()
}

#[test]
fn given_clips_of_any_duration_when_extracting_then_output_is_always_40_dimensional() {
    let extractor = MfccExtractor::new();

    // Includes clips shorter than one FFT window (512 samples).
    for num_samples in [1usize, 100, 511, 512, 513, 1_000, 22_050, 44_100] {
        let samples = sine(440.0, 22_050, num_samples);
        let features = extractor.extract(&samples, 22_050);

        assert_eq!(features.as_slice().len(), MFCC_DIMENSIONS);
        assert_eq!(features.dimensions(), MFCC_DIMENSIONS);
        assert!(
            features.as_slice().iter().all(|v| v.is_finite()),
            "non-finite coefficient for {} samples",
            num_samples
        );
    }
}

#[test]
fn given_identical_input_when_extracting_twice_then_outputs_are_identical() {
    let extractor = MfccExtractor::new();
    let samples = sine(330.0, 44_100, 44_100);

    let first = extractor.extract(&samples, 44_100);
    let second = extractor.extract(&samples, 44_100);

    assert_eq!(first, second);
}

#[test]
fn given_different_tones_when_extracting_then_feature_vectors_differ() {
    let extractor = MfccExtractor::new();
    let low = sine(220.0, 22_050, 22_050);
    let high = sine(3_520.0, 22_050, 22_050);

    let low_features = extractor.extract(&low, 22_050);
    let high_features = extractor.extract(&high, 22_050);

    let max_diff = low_features
        .as_slice()
        .iter()
        .zip(high_features.as_slice())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    assert!(
        max_diff > 1.0,
        "spectrally distinct tones produced near-identical features"
    );
}

#[test]
fn given_silence_when_extracting_then_coefficients_are_finite() {
    let extractor = MfccExtractor::new();
    let silence = vec![0.0f32; 8_192];

    let features = extractor.extract(&silence, 16_000);

    assert!(features.as_slice().iter().all(|v| v.is_finite()));
}
