use realfft::RealFftPlanner;

use crate::application::ports::FeatureExtractor;
use crate::domain::{FeatureVector, MFCC_DIMENSIONS};

/// FFT window length in samples. Matches the extraction parameters the
/// pretrained artifacts were fit with.
const N_FFT: usize = 512;
/// Hop between successive analysis frames, in samples.
const HOP_LENGTH: usize = 128;
/// Triangular mel filters applied to the power spectrum.
const N_MELS: usize = 128;
/// Floor added before the log to keep silent filters finite.
const LOG_FLOOR: f64 = 1e-10;

/// MFCC feature extractor: Hann-windowed real FFT, mel filterbank, log
/// compression, orthonormal DCT-II, mean pooling over time.
///
/// Frame layout is non-centered: frames start at multiples of
/// [`HOP_LENGTH`]; input shorter than one window is zero-padded to a single
/// frame, so the output is always [`MFCC_DIMENSIONS`] values.
pub struct MfccExtractor {
    window: Vec<f32>,
    // DCT-II basis, row-major: MFCC_DIMENSIONS rows of N_MELS cosines.
    dct_basis: Vec<f64>,
}

impl MfccExtractor {
    pub fn new() -> Self {
        let window: Vec<f32> = (0..N_FFT)
            .map(|i| {
                0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / (N_FFT as f32 - 1.0)).cos())
            })
            .collect();

        let mut dct_basis = Vec::with_capacity(MFCC_DIMENSIONS * N_MELS);
        for k in 0..MFCC_DIMENSIONS {
            let norm = if k == 0 {
                (1.0 / N_MELS as f64).sqrt()
            } else {
                (2.0 / N_MELS as f64).sqrt()
            };
            for n in 0..N_MELS {
                let angle = std::f64::consts::PI / N_MELS as f64 * (n as f64 + 0.5) * k as f64;
                dct_basis.push(norm * angle.cos());
            }
        }

        Self { window, dct_basis }
    }
}

impl Default for MfccExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for MfccExtractor {
    fn extract(&self, samples: &[f32], sample_rate: u32) -> FeatureVector {
        let num_frames = if samples.len() >= N_FFT {
            (samples.len() - N_FFT) / HOP_LENGTH + 1
        } else {
            1
        };

        let filterbank = mel_filterbank(sample_rate, N_FFT, N_MELS);

        let mut planner = RealFftPlanner::<f32>::new();
        let plan = planner.plan_fft_forward(N_FFT);
        let mut input_buf = plan.make_input_vec();
        let mut spectrum_buf = plan.make_output_vec();
        let mut scratch = plan.make_scratch_vec();

        let mut power = vec![0f64; N_FFT / 2 + 1];
        let mut mel_log = [0f64; N_MELS];
        let mut sums = [0f64; MFCC_DIMENSIONS];

        for frame in 0..num_frames {
            let start = frame * HOP_LENGTH;

            // Copy, window, zero-pad past the end of the clip.
            for (i, slot) in input_buf.iter_mut().enumerate() {
                *slot = match samples.get(start + i) {
                    Some(&s) => s * self.window[i],
                    None => 0.0,
                };
            }

            if plan
                .process_with_scratch(&mut input_buf, &mut spectrum_buf, &mut scratch)
                .is_err()
            {
                // realfft only fails on mismatched buffer lengths, which the
                // plan-allocated buffers rule out; treat as a silent frame.
                power.iter_mut().for_each(|p| *p = 0.0);
            } else {
                for (p, c) in power.iter_mut().zip(spectrum_buf.iter()) {
                    *p = (c.re as f64) * (c.re as f64) + (c.im as f64) * (c.im as f64);
                }
            }

            for (m, filter) in mel_log.iter_mut().zip(filterbank.chunks(N_FFT / 2 + 1)) {
                let energy: f64 = filter
                    .iter()
                    .zip(power.iter())
                    .map(|(&w, &p)| w * p)
                    .sum();
                *m = (energy + LOG_FLOOR).ln();
            }

            for (k, sum) in sums.iter_mut().enumerate() {
                let row = &self.dct_basis[k * N_MELS..(k + 1) * N_MELS];
                *sum += row
                    .iter()
                    .zip(mel_log.iter())
                    .map(|(&b, &m)| b * m)
                    .sum::<f64>();
            }
        }

        let mut means = [0f64; MFCC_DIMENSIONS];
        for (mean, sum) in means.iter_mut().zip(sums.iter()) {
            *mean = sum / num_frames as f64;
        }

        FeatureVector::new(means)
    }
}

/// Triangular mel filterbank over `[0, sample_rate / 2]`, row-major with
/// `n_fft / 2 + 1` weights per filter.
fn mel_filterbank(sample_rate: u32, n_fft: usize, n_mels: usize) -> Vec<f64> {
    let num_bins = n_fft / 2 + 1;
    let nyquist = sample_rate as f64 / 2.0;

    let mel_max = hz_to_mel(nyquist);
    // n_mels + 2 equally spaced mel points give each filter its left edge,
    // peak, and right edge.
    let mel_points: Vec<f64> = (0..n_mels + 2)
        .map(|i| mel_to_hz(mel_max * i as f64 / (n_mels + 1) as f64))
        .collect();

    let bin_hz = sample_rate as f64 / n_fft as f64;
    let mut weights = vec![0f64; n_mels * num_bins];

    for m in 0..n_mels {
        let (left, center, right) = (mel_points[m], mel_points[m + 1], mel_points[m + 2]);
        let row = &mut weights[m * num_bins..(m + 1) * num_bins];
        for (bin, w) in row.iter_mut().enumerate() {
            let freq = bin as f64 * bin_hz;
            if freq > left && freq < right {
                *w = if freq <= center {
                    (freq - left) / (center - left)
                } else {
                    (right - freq) / (right - center)
                };
            }
        }
    }

    weights
}

fn hz_to_mel(hz: f64) -> f64 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f64) -> f64 {
    700.0 * (10f64.powf(mel / 2595.0) - 1.0)
}
