use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError, DecodedAudio};

/// Container/codec-agnostic decoder backed by symphonia. Output stays at the
/// stream's native sample rate; multi-channel input is downmixed to mono.
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let hint = Hint::new();
        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();
        let decoder_opts = DecoderOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &format_opts, &metadata_opts)
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;
        let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &decoder_opts)
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("codec: {}", e)))?;

        let mut samples_out: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    tracing::warn!(error = %e, "skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }

            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            let samples = sample_buf.samples();

            if channels > 1 {
                for frame in samples.chunks(channels) {
                    let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
                    samples_out.push(mono);
                }
            } else {
                samples_out.extend_from_slice(samples);
            }
        }

        if samples_out.is_empty() {
            return Err(AudioDecoderError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        tracing::debug!(
            samples = samples_out.len(),
            sample_rate,
            duration_secs = samples_out.len() as f32 / sample_rate as f32,
            "audio decoded to mono PCM at native rate"
        );

        Ok(DecodedAudio {
            samples: samples_out,
            sample_rate,
        })
    }
}
