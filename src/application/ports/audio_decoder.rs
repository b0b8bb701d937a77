/// Mono waveform at the sample rate read from the stream itself; the
/// pipeline never forces a resample.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
}
