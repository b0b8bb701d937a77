mod audio_decoder;
mod mfcc;

pub use audio_decoder::SymphoniaAudioDecoder;
pub use mfcc::MfccExtractor;
