//! Text-to-speech output.
//!
//! - `synthesizer`: The platform `SpeechSynthesizer` seam and `Utterance`
//! - `output`: `SpeechOutput`, the single-utterance adapter used by sessions

mod output;
mod synthesizer;

pub use output::SpeechOutput;
pub use synthesizer::{SpeechSynthesizer, Utterance, VoiceInfo};
