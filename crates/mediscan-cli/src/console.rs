//! Terminal backends for speech output and voice input.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::Colorize;
use mediscan_core::error::{MediscanError, Result};
use mediscan_core::speech::{SpeechSynthesizer, Utterance, VoiceInfo};
use mediscan_core::voice::VoiceRecognizer;

/// Prints each utterance instead of speaking it.
///
/// Printing completes immediately, so nothing is ever left speaking.
#[derive(Debug, Default)]
pub struct ConsoleSynthesizer;

impl ConsoleSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn is_speaking(&self) -> bool {
        false
    }

    fn speak(&self, utterance: Utterance) {
        println!("{} {}", "[speech]".bright_magenta(), utterance.text.bright_blue());
    }

    fn cancel(&self) {}

    fn voices(&self) -> Vec<VoiceInfo> {
        vec![VoiceInfo {
            name: "console".to_string(),
            language: "en-US".to_string(),
            is_default: true,
        }]
    }
}

/// Treats one typed line as the recognized transcript.
#[derive(Debug, Default)]
pub struct PromptVoiceRecognizer;

#[async_trait]
impl VoiceRecognizer for PromptVoiceRecognizer {
    async fn listen_once(&self, language: &str) -> Result<String> {
        print!("{} ", format!("(voice {language})").yellow());
        io::stdout().flush()?;

        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await
        .map_err(|e| MediscanError::internal(format!("voice prompt task failed: {e}")))??;

        let transcript = line.trim();
        if transcript.is_empty() {
            return Err(MediscanError::voice_input("no speech detected"));
        }
        Ok(transcript.to_string())
    }
}
