//! Voice output control and repeat commands

use std::sync::{Arc, Mutex};

use crate::command::{Command, CommandError};
use crate::speech::SharedSpeech;

use super::keyword_vec;

pub struct TtsControlCommand {
    keywords: Vec<String>,
    speech: SharedSpeech,
}

impl TtsControlCommand {
    pub fn new(speech: SharedSpeech) -> Self {
        Self {
            keywords: keyword_vec(&[
                "voz",
                "voice",
                "hablar",
                "speak",
                "silenciar voz",
                "mute voice",
                "activar voz",
                "enable voice",
            ]),
            speech,
        }
    }
}

impl Command for TtsControlCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Controls text-to-speech voice output"
    }

    fn execute(&self, command_text: &str) -> Result<String, CommandError> {
        let text = command_text.to_lowercase();
        let mut speech = self
            .speech
            .lock()
            .map_err(|_| CommandError::Unavailable("speech engine".to_string()))?;

        let contains_any =
            |words: &[&str]| words.iter().any(|w| text.contains(w));

        if contains_any(&["silenciar", "mute", "desactivar", "disable"]) {
            if speech.is_enabled() {
                speech.toggle();
                Ok("Voice output disabled".to_string())
            } else {
                Ok("Voice output is already disabled".to_string())
            }
        } else if contains_any(&["activar", "enable", "encender", "turn on"]) {
            if speech.is_enabled() {
                Ok("Voice output is already enabled".to_string())
            } else {
                speech.toggle();
                Ok("Voice output enabled".to_string())
            }
        } else if contains_any(&["estado", "status", "info"]) {
            Ok(speech.engine_info())
        } else if contains_any(&["prueba", "test"]) {
            if speech.speak("This is a voice test.") {
                Ok("Voice test completed".to_string())
            } else {
                Ok("Voice test failed (voice output is disabled)".to_string())
            }
        } else {
            Ok("Voice command not recognized. Try 'activar voz', 'silenciar voz' or 'estado voz'."
                .to_string())
        }
    }
}

/// Repeats the last response. The REPL loop refreshes the shared buffer
/// after every dispatched utterance.
pub struct RepeatCommand {
    keywords: Vec<String>,
    speech: SharedSpeech,
    last_response: Arc<Mutex<String>>,
}

impl RepeatCommand {
    pub fn new(speech: SharedSpeech, last_response: Arc<Mutex<String>>) -> Self {
        Self {
            keywords: keyword_vec(&["repite", "repeat", "di otra vez", "say again"]),
            speech,
            last_response,
        }
    }
}

impl Command for RepeatCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Repeats the last response"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        let last = self
            .last_response
            .lock()
            .map_err(|_| CommandError::Unavailable("response buffer".to_string()))?
            .clone();

        if last.is_empty() {
            return Ok("No previous response to repeat".to_string());
        }

        if let Ok(speech) = self.speech.lock() {
            speech.speak(&last);
        }
        Ok(format!("Repeating: {}", last))
    }
}
