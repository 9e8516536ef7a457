//! Speech output seam - the dispatcher never does audio itself
//!
//! Real synthesis lives behind the `SpeechEngine` trait; the default engine
//! just logs what would be spoken, which keeps the matching core testable
//! without an audio stack.

use std::sync::{Arc, Mutex};

use log::{info, warn};

pub trait SpeechEngine: Send {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error>>;

    fn name(&self) -> &str;
}

/// Default engine: logs spoken text instead of synthesizing it.
pub struct LogEngine;

impl SpeechEngine for LogEngine {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        info!("speak: {}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Speech controller: wraps an engine with an on/off switch.
pub struct Speech {
    engine: Box<dyn SpeechEngine>,
    enabled: bool,
}

impl Speech {
    pub fn new(engine: Box<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the switch, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Speak `text` if enabled. Returns whether anything was spoken;
    /// engine failures are logged, never propagated.
    pub fn speak(&self, text: &str) -> bool {
        if !self.enabled {
            return false;
        }
        match self.engine.speak(text) {
            Ok(()) => true,
            Err(e) => {
                warn!("speech engine '{}' failed: {}", self.engine.name(), e);
                false
            }
        }
    }

    pub fn engine_info(&self) -> String {
        format!(
            "TTS engine: {} ({})",
            self.engine.name(),
            if self.enabled { "enabled" } else { "disabled" }
        )
    }
}

pub type SharedSpeech = Arc<Mutex<Speech>>;

pub fn new_shared(engine: Box<dyn SpeechEngine>) -> SharedSpeech {
    Arc::new(Mutex::new(Speech::new(engine)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut speech = Speech::new(Box::new(LogEngine));
        assert!(speech.is_enabled());
        assert!(!speech.toggle());
        assert!(speech.toggle());
    }

    #[test]
    fn test_disabled_speech_is_silent() {
        let mut speech = Speech::new(Box::new(LogEngine));
        speech.toggle();
        assert!(!speech.speak("hola"));
    }

    #[test]
    fn test_engine_info_names_engine() {
        let speech = Speech::new(Box::new(LogEngine));
        assert!(speech.engine_info().contains("log"));
        assert!(speech.engine_info().contains("enabled"));
    }
}
