//! TOML configuration for the assistant
//!
//! Everything has a default so the binary runs without a config file.
//! Stop words and thresholds live here rather than as module constants so
//! matching behavior is explicit and reproducible in tests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Assistant name, used in greetings and the help text.
    #[serde(default = "default_name")]
    pub name: String,

    /// Trigger words that must appear before any command is considered.
    /// "purina" is kept as a common mis-transcription of "furina".
    #[serde(default = "default_activation_words")]
    pub activation_words: Vec<String>,

    /// Minimum similarity score for the fuzzy command scan.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Function words stripped before similarity comparison.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Extra app launcher entries, merged over the built-in table.
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// A spoken app name mapped to the argv that launches it.
#[derive(Debug, Deserialize, Clone)]
pub struct AppEntry {
    pub name: String,
    pub command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            activation_words: default_activation_words(),
            fuzzy_threshold: default_fuzzy_threshold(),
            stop_words: default_stop_words(),
            apps: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Furina".into()
}

fn default_activation_words() -> Vec<String> {
    vec!["furina".into(), "purina".into()]
}

fn default_fuzzy_threshold() -> f64 {
    60.0
}

/// Spanish and English function words that add noise to similarity scores.
pub fn default_stop_words() -> Vec<String> {
    [
        "el", "la", "los", "las", "un", "una", "de", "del", "en", "y", "o", // es
        "the", "a", "an", "and", "or", "in", "on", "at", "to", "for", // en
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `config.toml` in
    /// the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => {
                let path = Path::new("config.toml");
                if path.exists() {
                    Ok(fs::read_to_string(path)
                        .ok()
                        .and_then(|s| toml::from_str(&s).ok())
                        .unwrap_or_default())
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}
