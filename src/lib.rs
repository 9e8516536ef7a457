//! Voice command dispatch engine
//!
//! Takes a noisy, possibly mis-transcribed utterance and maps it to one of a
//! fixed set of registered commands: activation-word detection, exact
//! keyword matching, fuzzy matching via Levenshtein distance, and keyword
//! suggestions when nothing matches. Audio capture, transcription and speech
//! synthesis are collaborators behind narrow seams, not part of this crate's
//! core.

pub mod command;
pub mod commands;
pub mod config;
pub mod fuzzy;
pub mod matcher;
pub mod processor;
pub mod speech;
pub mod stats;

pub use command::{Command, CommandError, CommandInfo};
pub use config::Config;
pub use matcher::MatchResult;
pub use processor::CommandProcessor;
pub use stats::MatchStats;
