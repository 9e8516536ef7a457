//! Time and date commands

use chrono::Local;

use crate::command::{Command, CommandError};

use super::keyword_vec;

pub struct TimeCommand {
    keywords: Vec<String>,
}

impl TimeCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&["hora", "time", "qué hora es", "what time"]),
        }
    }
}

impl Command for TimeCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Gets the current time"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        Ok(format!("Current time: {}", Local::now().format("%H:%M:%S")))
    }
}

pub struct DateCommand {
    keywords: Vec<String>,
}

impl DateCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&["fecha", "date", "qué fecha", "what date", "hoy", "today"]),
        }
    }
}

impl Command for DateCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Gets the current date"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        Ok(format!("Today is: {}", Local::now().format("%A, %B %d, %Y")))
    }
}
