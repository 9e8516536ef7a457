//! System power and volume commands
//!
//! Destructive power operations (shutdown, restart) are refused outright;
//! sleep and volume changes go through OS tools. Process failures surface as
//! `CommandError::Process` and get collapsed to a response string by the
//! processor.

use std::process;

use log::info;

use crate::command::{Command, CommandError};

use super::keyword_vec;

/// Run an OS tool, discarding output. Non-zero exit is an error.
fn run_tool(argv: &[&str]) -> Result<(), CommandError> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| CommandError::Unsupported("empty command line".to_string()))?;

    info!("running: {:?}", argv);
    let status = process::Command::new(program)
        .args(args)
        .status()
        .map_err(|e| CommandError::Process(format!("{}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Process(format!("{} exited with {}", program, status)))
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

pub struct SystemCommand {
    keywords: Vec<String>,
}

impl SystemCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&[
                "apaga", "apagar", "shutdown", "reinicia", "reiniciar", "restart", "suspender",
                "sleep",
            ]),
        }
    }

    fn sleep_machine(&self) -> Result<String, CommandError> {
        if cfg!(target_os = "macos") {
            run_tool(&["pmset", "sleepnow"])?;
        } else if cfg!(target_os = "linux") {
            run_tool(&["systemctl", "suspend"])?;
        } else if cfg!(target_os = "windows") {
            run_tool(&["rundll32.exe", "powrprof.dll,SetSuspendState", "0,1,0"])?;
        } else {
            return Err(CommandError::Unsupported(
                "sleep is not supported on this platform".to_string(),
            ));
        }
        Ok("Putting system to sleep...".to_string())
    }
}

impl Command for SystemCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "System operations (shutdown, restart, sleep)"
    }

    fn execute(&self, command_text: &str) -> Result<String, CommandError> {
        let text = command_text.to_lowercase();

        // Shutdown and restart stay behind a safety gate.
        if contains_any(
            &text,
            &["apaga", "apagar", "shutdown", "reinicia", "reiniciar", "restart"],
        ) {
            return Ok("System power operations are disabled for safety.".to_string());
        }

        if contains_any(&text, &["suspender", "sleep"]) {
            return self.sleep_machine();
        }

        Ok("System command not recognized or not available.".to_string())
    }
}

pub struct VolumeCommand {
    keywords: Vec<String>,
}

impl VolumeCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&[
                "volumen",
                "volume",
                "subir volumen",
                "bajar volumen",
                "silencio",
                "mute",
            ]),
        }
    }

    fn adjust(&self, direction: VolumeChange) -> Result<String, CommandError> {
        if cfg!(target_os = "linux") {
            let (arg, msg) = match direction {
                VolumeChange::Up => ("10%+", "Volume increased"),
                VolumeChange::Down => ("10%-", "Volume decreased"),
                VolumeChange::ToggleMute => ("toggle", "Audio toggled"),
            };
            run_tool(&["amixer", "set", "Master", arg])?;
            Ok(msg.to_string())
        } else if cfg!(target_os = "macos") {
            let (script, msg) = match direction {
                VolumeChange::Up => (
                    "set volume output volume (output volume of (get volume settings) + 10)",
                    "Volume increased",
                ),
                VolumeChange::Down => (
                    "set volume output volume (output volume of (get volume settings) - 10)",
                    "Volume decreased",
                ),
                VolumeChange::ToggleMute => ("set volume with output muted", "Audio muted"),
            };
            run_tool(&["osascript", "-e", script])?;
            Ok(msg.to_string())
        } else {
            Err(CommandError::Unsupported(
                "volume control is not implemented on this platform".to_string(),
            ))
        }
    }
}

enum VolumeChange {
    Up,
    Down,
    ToggleMute,
}

impl Command for VolumeCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Controls system volume"
    }

    fn execute(&self, command_text: &str) -> Result<String, CommandError> {
        let text = command_text.to_lowercase();

        if contains_any(&text, &["subir", "up"]) {
            self.adjust(VolumeChange::Up)
        } else if contains_any(&text, &["bajar", "down"]) {
            self.adjust(VolumeChange::Down)
        } else if contains_any(&text, &["silencio", "mute"]) {
            self.adjust(VolumeChange::ToggleMute)
        } else {
            Ok("Volume command not recognized. Try 'subir volumen' or 'bajar volumen'.".to_string())
        }
    }
}
