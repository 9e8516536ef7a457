//! Concrete commands registered into the processor at startup

mod apps;
mod social;
mod speech_ctl;
mod sysinfo;
mod system;
mod time;

pub use apps::AppLauncherCommand;
pub use social::{GreetingCommand, HelpCommand};
pub use speech_ctl::{RepeatCommand, TtsControlCommand};
pub use sysinfo::{FuzzyTestCommand, StatsCommand, SystemInfoCommand, UptimeCommand};
pub use system::{SystemCommand, VolumeCommand};
pub use time::{DateCommand, TimeCommand};

fn keyword_vec(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}
