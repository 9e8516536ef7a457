//! Introspection commands: statistics, system info, uptime, fuzzy demo

use std::time::Instant;

use crate::command::{Command, CommandError};
use crate::stats::SharedStats;

use super::keyword_vec;

pub struct StatsCommand {
    keywords: Vec<String>,
    stats: SharedStats,
}

impl StatsCommand {
    pub fn new(stats: SharedStats) -> Self {
        Self {
            keywords: keyword_vec(&[
                "estadísticas",
                "stats",
                "statistics",
                "rendimiento",
                "performance",
            ]),
            stats,
        }
    }
}

impl Command for StatsCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Shows assistant usage statistics"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        let stats = self
            .stats
            .lock()
            .map_err(|_| CommandError::Unavailable("statistics".to_string()))?;
        Ok(stats.summary())
    }
}

pub struct SystemInfoCommand {
    keywords: Vec<String>,
}

impl SystemInfoCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&[
                "sistema",
                "system",
                "info",
                "información del sistema",
                "system info",
            ]),
        }
    }
}

impl Command for SystemInfoCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Shows system information"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        let mut out = String::from("=== System Information ===\n");
        out.push_str(&format!("OS: {} ({})\n", std::env::consts::OS, std::env::consts::ARCH));
        if let Some(hostname) = read_hostname() {
            out.push_str(&format!("Hostname: {}\n", hostname));
        }

        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        out.push_str(&format!("CPU cores: {}", cpus));

        if let Some((used_gb, total_gb)) = read_memory_gb() {
            out.push_str(&format!("\nMemory: {:.1}GB / {:.1}GB", used_gb, total_gb));
        }
        Ok(out)
    }
}

#[cfg(target_os = "linux")]
fn read_hostname() -> Option<String> {
    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn read_hostname() -> Option<String> {
    std::env::var("HOSTNAME").ok().filter(|s| !s.is_empty())
}

/// Memory usage in GB from /proc/meminfo, where available.
#[cfg(target_os = "linux")]
fn read_memory_gb() -> Option<(f64, f64)> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    let field = |name: &str| {
        meminfo
            .lines()
            .find(|l| l.starts_with(name))?
            .split_whitespace()
            .nth(1)?
            .parse::<f64>()
            .ok()
    };
    let total_kb = field("MemTotal:")?;
    let available_kb = field("MemAvailable:")?;
    let gb = 1024.0 * 1024.0;
    Some(((total_kb - available_kb) / gb, total_kb / gb))
}

#[cfg(not(target_os = "linux"))]
fn read_memory_gb() -> Option<(f64, f64)> {
    None
}

pub struct UptimeCommand {
    keywords: Vec<String>,
    started: Instant,
}

impl UptimeCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&["uptime", "tiempo encendido", "cuánto tiempo", "how long"]),
            started: Instant::now(),
        }
    }
}

impl Command for UptimeCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Shows system and assistant uptime"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        let mut out = String::from("=== Uptime Information ===\n");
        match read_system_uptime_secs() {
            Some(secs) => out.push_str(&format!("System uptime: {}\n", format_duration(secs))),
            None => out.push_str("System uptime: unavailable on this platform\n"),
        }
        out.push_str(&format!(
            "Assistant uptime: {}",
            format_duration(self.started.elapsed().as_secs())
        ));
        Ok(out)
    }
}

#[cfg(target_os = "linux")]
fn read_system_uptime_secs() -> Option<u64> {
    let raw = std::fs::read_to_string("/proc/uptime").ok()?;
    raw.split_whitespace().next()?.parse::<f64>().ok().map(|s| s as u64)
}

#[cfg(not(target_os = "linux"))]
fn read_system_uptime_secs() -> Option<u64> {
    None
}

fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, if hours == 1 { "" } else { "s" }));
    }
    if minutes > 0 {
        parts.push(format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" }));
    }
    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(", ")
    }
}

/// Prints mis-transcription examples so users can try the fuzzy matching.
pub struct FuzzyTestCommand {
    keywords: Vec<String>,
}

impl FuzzyTestCommand {
    pub fn new() -> Self {
        Self {
            keywords: keyword_vec(&[
                "test fuzzy",
                "probar fuzzy",
                "test detection",
                "probar detección",
            ]),
        }
    }
}

impl Command for FuzzyTestCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Tests fuzzy matching detection"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        Ok([
            "Try saying these with intentional errors:",
            "• 'abre navgador' (instead of 'navegador')",
            "• 'que ora es' (instead of 'qué hora es')",
            "• 'calculaora' (instead of 'calculadora')",
            "• 'subr volumen' (instead of 'subir volumen')",
            "• 'ayua' (instead of 'ayuda')",
        ]
        .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    #[test]
    fn test_stats_command_renders_counters() {
        let stats = stats::new_shared();
        stats.lock().unwrap().record_exact();
        let cmd = StatsCommand::new(stats);
        let response = cmd.execute("stats").unwrap();
        assert!(response.contains("Total commands: 1"));
    }

    #[test]
    fn test_stats_command_empty() {
        let cmd = StatsCommand::new(stats::new_shared());
        assert_eq!(cmd.execute("stats").unwrap(), "No commands processed yet");
    }

    #[test]
    fn test_system_info_names_os() {
        let cmd = SystemInfoCommand::new();
        let response = cmd.execute("sistema").unwrap();
        assert!(response.contains(std::env::consts::OS));
        assert!(response.contains("CPU cores"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "less than a minute");
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(90_061), "1 day, 1 hour, 1 minute");
    }

    #[test]
    fn test_uptime_mentions_assistant() {
        let cmd = UptimeCommand::new();
        assert!(cmd.execute("uptime").unwrap().contains("Assistant uptime"));
    }
}
