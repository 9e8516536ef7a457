//! App launcher command
//!
//! Maps spoken app names to argv per platform. Config entries are checked
//! before the built-in table so users can override them.

use std::process;

use log::info;

use crate::command::{Command, CommandError};
use crate::config::AppEntry;

use super::keyword_vec;

pub struct AppLauncherCommand {
    keywords: Vec<String>,
    apps: Vec<AppEntry>,
}

impl AppLauncherCommand {
    pub fn new(extra_apps: &[AppEntry]) -> Self {
        let mut apps: Vec<AppEntry> = extra_apps.to_vec();
        apps.extend(builtin_apps());
        Self {
            keywords: keyword_vec(&["abre", "abrir", "open", "launch", "ejecuta", "execute"]),
            apps,
        }
    }

    fn available(&self) -> String {
        self.apps
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Command for AppLauncherCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Opens applications (browser, calculator, editor, etc.)"
    }

    fn execute(&self, command_text: &str) -> Result<String, CommandError> {
        let app_name = self.extract_parameters(command_text);
        if app_name.is_empty() {
            return Ok(format!(
                "Please specify an application. Available: {}",
                self.available()
            ));
        }

        let Some(app) = self.apps.iter().find(|a| app_name.contains(&a.name)) else {
            return Ok(format!(
                "Application '{}' not found. Available: {}",
                app_name,
                self.available()
            ));
        };

        let (program, args) = app
            .command
            .split_first()
            .ok_or_else(|| CommandError::Unsupported(format!("empty launch command for '{}'", app.name)))?;

        info!("launching '{}': {:?}", app.name, app.command);
        process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| CommandError::Process(format!("launching {}: {}", app.name, e)))?;

        Ok(format!("Opening {}...", app.name))
    }
}

#[cfg(target_os = "linux")]
fn builtin_apps() -> Vec<AppEntry> {
    app_table(&[
        ("navegador", &["firefox"]),
        ("browser", &["firefox"]),
        ("calculadora", &["gnome-calculator"]),
        ("calculator", &["gnome-calculator"]),
        ("bloc de notas", &["gedit"]),
        ("notepad", &["gedit"]),
        ("explorador", &["nautilus"]),
        ("explorer", &["nautilus"]),
        ("terminal", &["gnome-terminal"]),
    ])
}

#[cfg(target_os = "macos")]
fn builtin_apps() -> Vec<AppEntry> {
    app_table(&[
        ("navegador", &["open", "-a", "Safari"]),
        ("browser", &["open", "-a", "Safari"]),
        ("calculadora", &["open", "-a", "Calculator"]),
        ("calculator", &["open", "-a", "Calculator"]),
        ("bloc de notas", &["open", "-a", "TextEdit"]),
        ("notepad", &["open", "-a", "TextEdit"]),
        ("explorador", &["open", "."]),
        ("explorer", &["open", "."]),
        ("terminal", &["open", "-a", "Terminal"]),
    ])
}

#[cfg(target_os = "windows")]
fn builtin_apps() -> Vec<AppEntry> {
    app_table(&[
        ("navegador", &["cmd", "/C", "start", "chrome"]),
        ("browser", &["cmd", "/C", "start", "chrome"]),
        ("calculadora", &["calc"]),
        ("calculator", &["calc"]),
        ("bloc de notas", &["notepad"]),
        ("notepad", &["notepad"]),
        ("explorador", &["explorer"]),
        ("explorer", &["explorer"]),
        ("terminal", &["cmd"]),
    ])
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn builtin_apps() -> Vec<AppEntry> {
    Vec::new()
}

#[allow(dead_code)]
fn app_table(entries: &[(&str, &[&str])]) -> Vec<AppEntry> {
    entries
        .iter()
        .map(|(name, argv)| AppEntry {
            name: name.to_string(),
            command: argv.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parameters_list_available_apps() {
        let cmd = AppLauncherCommand::new(&[]);
        let response = cmd.execute("abre").unwrap();
        assert!(response.starts_with("Please specify an application"));
    }

    #[test]
    fn test_unknown_app_is_reported() {
        let cmd = AppLauncherCommand::new(&[]);
        let response = cmd.execute("abre cafetera").unwrap();
        assert!(response.contains("'cafetera' not found"));
    }

    #[test]
    fn test_config_entry_overrides_builtin() {
        let extra = vec![AppEntry {
            name: "navegador".to_string(),
            command: vec!["true".to_string()],
        }];
        let cmd = AppLauncherCommand::new(&extra);
        let found = cmd.apps.iter().find(|a| a.name == "navegador").unwrap();
        assert_eq!(found.command, vec!["true"]);
    }
}
