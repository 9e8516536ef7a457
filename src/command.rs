//! Command abstraction - each capability the assistant can dispatch to
//!
//! A command owns its keyword phrases and a description, and executes with
//! the cleaned utterance text. Execution failures are explicit
//! (`CommandError`) and are collapsed to response strings only at the
//! processor's formatting boundary, never silently swallowed.

use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Why a command execution failed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A collaborator the command depends on is missing or disabled.
    #[error("not available: {0}")]
    Unavailable(String),

    /// An OS process invocation failed.
    #[error("process error: {0}")]
    Process(String),

    /// The command matched but could not act on its parameters.
    #[error("{0}")]
    Unsupported(String),
}

/// A dispatchable capability.
///
/// Keywords are fixed at construction and must be lowercase; matching against
/// them is case-insensitive because input is lowercased first. Overlapping
/// keywords between commands are legal; registration order resolves them.
pub trait Command: Send {
    fn keywords(&self) -> &[String];

    fn description(&self) -> &str;

    /// Execute with the cleaned command text, producing a response string.
    fn execute(&self, command_text: &str) -> Result<String, CommandError>;

    /// True iff any keyword occurs as a case-insensitive substring of `text`.
    fn can_execute(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords().iter().any(|k| text.contains(k.as_str()))
    }

    /// Strip the first matching keyword (keyword-list order, first occurrence
    /// only) from `text` and trim. No keyword found leaves the text as-is.
    fn extract_parameters(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        for keyword in self.keywords() {
            if lower.contains(keyword.as_str()) {
                return lower.replacen(keyword.as_str(), "", 1).trim().to_string();
            }
        }
        text.trim().to_string()
    }
}

/// Keyword list and description of a registered command, as exposed by
/// `list_commands` and the help rendering.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub keywords: Vec<String>,
    pub description: String,
}

/// Shared, read-mostly view of the registered commands. The processor
/// appends on registration; the help command only reads.
pub type SharedCatalog = Arc<RwLock<Vec<CommandInfo>>>;

pub fn new_catalog() -> SharedCatalog {
    Arc::new(RwLock::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        keywords: Vec<String>,
    }

    impl Command for Probe {
        fn keywords(&self) -> &[String] {
            &self.keywords
        }
        fn description(&self) -> &str {
            "probe"
        }
        fn execute(&self, _text: &str) -> Result<String, CommandError> {
            Ok("ok".to_string())
        }
    }

    fn probe() -> Probe {
        Probe {
            keywords: vec!["abre".to_string(), "open".to_string()],
        }
    }

    #[test]
    fn test_can_execute_is_case_insensitive() {
        let cmd = probe();
        assert!(cmd.can_execute("ABRE navegador"));
        assert!(cmd.can_execute("please Open the browser"));
        assert!(!cmd.can_execute("cierra todo"));
    }

    #[test]
    fn test_extract_parameters_removes_first_keyword_once() {
        let cmd = probe();
        assert_eq!(cmd.extract_parameters("abre navegador"), "navegador");
        // Only the first occurrence goes away.
        assert_eq!(cmd.extract_parameters("abre abre"), "abre");
        // Keyword-list order decides which keyword is stripped.
        assert_eq!(cmd.extract_parameters("open abre"), "open");
    }

    #[test]
    fn test_extract_parameters_without_keyword() {
        let cmd = probe();
        assert_eq!(cmd.extract_parameters("  cierra todo  "), "cierra todo");
    }
}
