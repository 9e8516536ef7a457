//! Command processor - activation detection and the matching cascade
//!
//! Flow per utterance: activation check, activation-word removal, exact scan
//! over registered commands, fuzzy scan, then suggestions. Exact scanning is
//! first-match-wins in registration order, not best-match: a command
//! registered earlier pre-empts a better semantic fit registered later.
//!
//! The processor never fails; every path ends in a response string.

use log::{debug, info};

use crate::command::{new_catalog, Command, CommandInfo, SharedCatalog};
use crate::config::Config;
use crate::fuzzy::{FuzzyMatcher, Normalizer};
use crate::matcher::{MatchResult, SmartMatcher, MAX_SUGGESTIONS};
use crate::stats::{self, MatchStats, SharedStats};

/// Fuzzy confidence below which the response carries a match annotation.
const ANNOTATION_THRESHOLD: f64 = 80.0;

pub struct CommandProcessor {
    activation_words: Vec<String>,
    commands: Vec<Box<dyn Command>>,
    matcher: SmartMatcher,
    stats: SharedStats,
    catalog: SharedCatalog,
}

impl CommandProcessor {
    pub fn new(config: &Config) -> Self {
        let fuzzy = FuzzyMatcher::new(Normalizer::new(&config.stop_words));
        Self {
            activation_words: config
                .activation_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            commands: Vec::new(),
            matcher: SmartMatcher::new(fuzzy, config.fuzzy_threshold),
            stats: stats::new_shared(),
            catalog: new_catalog(),
        }
    }

    /// Append a command to the registry. Keyword overlap with existing
    /// commands is legal; registration order resolves it.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        self.catalog.write().unwrap().push(CommandInfo {
            keywords: command.keywords().to_vec(),
            description: command.description().to_string(),
        });
        self.commands.push(command);
    }

    pub fn activation_words(&self) -> &[String] {
        &self.activation_words
    }

    /// Handle to the live stats counters, for commands that render them.
    pub fn stats_handle(&self) -> SharedStats {
        self.stats.clone()
    }

    /// Handle to the registered-command catalog, for the help command.
    pub fn catalog(&self) -> SharedCatalog {
        self.catalog.clone()
    }

    /// Process a raw utterance end to end and return the response.
    ///
    /// Utterances without an activation word are rejected without touching
    /// the statistics; so is an utterance that is only an activation word.
    pub fn process_text(&self, raw_text: &str) -> String {
        let lower = raw_text.to_lowercase();
        let Some(activation) = self
            .activation_words
            .iter()
            .find(|word| lower.contains(word.as_str()))
        else {
            debug!("no activation word in: {:?}", raw_text);
            return "No activation keyword found.".to_string();
        };

        // One substring replacement of the first activation word found.
        let cleaned = lower.replacen(activation.as_str(), "", 1).trim().to_string();
        if cleaned.is_empty() {
            return "🤔 Please specify a command. Say 'ayuda' to hear what I can do.".to_string();
        }

        match self.match_text(&cleaned) {
            MatchResult::Exact { index, keyword } => {
                self.stats.lock().unwrap().record_exact();
                info!("exact match: '{}' -> keyword '{}'", cleaned, keyword);
                format!("✅ {}", self.run(index, &cleaned))
            }
            MatchResult::Fuzzy {
                index,
                keyword,
                confidence,
            } => {
                self.stats.lock().unwrap().record_fuzzy();
                info!(
                    "fuzzy match: '{}' -> keyword '{}' ({:.0}%)",
                    cleaned, keyword, confidence
                );
                let response = self.run(index, &cleaned);
                if confidence < ANNOTATION_THRESHOLD {
                    format!("🤔 (matched '{}' {:.0}%) {}", keyword, confidence, response)
                } else {
                    format!("✅ {}", response)
                }
            }
            MatchResult::NoMatch { suggestions } => {
                self.stats.lock().unwrap().record_failed();
                if suggestions.is_empty() {
                    format!(
                        "❌ Command not recognized: '{}'. Say 'ayuda' to list commands.",
                        cleaned
                    )
                } else {
                    format!("❌ Command not recognized. Did you mean: {}?", suggestions.join(", "))
                }
            }
        }
    }

    /// Resolve cleaned text against the registry without executing anything
    /// or touching statistics.
    pub fn match_text(&self, cleaned: &str) -> MatchResult {
        let lower = cleaned.to_lowercase();

        for (index, command) in self.commands.iter().enumerate() {
            if command.can_execute(&lower) {
                let keyword = command
                    .keywords()
                    .iter()
                    .find(|k| lower.contains(k.as_str()))
                    .cloned()
                    .unwrap_or_default();
                return MatchResult::Exact { index, keyword };
            }
        }

        if let Some((index, confidence, keyword)) = self.matcher.find_command_match(&lower, &self.commands) {
            return MatchResult::Fuzzy {
                index,
                keyword,
                confidence,
            };
        }

        MatchResult::NoMatch {
            suggestions: self
                .matcher
                .suggest_corrections(&lower, &self.commands, MAX_SUGGESTIONS),
        }
    }

    /// Execute a command, collapsing failures into a descriptive response.
    fn run(&self, index: usize, cleaned: &str) -> String {
        match self.commands[index].execute(cleaned) {
            Ok(response) => response,
            Err(e) => format!("Could not complete that: {}", e),
        }
    }

    /// Keyword lists and descriptions in registration order.
    pub fn list_commands(&self) -> Vec<CommandInfo> {
        self.catalog.read().unwrap().clone()
    }

    /// Read-only snapshot of the counters.
    pub fn get_stats(&self) -> MatchStats {
        *self.stats.lock().unwrap()
    }

    pub fn reset_stats(&self) {
        self.stats.lock().unwrap().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandError;

    struct Probe {
        keywords: Vec<String>,
        response: String,
    }

    impl Probe {
        fn boxed(keywords: &[&str], response: &str) -> Box<dyn Command> {
            Box::new(Self {
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                response: response.to_string(),
            })
        }
    }

    impl Command for Probe {
        fn keywords(&self) -> &[String] {
            &self.keywords
        }
        fn description(&self) -> &str {
            "probe"
        }
        fn execute(&self, _text: &str) -> Result<String, CommandError> {
            Ok(self.response.clone())
        }
    }

    struct Failing;

    impl Command for Failing {
        fn keywords(&self) -> &[String] {
            static KEYWORDS: std::sync::OnceLock<Vec<String>> = std::sync::OnceLock::new();
            KEYWORDS.get_or_init(|| vec!["romper".to_string()])
        }
        fn description(&self) -> &str {
            "always fails"
        }
        fn execute(&self, _text: &str) -> Result<String, CommandError> {
            Err(CommandError::Process("exit status 1".to_string()))
        }
    }

    fn processor() -> CommandProcessor {
        let mut p = CommandProcessor::new(&Config::default());
        p.register_command(Probe::boxed(&["hora", "time"], "Current time: 12:00"));
        p.register_command(Probe::boxed(&["abre", "abrir", "open"], "Opening browser"));
        p
    }

    #[test]
    fn test_rejects_without_activation_word() {
        let p = processor();
        let response = p.process_text("abre navegador");
        assert_eq!(response, "No activation keyword found.");
        assert_eq!(p.get_stats(), MatchStats::default());
    }

    #[test]
    fn test_exact_match_counts_and_succeeds() {
        let p = processor();
        let response = p.process_text("furina abre navegador");
        assert!(response.starts_with("✅"));
        assert!(response.contains("Opening browser"));
        let stats = p.get_stats();
        assert_eq!((stats.total, stats.exact), (1, 1));
    }

    #[test]
    fn test_fuzzy_match_annotates_low_confidence() {
        let p = processor();
        // "ora" is a typo for "hora" at edit distance 1 (75%), below the
        // annotation threshold.
        let response = p.process_text("purina qué ora es");
        assert!(response.starts_with("🤔"), "got: {response}");
        assert!(response.contains("(matched 'hora'"));
        assert!(response.contains("Current time"));
        let stats = p.get_stats();
        assert_eq!((stats.total, stats.fuzzy), (1, 1));
    }

    #[test]
    fn test_substring_partial_hit_gets_plain_success_marker() {
        let p = processor();
        // The cleaned text "ora" is contained in keyword "hora": a partial
        // match at confidence 100, no annotation.
        let response = p.process_text("purina ora");
        assert!(response.starts_with("✅"), "got: {response}");
        assert_eq!(p.get_stats().fuzzy, 1);
    }

    #[test]
    fn test_activation_word_alone_asks_for_command() {
        let p = processor();
        let response = p.process_text("furina");
        assert!(response.contains("specify a command"));
        // Never reaches the matching stage: counters untouched.
        assert_eq!(p.get_stats(), MatchStats::default());
    }

    #[test]
    fn test_gibberish_takes_suggestion_path() {
        let p = processor();
        let response = p.process_text("furina zzqqxx");
        assert!(response.starts_with("❌"));
        assert_eq!(p.get_stats().failed, 1);
    }

    #[test]
    fn test_registration_order_wins_keyword_overlap() {
        let mut p = CommandProcessor::new(&Config::default());
        p.register_command(Probe::boxed(&["abre"], "first"));
        p.register_command(Probe::boxed(&["abre", "navegador"], "second"));
        let response = p.process_text("furina abre navegador");
        assert!(response.contains("first"));
    }

    #[test]
    fn test_command_failure_becomes_response_string() {
        let mut p = CommandProcessor::new(&Config::default());
        p.register_command(Box::new(Failing));
        let response = p.process_text("furina romper");
        assert!(response.contains("Could not complete that"));
        assert!(response.contains("exit status 1"));
        // Still an exact match for accounting purposes.
        assert_eq!(p.get_stats().exact, 1);
    }

    #[test]
    fn test_stats_snapshot_is_idempotent_and_resettable() {
        let p = processor();
        p.process_text("furina hora");
        assert_eq!(p.get_stats(), p.get_stats());
        p.reset_stats();
        assert_eq!(p.get_stats(), MatchStats::default());
    }

    #[test]
    fn test_list_commands_keeps_registration_order() {
        let p = processor();
        let infos = p.list_commands();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].keywords[0], "hora");
        assert_eq!(infos[1].keywords[0], "abre");
    }
}
