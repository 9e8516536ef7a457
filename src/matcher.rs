//! Fuzzy command selection - picks a command for text with no exact hit
//!
//! Near-exact partial matches (90%+) win immediately, in registration order.
//! Otherwise the best keyword-extraction score wins, with a strict
//! greater-than comparison so the first command to reach the top score keeps
//! priority over a later command with an equal score.

use log::debug;

use crate::command::Command;
use crate::fuzzy::FuzzyMatcher;

/// Similarity a keyword needs to count as a near-exact partial match.
pub const PARTIAL_MATCH_THRESHOLD: f64 = 90.0;

/// Similarity floor for "did you mean" suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 30.0;

/// How many suggestions to surface when nothing matched.
pub const MAX_SUGGESTIONS: usize = 2;

/// How an utterance resolved against the registry.
///
/// Indices refer to registration order in the command list.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Exact {
        index: usize,
        keyword: String,
    },
    Fuzzy {
        index: usize,
        keyword: String,
        confidence: f64,
    },
    NoMatch {
        suggestions: Vec<String>,
    },
}

/// Command matcher with a configurable fuzzy threshold (default 60).
pub struct SmartMatcher {
    fuzzy: FuzzyMatcher,
    threshold: f64,
}

impl SmartMatcher {
    pub fn new(fuzzy: FuzzyMatcher, threshold: f64) -> Self {
        Self { fuzzy, threshold }
    }

    pub fn fuzzy(&self) -> &FuzzyMatcher {
        &self.fuzzy
    }

    /// Find the best fuzzy command for `text`.
    ///
    /// Returns `(index, confidence, keyword)`. A 90%+ partial match on any
    /// keyword returns that command immediately with confidence 100.0, so an
    /// early near-exact hit pre-empts everything registered after it.
    pub fn find_command_match(
        &self,
        text: &str,
        commands: &[Box<dyn Command>],
    ) -> Option<(usize, f64, String)> {
        let mut best: Option<(usize, f64, String)> = None;

        for (index, command) in commands.iter().enumerate() {
            for keyword in command.keywords() {
                if self.fuzzy.partial_match(text, keyword, PARTIAL_MATCH_THRESHOLD) {
                    debug!("partial match: '{}' on keyword '{}'", text, keyword);
                    return Some((index, 100.0, keyword.clone()));
                }
            }

            let keyword_matches = self.fuzzy.extract_keywords(text, command.keywords(), self.threshold);
            if let Some((keyword, score)) = keyword_matches.into_iter().next() {
                // Strict '>' keeps the first command on equal scores.
                if best.as_ref().map_or(true, |(_, s, _)| score > *s) {
                    best = Some((index, score, keyword));
                }
            }
        }

        if let Some((index, score, ref keyword)) = best {
            debug!("fuzzy match: command #{} keyword '{}' score {:.1}", index, keyword, score);
        }
        best
    }

    /// Suggest keywords from the whole registry that resemble `text`,
    /// best-scoring first, at most `max_suggestions`.
    pub fn suggest_corrections(
        &self,
        text: &str,
        commands: &[Box<dyn Command>],
        max_suggestions: usize,
    ) -> Vec<String> {
        let all_keywords: Vec<String> = commands
            .iter()
            .flat_map(|c| c.keywords().iter().cloned())
            .collect();

        self.fuzzy
            .extract_keywords(text, &all_keywords, SUGGESTION_THRESHOLD)
            .into_iter()
            .take(max_suggestions)
            .map(|(keyword, _)| keyword)
            .collect()
    }
}
