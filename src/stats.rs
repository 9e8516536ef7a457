//! Match statistics for processed utterances
//!
//! Counts how utterances resolved: exact keyword hit, fuzzy match, or no
//! match at all. Utterances rejected before matching (no activation word,
//! empty remainder) are not counted, so `total == exact + fuzzy + failed`
//! holds after every processed call.

use std::sync::{Arc, Mutex};

/// Snapshot of the four match counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub total: u64,
    pub exact: u64,
    pub fuzzy: u64,
    pub failed: u64,
}

impl MatchStats {
    pub fn record_exact(&mut self) {
        self.total += 1;
        self.exact += 1;
    }

    pub fn record_fuzzy(&mut self) {
        self.total += 1;
        self.fuzzy += 1;
    }

    pub fn record_failed(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Human-readable summary with per-category percentages.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "No commands processed yet".to_string();
        }

        let pct = |n: u64| (n as f64 / self.total as f64) * 100.0;
        let failed_pct = pct(self.failed);

        let mut out = String::from("=== Assistant Statistics ===\n");
        out.push_str(&format!("Total commands: {}\n", self.total));
        out.push_str(&format!("Exact matches: {} ({:.1}%)\n", self.exact, pct(self.exact)));
        out.push_str(&format!("Fuzzy matches: {} ({:.1}%)\n", self.fuzzy, pct(self.fuzzy)));
        out.push_str(&format!("Failed matches: {} ({:.1}%)\n", self.failed, failed_pct));
        out.push_str(&format!("Success rate: {:.1}%", 100.0 - failed_pct));
        out
    }
}

pub type SharedStats = Arc<Mutex<MatchStats>>;

pub fn new_shared() -> SharedStats {
    Arc::new(Mutex::new(MatchStats::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_holds() {
        let mut stats = MatchStats::default();
        stats.record_exact();
        stats.record_fuzzy();
        stats.record_fuzzy();
        stats.record_failed();
        assert_eq!(stats.total, stats.exact + stats.fuzzy + stats.failed);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut stats = MatchStats::default();
        stats.record_exact();
        stats.reset();
        assert_eq!(stats, MatchStats::default());
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(MatchStats::default().summary(), "No commands processed yet");
    }

    #[test]
    fn test_summary_percentages() {
        let mut stats = MatchStats::default();
        stats.record_exact();
        stats.record_exact();
        stats.record_fuzzy();
        stats.record_failed();
        let summary = stats.summary();
        assert!(summary.contains("Total commands: 4"));
        assert!(summary.contains("Exact matches: 2 (50.0%)"));
        assert!(summary.contains("Success rate: 75.0%"));
    }
}
