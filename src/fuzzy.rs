//! Fuzzy string matching for noisy voice transcripts
//!
//! Transcription output is lossy: substituted characters, dropped accents,
//! truncated words. Everything here works on normalized text (lowercased,
//! stop words removed) so that "Abre el navegador" and "abre navgador"
//! land close together.

/// Calculate Levenshtein distance between two strings.
///
/// Unit cost for insertion, deletion and substitution. Uses a rolling row so
/// working memory is O(min(len(a), len(b))) rather than a full matrix.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the row sized by the shorter string.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Text normalizer: lowercases, collapses whitespace, strips stop words.
///
/// The stop-word list is supplied at construction (see `config::Config`) so
/// behavior stays reproducible in tests.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: Vec<String>,
}

impl Normalizer {
    pub fn new(stop_words: &[String]) -> Self {
        Self {
            stop_words: stop_words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Normalize text for comparison. Pure: empty in, empty out.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .split_whitespace()
            .filter(|w| !self.stop_words.iter().any(|s| s == w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fuzzy matcher over normalized text: similarity ratios, partial matches
/// and keyword extraction.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    normalizer: Normalizer,
}

impl FuzzyMatcher {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Similarity ratio between two strings in [0, 100].
    ///
    /// Both sides are normalized first. If either side normalizes to empty
    /// there is nothing meaningful to compare, so the ratio is 0.0 (this
    /// includes the both-empty case; a policy choice, kept from the original
    /// behavior).
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = self.normalizer.normalize(a);
        let b = self.normalizer.normalize(b);

        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let a_len = a.chars().count();
        let b_len = b.chars().count();
        let max_len = a_len.max(b_len);
        let distance = levenshtein(&a, &b);
        ((max_len - distance.min(max_len)) as f64 / max_len as f64) * 100.0
    }

    /// Check whether `text` partially matches `keyword`.
    ///
    /// A substring hit in either direction counts immediately; otherwise the
    /// similarity ratio must reach `threshold`.
    pub fn partial_match(&self, text: &str, keyword: &str, threshold: f64) -> bool {
        let text_norm = self.normalizer.normalize(text);
        let keyword_norm = self.normalizer.normalize(keyword);

        if text_norm.is_empty() || keyword_norm.is_empty() {
            return false;
        }
        if text_norm.contains(&keyword_norm) || keyword_norm.contains(&text_norm) {
            return true;
        }
        self.similarity(&text_norm, &keyword_norm) >= threshold
    }

    /// Extract keywords from `keyword_list` that match `text`.
    ///
    /// A keyword whose token appears verbatim among the text tokens scores
    /// 100.0 outright. Otherwise the score is the best token-pair similarity,
    /// kept only when it reaches `threshold`. The result is sorted by score
    /// descending; ties keep keyword-list order (stable sort).
    pub fn extract_keywords(
        &self,
        text: &str,
        keyword_list: &[String],
        threshold: f64,
    ) -> Vec<(String, f64)> {
        let text_norm = self.normalizer.normalize(text);
        let text_words: Vec<&str> = text_norm.split_whitespace().collect();

        let mut matches = Vec::new();
        for keyword in keyword_list {
            let keyword_norm = self.normalizer.normalize(keyword);
            let keyword_words: Vec<&str> = keyword_norm.split_whitespace().collect();

            if keyword_words.iter().any(|kw| text_words.contains(kw)) {
                matches.push((keyword.clone(), 100.0));
                continue;
            }

            let mut best = 0.0f64;
            for tw in &text_words {
                for kw in &keyword_words {
                    let score = self.similarity(tw, kw);
                    if score > best {
                        best = score;
                    }
                }
            }
            if best >= threshold {
                matches.push((keyword.clone(), best));
            }
        }

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_stop_words;

    fn matcher() -> FuzzyMatcher {
        FuzzyMatcher::new(Normalizer::new(&default_stop_words()))
    }

    #[test]
    fn test_levenshtein_identity() {
        assert_eq!(levenshtein("hola", "hola"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        assert_eq!(
            levenshtein("navegador", "navgador"),
            levenshtein("navgador", "navegador")
        );
        assert_eq!(levenshtein("hora", "ora"), 1);
        assert_eq!(levenshtein("ora", "hora"), 1);
    }

    #[test]
    fn test_levenshtein_bounded_by_longer_input() {
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "xyz"), 3);
        assert!(levenshtein("hola", "mundo") <= 5);
    }

    #[test]
    fn test_normalize_strips_stop_words() {
        let n = Normalizer::new(&default_stop_words());
        assert_eq!(n.normalize("Abre  el   Navegador"), "abre navegador");
        assert_eq!(n.normalize("the time and   date"), "time date");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn test_similarity_identity_and_range() {
        let m = matcher();
        assert_eq!(m.similarity("navegador", "navegador"), 100.0);
        let s = m.similarity("navegador", "navgador");
        assert!(s > 0.0 && s < 100.0);
    }

    #[test]
    fn test_similarity_empty_sides() {
        let m = matcher();
        assert_eq!(m.similarity("", "hola"), 0.0);
        assert_eq!(m.similarity("hola", ""), 0.0);
        assert_eq!(m.similarity("", ""), 0.0);
        // Strings made entirely of stop words normalize to empty too.
        assert_eq!(m.similarity("el la de", "hola"), 0.0);
    }

    #[test]
    fn test_partial_match_substring() {
        let m = matcher();
        assert!(m.partial_match("abre navegador ahora", "navegador", 90.0));
        // Either direction counts.
        assert!(m.partial_match("nave", "navegador", 90.0));
    }

    #[test]
    fn test_partial_match_fuzzy_threshold() {
        let m = matcher();
        assert!(m.partial_match("navgador", "navegador", 60.0));
        assert!(!m.partial_match("zzqqxx", "navegador", 60.0));
    }

    #[test]
    fn test_extract_keywords_verbatim_hit() {
        let m = matcher();
        let keywords = vec!["hora".to_string(), "fecha".to_string()];
        let matches = m.extract_keywords("que hora es", &keywords, 60.0);
        assert_eq!(matches[0], ("hora".to_string(), 100.0));
    }

    #[test]
    fn test_extract_keywords_fuzzy_and_sorted() {
        let m = matcher();
        let keywords = vec!["fecha".to_string(), "hora".to_string()];
        let matches = m.extract_keywords("que ora es", &keywords, 60.0);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0, "hora");
        assert!(matches[0].1 >= 60.0 && matches[0].1 < 100.0);
        // Descending order.
        for pair in matches.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_extract_keywords_ties_keep_list_order() {
        let m = matcher();
        let keywords = vec!["hora".to_string(), "ahora".to_string()];
        let matches = m.extract_keywords("hora ahora", &keywords, 60.0);
        // Both score 100.0; the stable sort keeps list order.
        assert_eq!(matches[0].0, "hora");
        assert_eq!(matches[1].0, "ahora");
    }
}
