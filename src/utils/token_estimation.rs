// Token estimation for outline budgeting
//
// A context assembler compares the estimate of an outline against the estimate
// of the full file to decide which one fits. Estimates blend a character rate
// with a word rate; CJK text tokenizes denser, so it gets its own character rate.

use std::ops::RangeInclusive;

/// Hiragana/Katakana, CJK Extension A, CJK Unified Ideographs, Hangul Syllables
const CJK_RANGES: [RangeInclusive<u32>; 4] = [
    0x3040..=0x30FF,
    0x3400..=0x4DBF,
    0x4E00..=0x9FFF,
    0xAC00..=0xD7AF,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenEstimator;

impl TokenEstimator {
    /// Average characters per token for Latin-script source text
    const CHARS_PER_TOKEN: f64 = 4.0;

    /// Average characters per token once any CJK character is present
    const CJK_CHARS_PER_TOKEN: f64 = 2.0;

    /// Tokens per whitespace-separated word
    const TOKENS_PER_WORD: f64 = 1.3;

    const CHAR_WEIGHT: f64 = 0.6;
    const WORD_WEIGHT: f64 = 0.4;

    pub fn new() -> Self {
        Self
    }

    /// Character-rate estimate, counting chars rather than bytes
    pub fn estimate_chars(&self, text: &str) -> usize {
        let rate = if self.contains_cjk(text) {
            Self::CJK_CHARS_PER_TOKEN
        } else {
            Self::CHARS_PER_TOKEN
        };
        (text.chars().count() as f64 / rate).ceil() as usize
    }

    /// Word-rate estimate
    pub fn estimate_words(&self, text: &str) -> usize {
        let words = text.split_whitespace().count();
        (words as f64 * Self::TOKENS_PER_WORD).ceil() as usize
    }

    /// Weighted blend of the character and word estimates; 0 for empty text
    pub fn estimate_string_hybrid(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let blended = self.estimate_chars(text) as f64 * Self::CHAR_WEIGHT
            + self.estimate_words(text) as f64 * Self::WORD_WEIGHT;
        blended.ceil() as usize
    }

    pub fn contains_cjk(&self, text: &str) -> bool {
        text.chars()
            .any(|ch| CJK_RANGES.iter().any(|range| range.contains(&(ch as u32))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_free() {
        let estimator = TokenEstimator::new();
        assert_eq!(estimator.estimate_string_hybrid(""), 0);
        assert_eq!(estimator.estimate_chars(""), 0);
        assert_eq!(estimator.estimate_words("   "), 0);
    }

    #[test]
    fn test_hybrid_blends_both_rates() {
        let estimator = TokenEstimator::new();
        // 16 chars -> 4 tokens; 4 words -> 6 tokens; 0.6*4 + 0.4*6 = 4.8
        let text = "fn main() -> u8 ";
        assert_eq!(estimator.estimate_chars(text), 4);
        assert_eq!(estimator.estimate_words(text), 6);
        assert_eq!(estimator.estimate_string_hybrid(text), 5);
    }

    #[test]
    fn test_cjk_uses_denser_rate() {
        let estimator = TokenEstimator::new();
        assert!(estimator.contains_cjk("def 関数():"));
        assert!(!estimator.contains_cjk("def fn():"));
        assert_eq!(estimator.estimate_chars("関数関数"), 2);
    }

    #[test]
    fn test_outline_is_cheaper_than_source() {
        let estimator = TokenEstimator::new();
        let source = "def load(path):\n    with open(path) as fh:\n        return fh.read()\n";
        let outline = "def load(path):\n";
        assert!(
            estimator.estimate_string_hybrid(outline) < estimator.estimate_string_hybrid(source)
        );
    }
}
