//! Phrase normalization and keyword vocabulary
//!
//! Search phrases and catalog titles are normalized the same way before any
//! comparison: lower-case, diacritics stripped, a fixed set of filler words
//! removed, punctuation dropped, whitespace collapsed. Normalization is a
//! pure function and idempotent.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn filler_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(play|watch|show|me|some|any|the|a|an|cartoon|cartoons|animated|animation|movie|movies|video|videos|film|films)\b",
        )
        .expect("valid filler-word regex")
    })
}

/// Normalize a phrase for matching.
pub fn normalize(phrase: &str) -> String {
    let lowered = secular::lower_lay_string(phrase);
    let depunctuated: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let stripped = filler_words().replace_all(&depunctuated, " ");
    collapse::collapse(&stripped)
}

/// Keyword variants of a catalog title.
///
/// Drops a `| ...` suffix and a parenthesized year, then also registers both
/// halves of `:` and `-` splits so "Betty Boop: Snow White" answers to
/// "snow white" alone.
pub fn title_variants(title: &str) -> Vec<String> {
    let base = title
        .split('|')
        .next()
        .unwrap_or(title)
        .split('(')
        .next()
        .unwrap_or(title)
        .trim();

    let mut variants = Vec::new();
    let mut push = |s: &str| {
        let trimmed = s.trim();
        if !trimmed.is_empty() && !variants.iter().any(|v| v == trimmed) {
            variants.push(trimmed.to_string());
        }
    };

    push(base);
    if let Some((left, right)) = base.split_once(':') {
        push(left);
        push(right);
    }
    if let Some((left, right)) = base.split_once('-') {
        push(left);
        push(right);
    }

    variants
}

/// Registered keyword lists, matched against normalized phrases.
///
/// Stands in for the host framework's intent vocabulary: each kind holds a
/// list of known terms and a phrase matches a kind when it contains one of
/// them as a whole-word sequence. The longest contained term wins.
#[derive(Debug, Default)]
pub struct Vocabulary {
    keywords: HashMap<String, Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<I, S>(&mut self, kind: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.keywords.entry(kind.to_string()).or_default();
        for term in terms {
            let normalized = normalize(term.as_ref());
            if !normalized.is_empty() && !list.contains(&normalized) {
                list.push(normalized);
            }
        }
    }

    /// Match a phrase against every registered kind.
    ///
    /// Returns, per kind, the longest registered term contained in the
    /// normalized phrase.
    pub fn match_phrase(&self, phrase: &str) -> HashMap<String, String> {
        let normalized = normalize(phrase);
        let mut matches = HashMap::new();

        for (kind, terms) in &self.keywords {
            let best = terms
                .iter()
                .filter(|term| contains_word_seq(&normalized, term))
                .max_by_key(|term| term.len());
            if let Some(term) = best {
                matches.insert(kind.clone(), term.clone());
            }
        }

        matches
    }
}

/// Whole-word containment: `needle` appears in `haystack` aligned on word
/// boundaries. Both sides must already be normalized.
pub fn contains_word_seq(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let padded = format!(" {} ", haystack);
    padded.contains(&format!(" {} ", needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_fillers_and_punctuation() {
        assert_eq!(normalize("Play the Betty Boop cartoon!"), "betty boop");
        assert_eq!(normalize("Betty Boop's Ker-Choo"), "betty boop s ker choo");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Watch some Betty Boop: Snow White (1933) cartoons");
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Bétty Bööp"), "betty boop");
    }

    #[test]
    fn test_title_variants_split_on_colon() {
        let variants = title_variants("Betty Boop: Snow White (1933)");
        assert!(variants.contains(&"Betty Boop: Snow White".to_string()));
        assert!(variants.contains(&"Betty Boop".to_string()));
        assert!(variants.contains(&"Snow White".to_string()));
    }

    #[test]
    fn test_title_variants_drop_pipe_suffix() {
        let variants = title_variants("Popeye the Sailor | Full Episode");
        assert_eq!(variants[0], "Popeye the Sailor");
    }

    #[test]
    fn test_vocabulary_matches_longest_term() {
        let mut vocab = Vocabulary::new();
        vocab.register("cartoon_name", ["Betty Boop", "Betty Boop: Snow White"]);

        let matches = vocab.match_phrase("play betty boop snow white");
        assert_eq!(
            matches.get("cartoon_name").map(String::as_str),
            Some("betty boop snow white")
        );
    }

    #[test]
    fn test_vocabulary_requires_word_boundaries() {
        let mut vocab = Vocabulary::new();
        vocab.register("cartoon_name", ["Pep"]);

        assert!(vocab.match_phrase("more pepper please").is_empty());
        assert!(!vocab.match_phrase("more pep").is_empty());
    }
}
