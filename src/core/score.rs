//! Relevance scoring heuristics
//!
//! A confidence score combines fixed-weight bonuses (requested media type,
//! matched vocabulary kinds, matched title keyword) with a fuzzy similarity
//! term between the query and a candidate title. The final value is clamped
//! to [0, 100]. Ordering of results is caller-defined.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::core::phrase::normalize;

/// Bonus when the requested media type is Cartoon.
pub const MEDIA_TYPE_BONUS: i64 = 15;
/// Bonus per matched vocabulary kind.
pub const ENTITY_BONUS: i64 = 35;
/// Extra bonus when a title keyword matched (it also narrows candidates).
pub const TITLE_BONUS: i64 = 35;
/// Ceiling of the fuzzy similarity term.
pub const MAX_FUZZY_BONUS: i64 = 30;

/// Confidence used for every featured-media entry.
pub const FEATURED_CONFIDENCE: u8 = 70;
/// Confidence of the aggregate playlist record.
pub const PLAYLIST_CONFIDENCE: u8 = 50;

pub struct Scorer {
    matcher: SkimMatcherV2,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Fuzzy similarity term in `[0, MAX_FUZZY_BONUS]`.
    ///
    /// The raw Skim score is normalized against the title's self-score, so
    /// an exact (normalized) title match always contributes the maximum.
    pub fn fuzzy_bonus(&self, query: &str, title: &str) -> i64 {
        let query = normalize(query);
        let title = normalize(title);
        if query.is_empty() || title.is_empty() {
            return 0;
        }
        if query == title {
            return MAX_FUZZY_BONUS;
        }

        let self_score = self.matcher.fuzzy_match(&title, &title).unwrap_or(0);
        if self_score <= 0 {
            return 0;
        }
        let score = self.matcher.fuzzy_match(&title, &query).unwrap_or(0);
        let scaled = (score as f64 / self_score as f64) * MAX_FUZZY_BONUS as f64;
        (scaled.round() as i64).clamp(0, MAX_FUZZY_BONUS)
    }

    /// Clamp a raw score into the confidence range the contract expects.
    pub fn clamp_confidence(score: i64) -> u8 {
        score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(Scorer::clamp_confidence(-10), 0);
        assert_eq!(Scorer::clamp_confidence(0), 0);
        assert_eq!(Scorer::clamp_confidence(55), 55);
        assert_eq!(Scorer::clamp_confidence(100), 100);
        assert_eq!(Scorer::clamp_confidence(250), 100);
    }

    #[test]
    fn test_exact_title_match_contributes_maximum() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.fuzzy_bonus("Betty Boop: Snow White", "Betty Boop: Snow White"),
            MAX_FUZZY_BONUS
        );
        // Exactness is judged after normalization
        assert_eq!(
            scorer.fuzzy_bonus("play betty boop snow white!", "Betty Boop: Snow White"),
            MAX_FUZZY_BONUS
        );
    }

    #[test]
    fn test_partial_match_is_below_maximum() {
        let scorer = Scorer::new();
        let bonus = scorer.fuzzy_bonus("betty", "Betty Boop: Snow White");
        assert!(bonus < MAX_FUZZY_BONUS);
        assert!(bonus >= 0);
    }

    #[test]
    fn test_unrelated_strings_score_zero() {
        let scorer = Scorer::new();
        assert_eq!(scorer.fuzzy_bonus("zzzqqq", "Betty Boop"), 0);
        assert_eq!(scorer.fuzzy_bonus("", "Betty Boop"), 0);
    }
}
