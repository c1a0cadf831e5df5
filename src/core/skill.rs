//! The cartoon search skill
//!
//! Owns the loaded catalog, a keyword vocabulary built from catalog titles,
//! and the scorer. Searches recompute everything from scratch; nothing here
//! mutates after construction.

use std::collections::HashMap;

use crate::config::Config;
use crate::core::catalog::{Catalog, CatalogEntry};
use crate::core::media::{MediaResult, MediaType, PlaybackType, PlaylistResult, SearchItem};
use crate::core::phrase::{contains_word_seq, normalize, title_variants, Vocabulary};
use crate::core::score::{
    Scorer, ENTITY_BONUS, FEATURED_CONFIDENCE, MEDIA_TYPE_BONUS, PLAYLIST_CONFIDENCE, TITLE_BONUS,
};

/// Vocabulary kind holding cartoon title keywords.
pub const KW_CARTOON_NAME: &str = "cartoon_name";
/// Vocabulary kind holding provider aliases.
pub const KW_PROVIDER: &str = "cartoon_streaming_provider";

const PROVIDER_ALIASES: [&str; 4] = [
    "FilmChestVintageCartoons",
    "FilmChest",
    "FilmChest Vintage Cartoons",
    "FilmChest Cartoons",
];

const PLAYLIST_TITLE: &str = "FilmChest Vintage Cartoons (Cartoon Playlist)";
const PLAYLIST_AUTHOR: &str = "Internet Archive";

pub struct CartoonSkill {
    catalog: Catalog,
    vocabulary: Vocabulary,
    scorer: Scorer,
    skill_id: String,
    skill_icon: String,
    playlist_size: usize,
}

impl CartoonSkill {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let mut vocabulary = Vocabulary::new();
        for entry in catalog.entries() {
            vocabulary.register(KW_CARTOON_NAME, title_variants(&entry.title));
        }
        vocabulary.register(KW_PROVIDER, PROVIDER_ALIASES);

        Self {
            catalog,
            vocabulary,
            scorer: Scorer::new(),
            skill_id: config.skill_id.clone(),
            skill_icon: config.skill_icon.clone(),
            playlist_size: config.playlist_size,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Match a phrase against the registered vocabulary kinds.
    pub fn match_entities(&self, phrase: &str) -> HashMap<String, String> {
        self.vocabulary.match_phrase(phrase)
    }

    /// Run a search and lazily yield result records.
    ///
    /// A matched title keyword yields one record per catalog entry whose
    /// title contains it; a matched provider alias additionally yields the
    /// aggregate playlist record. Results keep catalog insertion order.
    pub fn search<'a>(
        &'a self,
        phrase: &str,
        media_type: MediaType,
    ) -> impl Iterator<Item = SearchItem> + 'a {
        let entities = self.match_entities(phrase);
        let matched_title = entities.get(KW_CARTOON_NAME).cloned();
        let provider_matched = entities.contains_key(KW_PROVIDER);

        let mut base = if media_type == MediaType::Cartoon {
            MEDIA_TYPE_BONUS
        } else {
            0
        };
        base += ENTITY_BONUS * entities.len() as i64;
        if matched_title.is_some() {
            base += TITLE_BONUS;
        }

        let phrase = phrase.to_string();
        let candidates = self
            .catalog
            .entries()
            .iter()
            .filter(move |entry| match &matched_title {
                Some(keyword) => contains_word_seq(&normalize(&entry.title), keyword),
                None => false,
            })
            .map(move |entry| {
                let confidence =
                    Scorer::clamp_confidence(base + self.scorer.fuzzy_bonus(&phrase, &entry.title));
                SearchItem::Entry(self.entry_result(entry, confidence, MediaType::Cartoon))
            });

        let playlist = provider_matched.then(|| SearchItem::Playlist(self.playlist()));
        candidates.chain(playlist)
    }

    /// One result per catalog entry, at the fixed featured confidence.
    pub fn featured_media(&self) -> Vec<MediaResult> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| self.entry_result(entry, FEATURED_CONFIDENCE, MediaType::Movie))
            .collect()
    }

    /// The whole catalog bundled as one playable list.
    pub fn playlist(&self) -> PlaylistResult {
        let mut entries = self.featured_media();
        entries.truncate(self.playlist_size);

        PlaylistResult {
            title: PLAYLIST_TITLE.to_string(),
            match_confidence: PLAYLIST_CONFIDENCE,
            media_type: MediaType::Movie,
            playlist: entries,
            playback: PlaybackType::Video,
            skill_icon: self.skill_icon.clone(),
            image: self.skill_icon.clone(),
            author: PLAYLIST_AUTHOR.to_string(),
        }
    }

    fn entry_result(
        &self,
        entry: &CatalogEntry,
        confidence: u8,
        media_type: MediaType,
    ) -> MediaResult {
        // The catalog only holds playable entries; missing images fall back
        // to the skill icon.
        let uri = entry.primary_stream().unwrap_or_default().to_string();
        let image = entry
            .primary_image()
            .map(str::to_string)
            .or_else(|| Some(self.skill_icon.clone()));

        MediaResult {
            title: entry.title.clone(),
            match_confidence: confidence,
            media_type,
            uri,
            playback: PlaybackType::Video,
            skill_icon: self.skill_icon.clone(),
            skill_id: self.skill_id.clone(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_skill() -> CartoonSkill {
        let json = r#"{
            "a": {
                "title": "Betty Boop: Snow White",
                "streams": ["https://archive.org/download/bb_snow_white/bb_snow_white.mpeg"],
                "images": ["https://archive.org/download/bb_snow_white/__ia_thumb.jpg"]
            },
            "b": {
                "title": "Betty Boop for President (1932)",
                "streams": ["https://archive.org/download/Betty_Boop_for_President_1932/Betty_Boop_for_President_1932.ogv"],
                "images": []
            },
            "c": {
                "title": "Popeye the Sailor: I'm in the Army Now",
                "streams": ["https://archive.org/download/popeye_army_now/popeye_army_now.mpeg"],
                "images": []
            },
            "d": {
                "title": "Unplayable Short",
                "streams": [],
                "images": []
            }
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        CartoonSkill::new(catalog, &Config::default())
    }

    #[test]
    fn test_title_search_yields_matching_entries() {
        let skill = test_skill();
        let results: Vec<_> = skill.search("play betty boop", MediaType::Cartoon).collect();
        assert_eq!(results.len(), 2);
        for item in &results {
            assert!(item.title().to_lowercase().contains("betty boop"));
            assert!(item.match_confidence() <= 100);
            assert!(item.match_confidence() > 0);
        }
    }

    #[test]
    fn test_longest_title_keyword_narrows_candidates() {
        let skill = test_skill();
        let results: Vec<_> = skill
            .search("betty boop snow white", MediaType::Cartoon)
            .collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "Betty Boop: Snow White");
        // Exact normalized title plus all bonuses saturates the cap
        assert_eq!(results[0].match_confidence(), 100);
    }

    #[test]
    fn test_cartoon_media_type_boosts_confidence() {
        let skill = test_skill();
        let as_cartoon: Vec<_> = skill.search("betty boop", MediaType::Cartoon).collect();
        let as_generic: Vec<_> = skill.search("betty boop", MediaType::Generic).collect();
        assert_eq!(as_cartoon.len(), as_generic.len());
        for (c, g) in as_cartoon.iter().zip(&as_generic) {
            assert!(g.match_confidence() <= c.match_confidence());
        }
    }

    #[test]
    fn test_provider_phrase_yields_playlist() {
        let skill = test_skill();
        let results: Vec<_> = skill
            .search("something from filmchest", MediaType::Generic)
            .collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], SearchItem::Playlist(_)));
    }

    #[test]
    fn test_unrelated_phrase_yields_nothing() {
        let skill = test_skill();
        let results: Vec<_> = skill
            .search("latest nature documentary", MediaType::Generic)
            .collect();
        assert!(results.is_empty());
    }

    #[test]
    fn test_confidence_never_exceeds_100() {
        let skill = test_skill();
        // Title + provider + cartoon media type pushes the raw score far
        // beyond the cap.
        let results: Vec<_> = skill
            .search("betty boop snow white on filmchest", MediaType::Cartoon)
            .collect();
        assert!(!results.is_empty());
        for item in &results {
            assert!(item.match_confidence() <= 100);
        }
    }

    #[test]
    fn test_featured_media_covers_playable_catalog_only() {
        let skill = test_skill();
        let featured = skill.featured_media();
        assert_eq!(featured.len(), 3);
        for result in &featured {
            assert_eq!(result.match_confidence, FEATURED_CONFIDENCE);
            assert_eq!(result.media_type, MediaType::Movie);
            assert!(!result.uri.is_empty());
        }
    }

    #[test]
    fn test_playlist_respects_size_limit() {
        let mut config = Config::default();
        config.playlist_size = 2;
        let json = r#"{
            "a": {"title": "One", "streams": ["https://example.org/1.ogv"]},
            "b": {"title": "Two", "streams": ["https://example.org/2.ogv"]},
            "c": {"title": "Three", "streams": ["https://example.org/3.ogv"]}
        }"#;
        let skill = CartoonSkill::new(Catalog::from_json_str(json).unwrap(), &config);
        let playlist = skill.playlist();
        assert_eq!(playlist.playlist.len(), 2);
        assert_eq!(playlist.match_confidence, PLAYLIST_CONFIDENCE);
        assert_eq!(playlist.author, "Internet Archive");
    }

    #[test]
    fn test_missing_image_falls_back_to_skill_icon() {
        let skill = test_skill();
        let results: Vec<_> = skill.search("betty boop", MediaType::Cartoon).collect();
        let president = results
            .iter()
            .find_map(|item| match item {
                SearchItem::Entry(r) if r.title.starts_with("Betty Boop for President") => Some(r),
                _ => None,
            })
            .unwrap();
        assert_eq!(president.image.as_deref(), Some(skill.skill_icon.as_str()));
    }
}
