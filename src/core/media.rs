//! Result record shapes of the common media-playback contract
//!
//! These are the records the hosting platform consumes: a per-entry media
//! result and an aggregate playlist result. Confidence is an integer in
//! the closed range [0, 100].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of media a result represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Generic,
    Music,
    Video,
    Movie,
    Cartoon,
}

/// How the host should play a result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackType {
    Video,
    Audio,
}

/// One playable catalog entry, scored against a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaResult {
    pub title: String,
    pub match_confidence: u8,
    pub media_type: MediaType,
    pub uri: String,
    pub playback: PlaybackType,
    pub skill_icon: String,
    pub skill_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Aggregate result bundling the featured catalog as one playable list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub title: String,
    pub match_confidence: u8,
    pub media_type: MediaType,
    pub playlist: Vec<MediaResult>,
    pub playback: PlaybackType,
    pub skill_icon: String,
    pub image: String,
    pub author: String,
}

/// A single item yielded by a search: either one entry or the playlist.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchItem {
    Entry(MediaResult),
    Playlist(PlaylistResult),
}

impl SearchItem {
    pub fn title(&self) -> &str {
        match self {
            SearchItem::Entry(r) => &r.title,
            SearchItem::Playlist(p) => &p.title,
        }
    }

    pub fn match_confidence(&self) -> u8 {
        match self {
            SearchItem::Entry(r) => r.match_confidence,
            SearchItem::Playlist(p) => p.match_confidence,
        }
    }
}
