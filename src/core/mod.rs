//! Core functionality modules
//!
//! - `catalog`: the static cartoon catalog and its JSON format
//! - `media`: result record shapes of the playback contract
//! - `phrase`: phrase normalization and keyword vocabulary
//! - `score`: confidence scoring heuristics
//! - `skill`: the search skill tying catalog, vocabulary and scorer together
//! - `store`: catalog loading, remote bootstrap and local caching

pub mod catalog;
pub mod media;
pub mod phrase;
pub mod score;
pub mod skill;
pub mod store;
