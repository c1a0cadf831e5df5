use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::cli::output;
use crate::config::Config;
use crate::core::media::{MediaType, SearchItem};
use crate::core::skill::CartoonSkill;
use crate::core::store::CatalogStore;

#[derive(Args)]
pub struct SearchArgs {
    /// Search phrase, as the user would say it
    #[arg(value_name = "PHRASE", required = true, num_args = 1..)]
    phrase: Vec<String>,

    /// Media type requested by the caller
    #[arg(short, long, value_enum, default_value = "cartoon")]
    media_type: MediaType,

    /// Drop results below this confidence
    #[arg(long, default_value = "0")]
    min_confidence: u8,

    /// Limit number of results
    #[arg(long, default_value = "20")]
    limit: usize,

    /// Output format (table, json, detailed)
    #[arg(long, default_value = "table")]
    format: String,
}

pub async fn execute(args: SearchArgs, config: &Config) -> Result<()> {
    let phrase = args.phrase.join(" ");

    let store = CatalogStore::new(config);
    let catalog = store.load().await?;
    let skill = CartoonSkill::new(catalog, config);

    info!("Searching catalog for: {}", phrase);

    let mut results: Vec<SearchItem> = skill
        .search(&phrase, args.media_type)
        .filter(|item| item.match_confidence() >= args.min_confidence)
        .collect();

    if results.len() > args.limit {
        results.truncate(args.limit);
    }

    if results.is_empty() {
        info!("No cartoons found matching the given phrase");
        return Ok(());
    }

    info!("Found {} result(s)", results.len());

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&results)?;
            println!("{}", json);
        }
        "detailed" => {
            let entries: Vec<_> = results
                .iter()
                .filter_map(|item| match item {
                    SearchItem::Entry(r) => Some(r.clone()),
                    SearchItem::Playlist(_) => None,
                })
                .collect();
            output::media_detailed(&entries);
            print_playlist_note(&results);
        }
        _ => {
            let entries: Vec<_> = results
                .iter()
                .filter_map(|item| match item {
                    SearchItem::Entry(r) => Some(r.clone()),
                    SearchItem::Playlist(_) => None,
                })
                .collect();
            if !entries.is_empty() {
                output::media_table(&entries);
            }
            print_playlist_note(&results);
        }
    }

    Ok(())
}

fn print_playlist_note(results: &[SearchItem]) {
    for item in results {
        if let SearchItem::Playlist(playlist) = item {
            println!(
                "📺 Playlist: {} ({} entries, confidence {})",
                playlist.title,
                playlist.playlist.len(),
                playlist.match_confidence
            );
            println!("💡 Use 'filmchest playlist' to print the full record");
        }
    }
}
