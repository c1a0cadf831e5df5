use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::core::store::CatalogStore;
use crate::utils::text::fit_width;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommands,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Show catalog statistics
    Stats,

    /// List all catalog entries
    List,

    /// Refetch the remote catalog index, bypassing the cache TTL
    Refresh,

    /// Remove the locally cached remote catalog
    ClearCache,
}

pub async fn execute(args: CatalogArgs, config: &Config) -> Result<()> {
    let store = CatalogStore::new(config);

    match args.command {
        CatalogCommands::Stats => {
            let catalog = store.load().await?;

            println!("📊 Catalog Statistics");
            println!("════════════════════");
            println!("🎞️  Playable entries: {}", catalog.len());

            let with_images = catalog
                .entries()
                .iter()
                .filter(|e| e.primary_image().is_some())
                .count();
            println!("🖼️  Entries with preview image: {}", with_images);

            match &config.catalog_path {
                Some(path) => println!("📁 Source: local file {}", path.display()),
                None => match &config.catalog_url {
                    Some(url) => println!("🌐 Source: remote index {}", url),
                    None => println!("📦 Source: embedded catalog"),
                },
            }

            if let Some(cache) = store.cache_info() {
                println!("\n🗄️  Cached remote copy");
                println!("   Fetched at: {}", cache.fetched_at);
                println!("   Entries: {}", cache.entry_count);
                println!("   Stale: {}", if cache.stale { "yes" } else { "no" });
            }
        }

        CatalogCommands::List => {
            let catalog = store.load().await?;
            for (i, entry) in catalog.entries().iter().enumerate() {
                println!(
                    "{:>3}. {} [{}]",
                    i + 1,
                    fit_width(&entry.title, 50),
                    entry.category()
                );
            }
            println!("\n{} entries", catalog.len());
        }

        CatalogCommands::Refresh => {
            info!("Refreshing catalog from remote index...");
            let catalog = store.refresh().await?;
            println!("✅ Catalog refreshed: {} playable entries", catalog.len());
        }

        CatalogCommands::ClearCache => {
            store.clear_cache()?;
            println!("✅ Cached catalog removed");
            println!("💡 The next run will refetch the remote index or use the embedded catalog");
        }
    }

    Ok(())
}
