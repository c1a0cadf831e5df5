use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::cli::output;
use crate::config::Config;
use crate::core::skill::CartoonSkill;
use crate::core::store::CatalogStore;

#[derive(Args)]
pub struct FeaturedArgs {
    /// Limit number of entries
    #[arg(long, default_value = "25")]
    limit: usize,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,
}

pub async fn execute(args: FeaturedArgs, config: &Config) -> Result<()> {
    let store = CatalogStore::new(config);
    let catalog = store.load().await?;
    let skill = CartoonSkill::new(catalog, config);

    let mut featured = skill.featured_media();
    if featured.len() > args.limit {
        featured.truncate(args.limit);
    }

    info!("Featured media: {} entries", featured.len());

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&featured)?;
            println!("{}", json);
        }
        _ => output::media_table(&featured),
    }

    Ok(())
}
