use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::core::skill::CartoonSkill;
use crate::core::store::CatalogStore;

#[derive(Args)]
pub struct PlaylistArgs {}

/// Print the aggregate playlist record as the host would receive it.
pub async fn execute(_args: PlaylistArgs, config: &Config) -> Result<()> {
    let store = CatalogStore::new(config);
    let catalog = store.load().await?;
    let skill = CartoonSkill::new(catalog, config);

    let playlist = skill.playlist();
    let json = serde_json::to_string_pretty(&playlist)?;
    println!("{}", json);

    Ok(())
}
