use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod utils;

use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "filmchest")]
#[command(about = "Search and play FilmChest vintage cartoons from the Internet Archive")]
#[command(version)]
#[command(author = "musicdock")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog JSON file, overriding the configured source
    #[arg(long)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with a spoken-style phrase
    Search(cli::search::SearchArgs),

    /// List featured media entries
    Featured(cli::featured::FeaturedArgs),

    /// Print the aggregate playlist record as JSON
    Playlist(cli::playlist::PlaylistArgs),

    /// Inspect, refresh or clear the catalog
    Catalog(cli::catalog::CatalogArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    utils::logging::init_logging(args.verbose).map_err(error::SkillError::Internal)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog.into());
    }

    match args.command {
        Commands::Search(cmd) => cli::search::execute(cmd, &config)
            .await
            .map_err(error::SkillError::Internal),
        Commands::Featured(cmd) => cli::featured::execute(cmd, &config)
            .await
            .map_err(error::SkillError::Internal),
        Commands::Playlist(cmd) => cli::playlist::execute(cmd, &config)
            .await
            .map_err(error::SkillError::Internal),
        Commands::Catalog(cmd) => cli::catalog::execute(cmd, &config)
            .await
            .map_err(error::SkillError::Internal),
        Commands::Config(cmd) => cli::config::execute(cmd, &config)
            .await
            .map_err(error::SkillError::Internal),
    }
}
