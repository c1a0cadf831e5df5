use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write the default configuration to the config file
    Init,
}

pub async fn execute(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let content = toml::to_string_pretty(config)?;
            println!("{}", content);
        }

        ConfigCommands::Path => {
            println!("{}", Config::config_path()?.display());
        }

        ConfigCommands::Init => {
            let path = Config::config_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Config::default().save(&path)?;
            println!("✅ Default configuration written to {}", path.display());
        }
    }

    Ok(())
}
