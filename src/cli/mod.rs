pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "starwars-api")]
#[command(about = "REST API over users, characters, planets and favorites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Listen port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Load characters and planets from a JSON fixture")]
    Seed {
        #[arg(help = "Fixture file, e.g. fixtures/starwars.json")]
        file: PathBuf,
    },
}

pub async fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.api.port = port;
            }
            commands::serve::run(config).await
        }
        Commands::Seed { file } => commands::seed::run(config, file).await,
    }
}
