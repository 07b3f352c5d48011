use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{inspect_token, serve, show_config};
use crate::config::HostConfig;

#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "FinTrack web host and maintenance tools")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./fintrack.toml when present)
    #[arg(short, long, global = true, env = "FINTRACK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled app, its runtime configuration and a health probe
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "FINTRACK_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the compiled app (index.html and assets)
        #[arg(short, long, env = "FINTRACK_DIST_DIR")]
        dist_dir: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON
    ShowConfig,
    /// Decode a session token and print who it belongs to and when it expires
    InspectToken {
        /// Bearer token, with or without the "Bearer " prefix
        token: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir } => {
                let config = HostConfig::load(self.config.as_deref())?
                    .with_overrides(bind_address, dist_dir);
                serve(config).await?;
            }
            Commands::ShowConfig => {
                let config = HostConfig::load(self.config.as_deref())?;
                println!("{}", show_config(&config)?);
            }
            Commands::InspectToken { token } => {
                println!("{}", inspect_token(&token, chrono::Utc::now().timestamp())?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from([
            "fintrack",
            "serve",
            "--bind-address",
            "127.0.0.1:8080",
            "--dist-dir",
            "public",
        ]);
        match cli.command {
            Commands::Serve { bind_address, dist_dir } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
                assert_eq!(dist_dir, Some(PathBuf::from("public")));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_inspect_token() {
        let cli = Cli::parse_from(["fintrack", "inspect-token", "a.b.c"]);
        assert!(matches!(cli.command, Commands::InspectToken { token } if token == "a.b.c"));
    }
}
