// /auth-portal/services/portal-service/src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::AppConfig;

/// Registration, login and session-gated pages over one SQLite file
#[derive(Parser, Debug)]
#[command(name = "portal-service", version, about)]
pub struct Cli {
    /// Store file path (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Port to listen on (overrides SERVER_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Drop and recreate the tables
    InitDb,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve { port: None })
    }

    /// Flags win over environment configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.database {
            config.database_path = path.clone();
        }
        if let Some(Command::Serve { port: Some(port) }) = &self.command {
            config.port = *port;
        }
    }
}
