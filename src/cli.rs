//! Command-line interface for the FluxFlow server

use anyhow::Result;
use clap::{Parser, Subcommand};

/// FluxFlow ML Engine - energy-aware adaptive scheduling service
#[derive(Debug, Parser)]
#[command(name = "fluxflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve {
        /// Bind host, overriding FLUXFLOW_SERVER__HOST
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overriding FLUXFLOW_SERVER__PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Dispatch the parsed CLI
pub async fn run(cli: Cli) -> Result<()> {
    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => (None, None),
    };
    crate::server::run(host, port).await
}
