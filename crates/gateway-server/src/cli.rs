use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Event Gateway - analytics event ingestion service
#[derive(Parser, Debug)]
#[command(name = "gateway-server")]
#[command(about = "HTTP ingestion gateway for batched analytics events")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "GATEWAY_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Server bind address
    #[arg(long, env = "GATEWAY_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Server port
    #[arg(short, long, env = "GATEWAY_PORT")]
    pub port: Option<u16>,

    /// Log level
    #[arg(long, env = "GATEWAY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the gateway server
    Start,
    /// Validate configuration
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,
    },
    /// Generate default configuration
    Init {
        /// Output file path
        #[arg(short, long, default_value = "gateway.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}
