use clap::Parser;
use gateway_server::{Args, Commands, GatewayConfig, GatewayServer, Result, ServerError};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(&args.log_level);

    let command = args.command.clone();
    let result = match command {
        Some(Commands::Start) | None => run_server(&args).await,
        Some(Commands::Config { show }) => handle_config(&args, show),
        Some(Commands::Init { output, force }) => init_config(&output, force),
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        process::exit(1);
    }
}

/// Run the gateway server
async fn run_server(args: &Args) -> Result<()> {
    let config = GatewayConfig::load(args)?;
    config.validate()?;

    info!(
        address = %config.server_address(),
        max_batch_size = config.limits.max_batch_size,
        max_payload_bytes = config.limits.max_payload_bytes,
        "starting event gateway"
    );

    GatewayServer::new(config).start().await
}

/// Validate or display configuration
fn handle_config(args: &Args, show: bool) -> Result<()> {
    let config = GatewayConfig::load(args)?;
    config.validate()?;

    if show {
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| gateway_server::ConfigError::InvalidFile(e.to_string()))?;
        println!("{rendered}");
    } else {
        info!("Configuration is valid");
    }

    Ok(())
}

/// Write a default configuration file
fn init_config(output: &std::path::Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(ServerError::Config(
            gateway_server::ConfigError::InvalidFile(format!(
                "{} already exists (use --force to overwrite)",
                output.display()
            )),
        ));
    }

    let content = GatewayConfig::generate_default()?;
    std::fs::write(output, content).map_err(gateway_server::ConfigError::Io)?;

    info!("Configuration file created: {}", output.display());
    Ok(())
}

/// Initialize tracing once at startup
fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");

        init_config(&path, false).unwrap();
        assert!(path.exists());

        let actual: GatewayConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let expected = GatewayConfig::default();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_init_config_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "existing").unwrap();

        let actual = init_config(&path, false);
        assert!(actual.is_err());

        // With force the file is replaced.
        init_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[server]"));
    }

    #[test]
    fn test_handle_config_validates_defaults() {
        let args = Args::parse_from(["gateway-server"]);
        assert!(handle_config(&args, false).is_ok());
    }
}
