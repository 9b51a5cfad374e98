use book_ladder::cli::{Cli, Commands};
use book_ladder::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    let _telemetry = book_ladder::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Watch(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Server: {}", config.server.address);
            println!(
                "  Connect timeout: {}s",
                config.server.connect_timeout_secs
            );
            if config.reconnect.enabled {
                println!(
                    "  Reconnect: on (max_attempts={}, delay={}..{}ms)",
                    config.reconnect.max_attempts,
                    config.reconnect.initial_delay_ms,
                    config.reconnect.max_delay_ms
                );
            } else {
                println!("  Reconnect: off");
            }
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            if let Some(path) = &config.telemetry.log_file {
                println!("  Log file: {}", path.display());
            }
        }
    }

    Ok(())
}
