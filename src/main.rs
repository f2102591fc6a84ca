use anyhow::Result;
use clap::Parser;
use log::error;

use schemefinder::cli::version_info;
use schemefinder::{Cli, CommandHandler, Commands, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only errors unless asked for more; RUST_LOG still wins when set
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(log::LevelFilter::Error);
    }
    logger.init();

    let command = cli.command.unwrap_or(Commands::Form);

    // Handle version early
    if matches!(command, Commands::Version) {
        println!("{}", version_info());
        return Ok(());
    }

    // Diagnostics still run on defaults when the config file is broken
    let (settings, config_error) = match Settings::load() {
        Ok(s) => (s, None),
        Err(e) if matches!(command, Commands::Doctor) => {
            error!("Failed to load settings: {e:#}");
            (Settings::default(), Some(format!("{e:#}")))
        }
        Err(e) => {
            error!("Failed to load settings: {e:#}");
            eprintln!("Error: Failed to load configuration: {e:#}");
            eprintln!("Fix it (see: schemefinder doctor) or remove ~/.schemefinder/config.toml.");
            std::process::exit(1);
        }
    };

    let use_colors = settings.output.use_colors && !cli.no_color;
    let mut handler = match CommandHandler::new(settings, use_colors) {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to initialize: {e:#}");
            eprintln!("Error: Failed to initialize: {e:#}");
            std::process::exit(1);
        }
    };
    if let Some(e) = config_error {
        handler = handler.with_config_error(e);
    }

    match handler.handle_command(command).await {
        Ok(output) => {
            if !output.text.is_empty() {
                println!("{}", output.text);
            }
            if !output.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("{}", handler.format_error(&format!("{e:#}")));
            std::process::exit(1);
        }
    }

    Ok(())
}
