use anyhow::Context;
use calcterm::config::Config;
use calcterm::logging::{init_tracing, LogTarget};
use calcterm::replay::replay;
use calcterm::ui;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calcterm", version, about = "A pocket calculator for the terminal")]
struct Cli {
    /// Config file (default: <config_dir>/calcterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay KEYS without a UI and print both display lines
    /// (digits, . + - * / = ; '<' deletes, 'c' clears)
    #[arg(long, value_name = "KEYS", allow_hyphen_values = true)]
    keys: Option<String>,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
        config.validate()?;
    }
    let level = config.log_level()?;

    match cli.keys {
        Some(keys) => {
            init_tracing(level, LogTarget::Stderr)?;
            tracing::debug!(config = %config_path.display(), "Configuration loaded");
            let lines = replay(&keys, &config.formatter())
                .with_context(|| format!("replaying '{keys}'"))?;
            println!("{lines}");
        }
        None => {
            init_tracing(level, LogTarget::File(config.log_path()))?;
            tracing::info!(config = %config_path.display(), "Configuration loaded");
            ui::run(&config).context("terminal UI failed")?;
        }
    }

    Ok(())
}
