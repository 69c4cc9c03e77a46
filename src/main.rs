use clap::Parser;
use tracing::debug;

use admix::cli::{metrics, optimize, output, Cli, Commands};
use admix::config::Config;

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    // Apply CLI overrides
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();
    debug!(config = ?config, "admix starting");

    let result = match &cli.command {
        Commands::Optimize(args) => optimize::execute(&config, args),
        Commands::Metrics(args) => metrics::execute(args),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
