use anyhow::Context;
use clap::Parser;
use roman_calc::adapters::commands::run_command;
use roman_calc::adapters::output::{OutputFormat, Renderer};
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{CliConfig, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    match cli.format {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose, &config.log_level()),
        OutputFormat::Json => logger::init_json_logger(cli.verbose, &config.log_level()),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let renderer = Renderer::new(cli.format, config.display.clone());

    let stdin = io::stdin();
    match run_command(cli.command, &config, &renderer, stdin.lock(), io::stdout()) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
