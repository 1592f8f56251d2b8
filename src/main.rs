//! Shell History Browser - Entry Point

use chrono::Utc;
use clap::Parser;
use cmdhist::config::BrowserConfig;
use cmdhist::filter::EmptyResultPolicy;
use cmdhist::model::{AppError, Dataset};
use cmdhist::view::{ColorConfig, Theme};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Shell History Browser - type to filter your recent commands
#[derive(Parser, Debug)]
#[command(name = "cmdhist")]
#[command(version)]
#[command(about = "Interactive terminal browser for shell history")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// What the table shows when no command matches
    #[arg(long, value_enum)]
    pub empty_result: Option<EmptyResultPolicy>,

    /// Maximum query length in characters (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_query_length: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Exiting after fatal error");
            eprintln!("cmdhist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cmdhist::config::load_config_with_precedence(args.config.clone())?;
        let merged = cmdhist::config::merge_config(config_file);
        let with_env = cmdhist::config::apply_env_overrides(merged);
        cmdhist::config::apply_cli_overrides(
            with_env,
            args.empty_result,
            args.max_query_length.map(|n| n as usize),
        )
    };

    cmdhist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let theme = Theme::new(ColorConfig::from_env_and_args(args.no_color));
    let dataset = Dataset::sample(Utc::now());

    cmdhist::view::run_with_config(dataset, BrowserConfig::from(&config), theme)?;

    Ok(())
}
