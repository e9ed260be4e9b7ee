use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use produce_tally::app;
use produce_tally::cli::Cli;
use produce_tally::config::{self, Config};

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let outcome = app::run(&cli, &config, &mut out, &mut err)?;

    Ok(outcome.exit_code())
}

fn load_config(cli: &Cli) -> Result<Config> {
    // An explicit --config must load; the default location may be absent
    if let Some(path) = &cli.config {
        return Ok(config::load_config_from_path(path)?);
    }

    let result = config::load_config();
    if let Some(warning) = result.warning {
        log::warn!("{}", warning);
    }
    Ok(result.config)
}
