//! Docsite - declarative configuration for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod payload;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_config(&config),
        Commands::Check => cli::check::check_config(&config),
        Commands::Emit { args } => cli::emit::run_emit(args, &config),
    }
}
