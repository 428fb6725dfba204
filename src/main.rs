//! platforma-docs - configuration builder for the platforma documentation site.

#![allow(dead_code)]

mod cli;
mod config;
mod export;
mod logger;

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

    match &cli.command {
        Commands::Init { dry, force } => cli::init::new_config(&cli.config, *dry, *force),
        Commands::Check { content } => {
            let config = SiteConfig::load(&cli.config)?;
            cli::check::check_site(&config, content.as_deref())
        }
        Commands::Emit { args } => {
            let config = SiteConfig::load(&cli.config)?;
            cli::emit::emit_config(&config, args)
        }
    }
}
