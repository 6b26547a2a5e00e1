//! blogconf - check, dump and watch a blog's `blog.toml`.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    blogconf::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry, force } => {
            cli::init::run(dir.as_deref(), &cli.config, *dry, *force)
        }
        Commands::Check { args } => cli::check::run(&cli.config, args),
        Commands::Dump { format, pretty } => cli::dump::run(&cli.config, *format, *pretty),
        Commands::Watch { strict } => cli::watch::run(&cli.config, *strict),
    }
}
