//! Datafile CLI
//!
//! Command-line interface for recording data file access policy.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use datafile_cli::cli::{Args, Command};
use datafile_cli::commands::{self, StoreContext};
use datafile_cli::{config_handlers, logging};
use datafile_core::config::PROJECT_NAME;
use datafile_core::{ConfigResolver, DatafileConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = if args.command.needs_config() {
        DatafileConfig::load(args.config.as_deref())?
    } else {
        DatafileConfig::default()
    };
    logging::init(&config.logging.level, args.verbose);

    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Config { action } => {
            let resolver = ConfigResolver::new(PROJECT_NAME);
            config_handlers::handle_config_command(
                &resolver,
                &config,
                args.config.as_deref(),
                action,
                &mut stdout,
            )?;
        }
        command => {
            let ctx = StoreContext::from_config(&config, args.store.as_deref());
            tracing::debug!(store = %ctx.path.display(), "Running {command:?}");
            commands::run(&ctx, command, &mut stdout)?;
        }
    }

    Ok(())
}
