//! Top-level command dispatch.

use crate::cli::{Cli, Command};
use crate::commands;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::repl;
use crate::repository::open_repository;
use std::path::Path;

/// Run one CLI invocation.
///
/// Only the commands that read or write characters open the store.
pub async fn run(cli: Cli) -> Result<()> {
    // Load config, falling back to defaults on first run
    let mut config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Classify(args) => commands::execute_classify(args, &formatter).await,
        Command::Paginate(args) => commands::execute_paginate(args, &formatter).await,
        Command::Profile(args) => commands::execute_profile(args, &mut config, &formatter).await,
        Command::Chat => {
            let repo = open_repository(&config)?;
            repl::run_chat(&config, &repo, &formatter).await
        }
        Command::Extract(args) => {
            let repo = open_repository(&config)?;
            commands::execute_extract(args, &repo, &formatter).await
        }
        Command::Show(args) => {
            let repo = open_repository(&config)?;
            commands::execute_show(args, &repo, &formatter).await
        }
        Command::List => {
            let repo = open_repository(&config)?;
            commands::execute_list(&repo, &formatter).await
        }
        Command::Export(args) => {
            let repo = open_repository(&config)?;
            commands::execute_export(args, &repo, &formatter).await
        }
    }
}
