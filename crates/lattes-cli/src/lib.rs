//! Lattes CLI library
//!
//! Command tree, configuration overlay and report rendering behind the
//! `lattes` binary. Each command runs one extractor or scorer from
//! `lattes-core` over a batch and hands the result to the report sink
//! (console, JSON, table or PDF).

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod report;

use anyhow::Result;

use cli::{Cli, Commands};
use commands::CommandContext;
use config::CliConfig;
use formatting::OutputFormat;

/// Load configuration, apply the command's flags and run it
pub fn run(cli: Cli) -> Result<()> {
    let mut config = CliConfig::load(cli.config.as_deref(), cli.output)?;
    let format = OutputFormat::from_str(&cli.format);

    match &cli.command {
        Commands::Similar { reference, input } => {
            config.apply_reference(reference.clone());
            config.apply_dir_args(input);
        }
        Commands::Areas { input, .. }
        | Commands::Activity { input }
        | Commands::Advising { input }
        | Commands::Articles { input }
        | Commands::Committees { input }
        | Commands::Events { input }
        | Commands::Summary { input }
        | Commands::Score { input, .. } => config.apply_dir_args(input),
        Commands::Tags { .. } | Commands::CountIds { .. } => {}
    }

    let ctx = CommandContext::new(config, format);
    match cli.command {
        Commands::Similar { .. } => commands::similar::execute(&ctx),
        Commands::Areas { distinct, .. } => commands::areas::execute(&ctx, distinct),
        Commands::Activity { .. } => commands::activity::execute(&ctx),
        Commands::Advising { .. } => commands::advising::execute(&ctx),
        Commands::Articles { .. } => commands::articles::execute(&ctx),
        Commands::Committees { .. } => commands::committees::execute(&ctx),
        Commands::Events { .. } => commands::events::execute(&ctx),
        Commands::Summary { .. } => commands::summary::execute(&ctx),
        Commands::Score { kind, .. } => commands::score::execute(&ctx, kind),
        Commands::Tags { file } => commands::tags::execute(&ctx, &file),
        Commands::CountIds { file } => commands::count_ids::execute(&ctx, &file),
    }
}
