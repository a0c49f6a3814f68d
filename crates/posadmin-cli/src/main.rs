//! posadmin CLI entry point.

use clap::Parser;
use posadmin_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod table;

use crate::cli::{Cli, Command, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config(&cli));

    let result = match &cli.command {
        Command::Entities => commands::run_entities(),
        Command::List(args) => commands::run_list(&cli.store, args),
        Command::Add(args) => commands::run_add(&cli.store, args),
        Command::Validate(args) => commands::run_validate(&cli.store, args),
        Command::Delete(args) => commands::run_delete(&cli.store, args),
        Command::Resolve(args) => commands::run_resolve(&cli.store, args),
        Command::CheckPeriod(args) => commands::run_check_period(&cli.store, args),
        Command::Export(args) => commands::run_export(&cli.store, args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

fn log_config(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        // An explicit -v/-q wins over RUST_LOG.
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
