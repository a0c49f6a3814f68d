//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "posadmin",
    version,
    about = "Outlet configuration admin tools",
    long_about = "Manage back-office configuration records: outlets, business \
                  periods, set menus, menu items, credit cards, UOM, and user \
                  groups.\n\nRecords live in a JSON store; validation, \
                  effective-date resolution, and schedule-conflict checks run \
                  locally."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON record store.
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "posadmin.json",
        global = true
    )]
    pub store: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the known entity families.
    Entities,

    /// List one entity's records.
    List(EntityArgs),

    /// Add a record built from --set field=value pairs.
    Add(FormArgs),

    /// Validate a candidate form without saving anything.
    Validate(FormArgs),

    /// Delete a record by natural key.
    Delete(DeleteArgs),

    /// Show the configuration revisions applicable as of a date.
    Resolve(ResolveArgs),

    /// Check a candidate business period for schedule conflicts.
    CheckPeriod(CheckPeriodArgs),

    /// Export one entity's records to CSV.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct EntityArgs {
    /// Entity family, e.g. set-menu or business-period.
    #[arg(value_name = "ENTITY")]
    pub entity: String,
}

#[derive(Parser)]
pub struct FormArgs {
    /// Entity family, e.g. set-menu or business-period.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Form fields as field=value; repeat per field.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field_value)]
    pub set: Vec<(String, String)>,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Entity family.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Natural key of the record to delete.
    #[arg(long = "key", value_name = "KEY")]
    pub key: String,

    /// Confirm the deletion; without this flag nothing is removed.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Entity family; must be a dated (versioned) entity.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Evaluation date, YYYY-MM-DD.
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: NaiveDate,

    /// Restrict the output to one code.
    #[arg(long = "code", value_name = "CODE")]
    pub code: Option<String>,
}

#[derive(Parser)]
pub struct CheckPeriodArgs {
    /// Outlet the candidate window belongs to.
    #[arg(long = "outlet", value_name = "CODE")]
    pub outlet: String,

    /// Candidate period code, for the diagnostics output.
    #[arg(long = "period", value_name = "CODE", default_value = "NEW")]
    pub period: String,

    /// Active weekdays, e.g. Mon,Tue,Fri.
    #[arg(long = "days", value_name = "DAYS")]
    pub days: String,

    /// Window start, HH:MM.
    #[arg(long = "start", value_name = "TIME")]
    pub start: String,

    /// Window end, HH:MM.
    #[arg(long = "end", value_name = "TIME")]
    pub end: String,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Entity family.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

fn parse_field_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected FIELD=VALUE, got {raw:?}"))
}
