//! Command implementations. Each returns the process exit code.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{debug, info, warn};

use posadmin_cli::export::export_csv;
use posadmin_cli::store::FileRepository;
use posadmin_engine::find_conflicts;
use posadmin_model::{
    BusinessPeriod, Code, EntityKind, FormValues, RecordSchema, VersionedEntry, catalog, fields,
    parse,
};
use posadmin_session::{
    ActionMode, FormSession, ModeChange, NotificationSink, RecordRepository, RepositoryError,
    SaveOutcome,
};
use posadmin_validate::{ValidationContext, validate};

use crate::cli::{
    CheckPeriodArgs, DeleteArgs, EntityArgs, ExportArgs, FormArgs, ResolveArgs,
};
use crate::table;

/// Routes session notifications into the log stream.
struct LogSink;

impl NotificationSink for LogSink {
    fn selection_required(&mut self, action: ActionMode, message: &str) {
        warn!(action = %action, "{message}");
    }

    fn validation_failed(&mut self, errors: &BTreeMap<&'static str, String>) {
        for (field, message) in errors {
            debug!(field = %field, "{message}");
        }
    }

    fn commit_succeeded(&mut self, outcome: &SaveOutcome) {
        debug!(?outcome, "committed");
    }

    fn commit_failed(&mut self, error: &RepositoryError) {
        warn!(error = %error, "commit failed");
    }
}

fn schema_for(entity: &str) -> Result<RecordSchema> {
    catalog::by_entity(entity)
        .with_context(|| format!("unknown entity {entity:?}; run `posadmin entities`"))
}

fn kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Plain => "plain",
        EntityKind::Versioned => "dated revisions",
        EntityKind::Schedule => "recurring windows",
    }
}

pub fn run_entities() -> Result<i32> {
    let mut table = comfy_table::Table::new();
    table::apply_table_style(&mut table);
    table.set_header(vec!["Entity", "Kind", "Key Field"]);
    for schema in catalog::all() {
        table.add_row(vec![schema.entity, kind_label(schema.kind), schema.key_field]);
    }
    println!("{table}");
    Ok(0)
}

pub fn run_list(store: &Path, args: &EntityArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    let repo = FileRepository::new(store, &schema);
    let records = repo.list()?;
    info!(entity = schema.entity, count = records.len(), "listed records");
    println!("{}", table::records_table(&schema, &records));
    Ok(0)
}

pub fn run_add(store: &Path, args: &FormArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    let repo = FileRepository::new(store, &schema);
    let mut session = FormSession::new(schema, repo, LogSink)?;
    for (field, value) in &args.set {
        session.set_field(field, value.clone())?;
    }

    match session.save(Utc::now())? {
        SaveOutcome::Created(id) => {
            println!("created {} record {id}", args.entity);
            Ok(0)
        }
        SaveOutcome::Rejected(report) => {
            println!("{}", table::errors_table(&report.field_errors()));
            Ok(1)
        }
        outcome => bail!("unexpected save outcome: {outcome:?}"),
    }
}

pub fn run_validate(store: &Path, args: &FormArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    let repo = FileRepository::new(store, &schema);
    let existing = repo.list()?;

    let mut form = FormValues::new();
    for (field, value) in &args.set {
        form.set(field.clone(), value.clone());
    }

    let ctx = ValidationContext {
        existing: &existing,
        selected: None,
    };
    let report = validate(&schema, &form, &ctx);
    if report.is_empty() {
        println!("valid {} record", args.entity);
        return Ok(0);
    }
    println!("{}", table::errors_table(&report.field_errors()));
    Ok(1)
}

pub fn run_delete(store: &Path, args: &DeleteArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    let repo = FileRepository::new(store, &schema);
    let mut session = FormSession::new(schema, repo, LogSink)?;

    let key_field = session.schema().key_field;
    let index = session
        .records()
        .iter()
        .position(|record| {
            record
                .field(key_field)
                .is_some_and(|key| key.eq_ignore_ascii_case(&args.key))
        })
        .with_context(|| format!("no {} record with {key_field} {:?}", args.entity, args.key))?;

    session.select(index)?;
    if session.set_action(ActionMode::Delete) != ModeChange::Entered {
        bail!("could not enter delete mode");
    }

    // `save` in Delete mode only asks for confirmation; nothing is removed
    // until the caller confirms.
    match session.save(Utc::now())? {
        SaveOutcome::ConfirmDelete => {}
        outcome => bail!("unexpected save outcome: {outcome:?}"),
    }
    if !args.yes {
        println!(
            "would delete {} record {:?}; re-run with --yes to confirm",
            args.entity, args.key
        );
        return Ok(1);
    }

    match session.delete_selected()? {
        SaveOutcome::Deleted(id) => {
            println!("deleted {} record {id}", args.entity);
            Ok(0)
        }
        outcome => bail!("unexpected delete outcome: {outcome:?}"),
    }
}

pub fn run_resolve(store: &Path, args: &ResolveArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    if schema.kind != EntityKind::Versioned {
        bail!("{} has no dated revisions to resolve", args.entity);
    }
    let repo = FileRepository::new(store, &schema);
    let records = repo.list()?;

    let mut entries = Vec::new();
    for record in &records {
        match VersionedEntry::from_record(record) {
            Ok(entry) => entries.push(entry),
            Err(error) => warn!(id = %record.id, error = %error, "skipping malformed record"),
        }
    }

    let applicable = posadmin_engine::resolve_all(&entries, args.as_of);
    let selected: Vec<VersionedEntry> = match &args.code {
        Some(code) => applicable
            .values()
            .filter(|entry| entry.code.as_str().eq_ignore_ascii_case(code))
            .map(|entry| (*entry).clone())
            .collect(),
        None => applicable.values().map(|entry| (*entry).clone()).collect(),
    };

    if selected.is_empty() {
        println!("no applicable configuration as of {}", args.as_of);
        return Ok(1);
    }
    println!("{}", table::applicable_table(&selected));
    Ok(0)
}

pub fn run_check_period(store: &Path, args: &CheckPeriodArgs) -> Result<i32> {
    let schema = catalog::business_period();
    let repo = FileRepository::new(store, &schema);
    let records = repo.list()?;

    let mut existing = Vec::new();
    for record in &records {
        match BusinessPeriod::from_values(&record.values) {
            Ok(period) => existing.push(period),
            Err(error) => warn!(id = %record.id, error = %error, "skipping malformed period"),
        }
    }

    let candidate = BusinessPeriod::new(
        Code::new(&args.outlet)?,
        Code::new(&args.period)?,
        parse::parse_days(fields::DAYS, &args.days)?,
        parse::parse_time(fields::START_TIME, &args.start)?,
        parse::parse_time(fields::END_TIME, &args.end)?,
    )?;

    let conflicts = find_conflicts(&existing, &candidate, None);
    if conflicts.is_empty() {
        println!(
            "no conflicts for outlet {} on {} {}-{}",
            candidate.outlet_code, candidate.days, args.start, args.end
        );
        return Ok(0);
    }
    println!("{}", table::conflicts_table(&conflicts));
    Ok(1)
}

pub fn run_export(store: &Path, args: &ExportArgs) -> Result<i32> {
    let schema = schema_for(&args.entity)?;
    let repo = FileRepository::new(store, &schema);
    let records = repo.list()?;
    let written = export_csv(&args.output, &schema, &records)?;
    info!(entity = schema.entity, rows = written, "exported csv");
    println!(
        "exported {written} {} record(s) to {}",
        args.entity,
        args.output.display()
    );
    Ok(0)
}
