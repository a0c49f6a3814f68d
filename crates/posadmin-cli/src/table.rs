//! Terminal table rendering.

use std::collections::BTreeMap;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use posadmin_model::{BusinessPeriod, RecordSchema, StoredRecord, VersionedEntry};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// One row per record: index, key, then the remaining schema fields.
pub fn records_table(schema: &RecordSchema, records: &[StoredRecord]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);

    let other_fields: Vec<&str> = schema
        .fields
        .iter()
        .map(|spec| spec.name)
        .filter(|name| *name != schema.key_field)
        .collect();

    let mut header = vec![header_cell("#"), header_cell(schema.key_field)];
    header.extend(other_fields.iter().map(|name| header_cell(name)));
    table.set_header(header);

    for (index, record) in records.iter().enumerate() {
        let mut row = vec![
            index.to_string(),
            record.field(schema.key_field).unwrap_or("").to_string(),
        ];
        row.extend(
            other_fields
                .iter()
                .map(|name| record.values.get(name).unwrap_or_default().to_string()),
        );
        table.add_row(row);
    }
    table
}

pub fn errors_table(errors: &BTreeMap<&'static str, String>) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    for (field, message) in errors {
        table.add_row(vec![(*field).to_string(), message.clone()]);
    }
    table
}

pub fn conflicts_table(conflicts: &[&BusinessPeriod]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Period"),
        header_cell("Days"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    for period in conflicts {
        table.add_row(vec![
            period.period_code.to_string(),
            period.days.to_string(),
            period.start_time.format("%H:%M").to_string(),
            period.end_time.format("%H:%M").to_string(),
        ]);
    }
    table
}

pub fn applicable_table(entries: &[VersionedEntry]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Effective From"),
        header_cell("Details"),
    ]);
    for entry in entries {
        let details = entry
            .payload
            .as_object()
            .map(|payload| {
                payload
                    .iter()
                    .map(|(field, value)| {
                        format!("{field}={}", value.as_str().unwrap_or_default())
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        table.add_row(vec![
            entry.code.to_string(),
            entry.effective_from.to_string(),
            details,
        ]);
    }
    table
}
