//! CSV export of one entity's records.

use std::path::Path;

use anyhow::{Context, Result};
use posadmin_model::{RecordSchema, StoredRecord};

/// Write the records as CSV: identity columns first, then the schema's
/// fields in declaration order. Returns the number of rows written.
pub fn export_csv(path: &Path, schema: &RecordSchema, records: &[StoredRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    let mut header = vec!["id", "created_at", "updated_at"];
    header.extend(schema.fields.iter().map(|spec| spec.name));
    writer.write_record(&header).context("write header")?;

    for record in records {
        let mut row = vec![
            record.id.to_hex(),
            record.created_at.to_rfc3339(),
            record.updated_at.to_rfc3339(),
        ];
        for spec in &schema.fields {
            row.push(record.values.get(spec.name).unwrap_or_default().to_string());
        }
        writer.write_record(&row).context("write row")?;
    }

    writer.flush().context("flush csv")?;
    Ok(records.len())
}
