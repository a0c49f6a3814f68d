//! Integration tests for the model crate.

use chrono::{NaiveDate, TimeZone, Utc};
use posadmin_model::{
    Code, EntityKind, FormValues, ModelError, RecordId, StoredRecord, VersionedEntry, catalog,
    fields,
};

fn stored(values: FormValues) -> StoredRecord {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
    StoredRecord {
        id: RecordId::derive("outlet-setting", "P1", created),
        created_at: created,
        updated_at: created,
        values,
    }
}

#[test]
fn versioned_entry_parses_from_a_stored_record() {
    let record = stored(FormValues::from_pairs([
        (fields::CODE, "p1"),
        (fields::EFFECTIVE_FROM, "2024-06-01"),
        ("outlet_name", "Main Floor"),
        ("service_charge_pct", "10"),
    ]));

    let entry = VersionedEntry::from_record(&record).expect("valid entry");
    assert_eq!(entry.code, Code::new("P1").unwrap());
    assert_eq!(
        entry.effective_from,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    );
    assert_eq!(entry.created_at, record.created_at);
    assert_eq!(entry.payload["outlet_name"], "Main Floor");
    assert!(entry.payload.get(fields::CODE).is_none());
}

#[test]
fn versioned_entry_requires_code_and_effective_date() {
    let record = stored(FormValues::from_pairs([(fields::CODE, "P1")]));
    let err = VersionedEntry::from_record(&record).unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingField(fields::EFFECTIVE_FROM)
    ));

    let record = stored(FormValues::from_pairs([
        (fields::CODE, "P1"),
        (fields::EFFECTIVE_FROM, "01/06/2024"),
    ]));
    let err = VersionedEntry::from_record(&record).unwrap_err();
    assert!(matches!(err, ModelError::InvalidDate { .. }));
}

#[test]
fn stored_records_round_trip_through_json() {
    let record = stored(FormValues::from_pairs([
        (fields::CODE, "P1"),
        (fields::EFFECTIVE_FROM, "2024-06-01"),
    ]));
    let json = serde_json::to_string(&record).expect("serialize");
    assert!(json.contains(&record.id.to_hex()));
    let back: StoredRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, record);
}

#[test]
fn record_ids_are_stable_per_entity_key_and_instant() {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
    let a = RecordId::derive("set-menu", "LUNCH", created);
    let b = RecordId::derive("set-menu", "lunch ", created);
    let c = RecordId::derive("menu-item", "LUNCH", created);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.to_hex().len(), 32);
}

#[test]
fn catalog_covers_the_admin_entity_families() {
    let schemas = catalog::all();
    assert_eq!(schemas.len(), 7);

    let periods = catalog::business_period();
    assert_eq!(periods.kind, EntityKind::Schedule);
    assert_eq!(
        periods.time_range,
        Some((fields::START_TIME, fields::END_TIME))
    );
    assert!(periods.field(fields::DAYS).expect("days field").required);

    let settings = catalog::outlet_setting();
    assert_eq!(settings.kind, EntityKind::Versioned);
    assert!(settings.field(fields::EFFECTIVE_FROM).is_some());
}
