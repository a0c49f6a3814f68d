//! Pipeline behavior across the check families.

use chrono::{TimeZone, Utc};
use posadmin_model::{FormValues, RecordId, StoredRecord, catalog, fields};
use posadmin_validate::{TIME_OVERLAP_KEY, ValidationContext, validate};

fn stored(entity: &str, pairs: &[(&str, &str)]) -> StoredRecord {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let values = FormValues::from_pairs(pairs.iter().copied());
    let key = pairs.first().map(|(_, value)| *value).unwrap_or_default();
    StoredRecord {
        id: RecordId::derive(entity, key, created),
        created_at: created,
        updated_at: created,
        values,
    }
}

fn set_menu_form() -> FormValues {
    FormValues::from_pairs([
        ("set_menu_code", "LUNCH"),
        ("set_menu_name", "Weekday Lunch"),
        ("price", "28.50"),
        (fields::DATE_FROM, "2024-01-01"),
        (fields::DATE_TO, "2024-12-31"),
    ])
}

fn period_form(outlet: &str, code: &str, days: &str, start: &str, end: &str) -> FormValues {
    FormValues::from_pairs([
        (fields::OUTLET_CODE, outlet),
        (fields::PERIOD_CODE, code),
        (fields::DAYS, days),
        (fields::START_TIME, start),
        (fields::END_TIME, end),
    ])
}

#[test]
fn a_complete_record_passes() {
    let report = validate(
        &catalog::set_menu(),
        &set_menu_form(),
        &ValidationContext::default(),
    );
    assert!(report.is_empty(), "unexpected findings: {:?}", report.issues());
}

#[test]
fn missing_required_fields_are_each_reported() {
    let mut form = set_menu_form();
    form.set("set_menu_code", "   ");
    form.remove("price");

    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    let errors = report.field_errors();
    assert_eq!(errors["set_menu_code"], "set_menu_code is required");
    assert!(errors.contains_key("price"));
    assert!(!errors.contains_key("set_menu_name"));
}

#[test]
fn format_violations_do_not_stop_later_checks() {
    let mut form = set_menu_form();
    form.set("set_menu_code", "LU-01");
    form.set("price", "-5");

    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    let errors = report.field_errors();
    // Both findings surface in one pass.
    assert!(errors["set_menu_code"].contains("letters and digits"));
    assert!(errors["price"].contains("negative"));
}

#[test]
fn length_limits_count_characters() {
    let mut form = set_menu_form();
    form.set("set_menu_name", "x".repeat(61));
    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    assert!(report.field_errors()["set_menu_name"].contains("maximum length 60"));
}

#[test]
fn non_numeric_price_is_rejected() {
    let mut form = set_menu_form();
    form.set("price", "abc");
    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    assert_eq!(report.field_errors()["price"], "price must be a number");
}

#[test]
fn date_pair_must_be_strictly_ascending() {
    let mut form = set_menu_form();
    form.set(fields::DATE_FROM, "2024-12-31");
    form.set(fields::DATE_TO, "2024-01-01");
    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    assert!(report.field_errors().contains_key(fields::DATE_TO));

    form.set(fields::DATE_FROM, "2024-06-01");
    form.set(fields::DATE_TO, "2024-06-01");
    let report = validate(&catalog::set_menu(), &form, &ValidationContext::default());
    assert!(report.field_errors().contains_key(fields::DATE_TO));
}

#[test]
fn duplicate_keys_are_found_case_insensitively() {
    let existing = vec![stored("set-menu", &[("set_menu_code", "LUNCH")])];
    let ctx = ValidationContext {
        existing: &existing,
        selected: None,
    };

    let mut form = set_menu_form();
    form.set("set_menu_code", "lunch");
    let report = validate(&catalog::set_menu(), &form, &ctx);
    assert!(
        report.field_errors()["set_menu_code"].contains("already in use"),
        "got: {:?}",
        report.field_errors()
    );
}

#[test]
fn editing_a_record_in_place_never_collides_with_itself() {
    let existing = vec![
        stored("set-menu", &[("set_menu_code", "LUNCH")]),
        stored("set-menu", &[("set_menu_code", "DINNER")]),
    ];

    // Re-saving record 0 under its own key is fine...
    let ctx = ValidationContext {
        existing: &existing,
        selected: Some(0),
    };
    let report = validate(&catalog::set_menu(), &set_menu_form(), &ctx);
    assert!(report.is_empty(), "unexpected findings: {:?}", report.issues());

    // ...but renaming it onto another record's key is not.
    let mut form = set_menu_form();
    form.set("set_menu_code", "DINNER");
    let report = validate(&catalog::set_menu(), &form, &ctx);
    assert!(report.field_errors().contains_key("set_menu_code"));
}

#[test]
fn versioned_entities_allow_new_revisions_but_not_same_day_ones() {
    let existing = vec![stored(
        "outlet-setting",
        &[
            (fields::CODE, "MAIN"),
            (fields::EFFECTIVE_FROM, "2024-01-01"),
            ("outlet_name", "Main Floor"),
        ],
    )];
    let ctx = ValidationContext {
        existing: &existing,
        selected: None,
    };

    let mut revision = FormValues::from_pairs([
        (fields::CODE, "main"),
        (fields::EFFECTIVE_FROM, "2024-06-01"),
        ("outlet_name", "Main Floor"),
    ]);
    let report = validate(&catalog::outlet_setting(), &revision, &ctx);
    assert!(report.is_empty(), "unexpected findings: {:?}", report.issues());

    revision.set(fields::EFFECTIVE_FROM, "2024-01-01");
    let report = validate(&catalog::outlet_setting(), &revision, &ctx);
    assert!(report.field_errors().contains_key(fields::CODE));
}

#[test]
fn overlapping_periods_report_under_the_pipeline_key() {
    let existing = vec![stored(
        "business-period",
        &[
            (fields::PERIOD_CODE, "AM"),
            (fields::OUTLET_CODE, "A"),
            (fields::DAYS, "Mon,Tue"),
            (fields::START_TIME, "09:00"),
            (fields::END_TIME, "12:00"),
        ],
    )];
    let ctx = ValidationContext {
        existing: &existing,
        selected: None,
    };

    let form = period_form("A", "MID", "Tue,Wed", "11:00", "13:00");
    let report = validate(&catalog::business_period(), &form, &ctx);
    let errors = report.field_errors();
    assert!(errors[TIME_OVERLAP_KEY].contains("AM"));
    // The conflict is a property of the pair, not of either input field.
    assert!(!errors.contains_key(fields::START_TIME));
}

#[test]
fn adjacent_or_day_disjoint_periods_pass() {
    let existing = vec![stored(
        "business-period",
        &[
            (fields::PERIOD_CODE, "AM"),
            (fields::OUTLET_CODE, "A"),
            (fields::DAYS, "Mon,Tue"),
            (fields::START_TIME, "09:00"),
            (fields::END_TIME, "12:00"),
        ],
    )];
    let ctx = ValidationContext {
        existing: &existing,
        selected: None,
    };

    let adjacent = period_form("A", "PM", "Mon", "12:00", "15:00");
    let report = validate(&catalog::business_period(), &adjacent, &ctx);
    assert!(report.is_empty(), "unexpected findings: {:?}", report.issues());

    let other_day = period_form("A", "WED", "Wed", "09:00", "12:00");
    let report = validate(&catalog::business_period(), &other_day, &ctx);
    assert!(report.is_empty(), "unexpected findings: {:?}", report.issues());
}

#[test]
fn inverted_time_windows_fail_before_the_overlap_check() {
    let form = period_form("A", "BAD", "Mon", "15:00", "09:00");
    let report = validate(
        &catalog::business_period(),
        &form,
        &ValidationContext::default(),
    );
    let errors = report.field_errors();
    assert!(errors.contains_key(fields::END_TIME));
    assert!(!errors.contains_key(TIME_OVERLAP_KEY));
}

#[test]
fn malformed_day_lists_and_times_are_flagged() {
    let form = period_form("A", "BRK", "Mon,Funday", "six", "11:00");
    let report = validate(
        &catalog::business_period(),
        &form,
        &ValidationContext::default(),
    );
    let errors = report.field_errors();
    assert!(errors.contains_key(fields::DAYS));
    assert!(errors.contains_key(fields::START_TIME));
}
