//! Built-in schemas for the admin entity families.

use crate::fields;
use crate::schema::{EntityKind, FieldSpec, RecordSchema};

/// Dated outlet-level configuration (service charge, tax, address).
/// Revisions share a code and are resolved by effective date.
pub fn outlet_setting() -> RecordSchema {
    RecordSchema::new(
        "outlet-setting",
        EntityKind::Versioned,
        fields::CODE,
        vec![
            FieldSpec::code(fields::CODE).required().max_length(10),
            FieldSpec::date(fields::EFFECTIVE_FROM).required(),
            FieldSpec::text("outlet_name").required().max_length(60),
            FieldSpec::decimal("service_charge_pct").non_negative(),
            FieldSpec::decimal("tax_pct").non_negative(),
            FieldSpec::text("address").max_length(120),
        ],
    )
}

/// Recurring outlet time windows (breakfast, lunch, dinner).
pub fn business_period() -> RecordSchema {
    RecordSchema::new(
        "business-period",
        EntityKind::Schedule,
        fields::PERIOD_CODE,
        vec![
            FieldSpec::code(fields::OUTLET_CODE).required().max_length(10),
            FieldSpec::code(fields::PERIOD_CODE).required().max_length(10),
            FieldSpec::text("period_name").max_length(40),
            FieldSpec::day_list(fields::DAYS).required(),
            FieldSpec::time(fields::START_TIME).required(),
            FieldSpec::time(fields::END_TIME).required(),
            FieldSpec::flag(fields::IS_ACTIVE),
        ],
    )
    .with_time_range(fields::START_TIME, fields::END_TIME)
}

pub fn set_menu() -> RecordSchema {
    RecordSchema::new(
        "set-menu",
        EntityKind::Plain,
        "set_menu_code",
        vec![
            FieldSpec::code("set_menu_code").required().max_length(10),
            FieldSpec::text("set_menu_name").required().max_length(60),
            FieldSpec::decimal("price").required().non_negative(),
            FieldSpec::date(fields::DATE_FROM),
            FieldSpec::date(fields::DATE_TO),
            FieldSpec::flag(fields::IS_ACTIVE),
        ],
    )
    .with_date_range(fields::DATE_FROM, fields::DATE_TO)
}

pub fn menu_item() -> RecordSchema {
    RecordSchema::new(
        "menu-item",
        EntityKind::Plain,
        "item_code",
        vec![
            FieldSpec::code("item_code").required().max_length(12),
            FieldSpec::text("item_name").required().max_length(60),
            FieldSpec::decimal("price").non_negative(),
            FieldSpec::code("uom_code").max_length(8),
        ],
    )
}

pub fn credit_card() -> RecordSchema {
    RecordSchema::new(
        "credit-card",
        EntityKind::Plain,
        "card_code",
        vec![
            FieldSpec::code("card_code").required().max_length(8),
            FieldSpec::text("card_name").required().max_length(40),
            FieldSpec::decimal("commission_pct").non_negative(),
            FieldSpec::date(fields::DATE_FROM),
            FieldSpec::date(fields::DATE_TO),
        ],
    )
    .with_date_range(fields::DATE_FROM, fields::DATE_TO)
}

pub fn uom() -> RecordSchema {
    RecordSchema::new(
        "uom",
        EntityKind::Plain,
        "uom_code",
        vec![
            FieldSpec::code("uom_code").required().max_length(8),
            FieldSpec::text("uom_name").required().max_length(40),
            FieldSpec::decimal("decimal_places").non_negative(),
        ],
    )
}

pub fn user_group() -> RecordSchema {
    RecordSchema::new(
        "user-group",
        EntityKind::Plain,
        "group_code",
        vec![
            FieldSpec::code("group_code").required().max_length(10),
            FieldSpec::text("group_name").required().max_length(40),
            FieldSpec::text("description").max_length(120),
        ],
    )
}

/// Every built-in schema.
pub fn all() -> Vec<RecordSchema> {
    vec![
        outlet_setting(),
        business_period(),
        set_menu(),
        menu_item(),
        credit_card(),
        uom(),
        user_group(),
    ]
}

/// Look a schema up by entity name, case-insensitively.
pub fn by_entity(name: &str) -> Option<RecordSchema> {
    let name = name.trim();
    all()
        .into_iter()
        .find(|schema| schema.entity.eq_ignore_ascii_case(name))
}
