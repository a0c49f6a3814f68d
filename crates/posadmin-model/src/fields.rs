//! Field names shared between schemas, typed views, and the validation
//! pipeline. Entity-specific fields live in the schema catalog.

pub const CODE: &str = "code";
pub const EFFECTIVE_FROM: &str = "effective_from";

pub const OUTLET_CODE: &str = "outlet_code";
pub const PERIOD_CODE: &str = "period_code";
pub const DAYS: &str = "days";
pub const START_TIME: &str = "start_time";
pub const END_TIME: &str = "end_time";
pub const IS_ACTIVE: &str = "is_active";

pub const DATE_FROM: &str = "date_from";
pub const DATE_TO: &str = "date_to";
