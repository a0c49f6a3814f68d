pub mod catalog;
pub mod days;
pub mod entry;
pub mod error;
pub mod fields;
pub mod ids;
pub mod parse;
pub mod period;
pub mod record;
pub mod schema;

pub use days::DaySet;
pub use entry::VersionedEntry;
pub use error::{ModelError, Result};
pub use ids::{Code, RecordId};
pub use period::BusinessPeriod;
pub use record::{FormValues, StoredRecord};
pub use schema::{EntityKind, FieldKind, FieldSpec, RecordSchema};
