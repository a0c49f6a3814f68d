//! Pure engines for temporal configuration.
//!
//! Two concerns live here: picking which revision of a dated configuration
//! entity applies as of an evaluation date (`effective`), and deciding
//! whether recurring outlet time windows collide (`overlap`). Both are pure
//! functions over their inputs; neither reads a clock, touches storage, or
//! keeps state between calls.

pub mod effective;
pub mod overlap;

pub use effective::{resolve, resolve_all};
pub use overlap::{conflicts, find_conflicts, overlaps};
