//! Schedule-conflict detection for recurring outlet time windows.

use posadmin_model::BusinessPeriod;

/// True when two periods collide: same outlet, at least one shared day, and
/// overlapping half-open `[start, end)` intervals.
///
/// Strict `<` on both bounds means a window ending exactly when another
/// starts (06:00-11:00 next to 11:00-15:00) is not a collision. Inputs are
/// assumed to satisfy `start < end`; [`BusinessPeriod`] construction
/// guarantees it.
pub fn overlaps(a: &BusinessPeriod, b: &BusinessPeriod) -> bool {
    a.outlet_code == b.outlet_code
        && a.days.intersects(b.days)
        && a.start_time < b.end_time
        && b.start_time < a.end_time
}

/// Does `candidate` collide with any existing period?
///
/// `exclude` skips one index of `existing`: the record being edited in
/// place, which must not conflict with itself.
pub fn conflicts(
    existing: &[BusinessPeriod],
    candidate: &BusinessPeriod,
    exclude: Option<usize>,
) -> bool {
    existing
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude)
        .any(|(_, period)| overlaps(period, candidate))
}

/// The offending periods, for diagnostics.
pub fn find_conflicts<'a>(
    existing: &'a [BusinessPeriod],
    candidate: &BusinessPeriod,
    exclude: Option<usize>,
) -> Vec<&'a BusinessPeriod> {
    existing
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude)
        .filter(|(_, period)| overlaps(period, candidate))
        .map(|(_, period)| period)
        .collect()
}
