//! Conflict detection between recurring time windows.

use chrono::{NaiveTime, Weekday};
use posadmin_engine::{conflicts, find_conflicts, overlaps};
use posadmin_model::{BusinessPeriod, Code, DaySet};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn period(outlet: &str, code: &str, days: &[Weekday], start: (u32, u32), end: (u32, u32)) -> BusinessPeriod {
    BusinessPeriod::new(
        Code::new(outlet).unwrap(),
        Code::new(code).unwrap(),
        days.iter().copied().collect::<DaySet>(),
        time(start.0, start.1),
        time(end.0, end.1),
    )
    .unwrap()
}

#[test]
fn shared_day_with_overlapping_times_conflicts() {
    let existing = vec![period("A", "AM", &[Weekday::Mon, Weekday::Tue], (9, 0), (12, 0))];
    let candidate = period("A", "MID", &[Weekday::Tue, Weekday::Wed], (11, 0), (13, 0));
    assert!(conflicts(&existing, &candidate, None));
    assert_eq!(find_conflicts(&existing, &candidate, None).len(), 1);
}

#[test]
fn disjoint_days_never_conflict() {
    let existing = vec![period("A", "AM", &[Weekday::Mon, Weekday::Tue], (9, 0), (12, 0))];
    let candidate = period("A", "WED", &[Weekday::Wed], (9, 0), (12, 0));
    assert!(!conflicts(&existing, &candidate, None));
}

#[test]
fn adjacent_windows_do_not_conflict() {
    // Half-open intervals: ending at 12:00 and starting at 12:00 touch, not overlap.
    let existing = vec![period("A", "AM", &[Weekday::Mon, Weekday::Tue], (9, 0), (12, 0))];
    let candidate = period("A", "PM", &[Weekday::Mon], (12, 0), (15, 0));
    assert!(!conflicts(&existing, &candidate, None));

    let breakfast = period("A", "BRK", &[Weekday::Mon], (6, 0), (11, 0));
    let lunch = period("A", "LUN", &[Weekday::Mon], (11, 0), (15, 0));
    assert!(!overlaps(&breakfast, &lunch));
    assert!(!overlaps(&lunch, &breakfast));
}

#[test]
fn different_outlets_never_conflict() {
    let existing = vec![period("A", "AM", &[Weekday::Mon], (9, 0), (12, 0))];
    let candidate = period("B", "AM", &[Weekday::Mon], (9, 0), (12, 0));
    assert!(!conflicts(&existing, &candidate, None));
}

#[test]
fn containment_counts_as_overlap() {
    let outer = period("A", "DAY", &[Weekday::Fri], (8, 0), (20, 0));
    let inner = period("A", "TEA", &[Weekday::Fri], (15, 0), (17, 0));
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn excluding_the_edited_index_avoids_self_conflict() {
    let existing = vec![
        period("A", "AM", &[Weekday::Mon], (9, 0), (12, 0)),
        period("A", "PM", &[Weekday::Mon], (12, 0), (15, 0)),
    ];
    // Re-saving AM unchanged: without the exclusion it collides with itself.
    let candidate = existing[0].clone();
    assert!(conflicts(&existing, &candidate, None));
    assert!(!conflicts(&existing, &candidate, Some(0)));
    // The exclusion only shields the edited row.
    let widened = period("A", "AM", &[Weekday::Mon], (9, 0), (13, 0));
    assert!(conflicts(&existing, &widened, Some(0)));
}
