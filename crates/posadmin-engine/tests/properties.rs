//! Property tests for the resolution and overlap engines.

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use posadmin_engine::{overlaps, resolve};
use posadmin_model::days::WEEK;
use posadmin_model::{BusinessPeriod, Code, DaySet, VersionedEntry};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn day_offset(offset: u64) -> NaiveDate {
    epoch().checked_add_days(Days::new(offset)).unwrap()
}

fn entry(effective_offset: u64, created_minute: u32) -> VersionedEntry {
    VersionedEntry {
        code: Code::new("P1").unwrap(),
        effective_from: day_offset(effective_offset),
        created_at: Utc
            .with_ymd_and_hms(2022, 12, 1, created_minute / 60, created_minute % 60, 0)
            .unwrap(),
        payload: serde_json::Value::Null,
    }
}

fn day_set(mask: u8) -> DaySet {
    WEEK.iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, day)| *day)
        .collect()
}

fn minute(total: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(total / 60, total % 60, 0).unwrap()
}

fn period(outlet: &str, mask: u8, start: u32, end: u32) -> BusinessPeriod {
    BusinessPeriod::new(
        Code::new(outlet).unwrap(),
        Code::new("P").unwrap(),
        day_set(mask),
        minute(start),
        minute(end),
    )
    .unwrap()
}

prop_compose! {
    fn arb_entries()(specs in prop::collection::vec((0u64..400, 0u32..1440), 0..12)) -> Vec<VersionedEntry> {
        specs
            .into_iter()
            .map(|(effective, created)| entry(effective, created))
            .collect()
    }
}

prop_compose! {
    // start < end within one day
    fn arb_window()(start in 0u32..1439)(start in Just(start), end in (start + 1)..1440) -> (u32, u32) {
        (start, end)
    }
}

proptest! {
    #[test]
    fn resolution_never_returns_a_future_revision(
        entries in arb_entries(),
        as_of_offset in 0u64..500,
    ) {
        let as_of = day_offset(as_of_offset);
        if let Some(found) = resolve(&entries, as_of) {
            prop_assert!(found.effective_from <= as_of);
        }
    }

    #[test]
    fn resolution_finds_the_maximum_eligible_date(
        entries in arb_entries(),
        as_of_offset in 0u64..500,
    ) {
        let as_of = day_offset(as_of_offset);
        let best_eligible = entries
            .iter()
            .filter(|e| e.effective_from <= as_of)
            .map(|e| e.effective_from)
            .max();
        let found = resolve(&entries, as_of);
        prop_assert_eq!(found.map(|e| e.effective_from), best_eligible);
    }

    #[test]
    fn overlap_is_symmetric(
        mask_a in 0u8..128,
        mask_b in 0u8..128,
        window_a in arb_window(),
        window_b in arb_window(),
        same_outlet in any::<bool>(),
    ) {
        let a = period("A", mask_a, window_a.0, window_a.1);
        let b = period(if same_outlet { "A" } else { "B" }, mask_b, window_b.0, window_b.1);
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn disjoint_days_never_overlap(
        mask in 0u8..128,
        window_a in arb_window(),
        window_b in arb_window(),
    ) {
        let a = period("A", mask, window_a.0, window_a.1);
        let b = period("A", !mask & 0x7f, window_b.0, window_b.1);
        prop_assert!(!overlaps(&a, &b));
    }

    #[test]
    fn back_to_back_windows_never_overlap(
        mask in 1u8..128,
        start in 0u32..720,
        middle_len in 1u32..360,
        tail_len in 1u32..360,
    ) {
        let first = period("A", mask, start, start + middle_len);
        let second = period("A", mask, start + middle_len, start + middle_len + tail_len);
        prop_assert!(!overlaps(&first, &second));
    }
}
