//! Effective-date resolution over dated configuration revisions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use posadmin_model::VersionedEntry;

/// Pick the applicable revision as of `as_of`.
///
/// Entries dated after `as_of` are ignored. Among the rest, the greatest
/// `effective_from` wins; revisions dated the same day are broken by the
/// greater `created_at`, and a full tie goes to the later element of the
/// input. `None` means no revision applies yet; callers omit the code from
/// the applicable set rather than treating this as an error.
pub fn resolve(entries: &[VersionedEntry], as_of: NaiveDate) -> Option<&VersionedEntry> {
    best_of(entries, as_of)
}

/// Resolve every code group independently.
///
/// Builds the "currently applicable" listing: one entry per code that has at
/// least one revision in effect as of `as_of`.
pub fn resolve_all(entries: &[VersionedEntry], as_of: NaiveDate) -> BTreeMap<&str, &VersionedEntry> {
    let mut groups: BTreeMap<&str, Vec<&VersionedEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.code.as_str()).or_default().push(entry);
    }

    let mut applicable = BTreeMap::new();
    for (code, group) in groups {
        if let Some(entry) = best_of(group, as_of) {
            applicable.insert(code, entry);
        }
    }
    applicable
}

fn best_of<'a, I>(entries: I, as_of: NaiveDate) -> Option<&'a VersionedEntry>
where
    I: IntoIterator<Item = &'a VersionedEntry>,
{
    let mut best: Option<&VersionedEntry> = None;
    for entry in entries {
        if entry.effective_from > as_of {
            continue;
        }
        // `>=` keeps the later input element when both keys tie.
        let newer = best.is_none_or(|current| {
            (entry.effective_from, entry.created_at)
                >= (current.effective_from, current.created_at)
        });
        if newer {
            best = Some(entry);
        }
    }
    best
}
