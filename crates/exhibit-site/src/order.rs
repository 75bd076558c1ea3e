//! Display order of navigation groups.
//!
//! Two sources decide where a group lands in the menu:
//!
//! 1. The curated example list from configuration. Curated groups always sort
//!    after every other group, in curated-list order.
//! 2. The authored `order` of the first record in the group.
//!
//! Authored orders of 100 or more interleave with curated groups. That is a
//! property of the scheme, not something this module corrects.

use crate::grouping::RecordGroups;
use crate::path_key::locale_relative_key;
use crate::record::CuratedEntry;

/// Offset added to curated-list positions.
pub const CURATED_ORDER_OFFSET: i64 = 100;

/// Resolve the sort order of one group.
#[must_use]
pub fn resolve_order(group_key: &str, curated: &[CuratedEntry], groups: &RecordGroups<'_>) -> i64 {
    let key = locale_relative_key(group_key);
    if let Some(position) = curated.iter().position(|entry| entry.slug == key) {
        return i64::try_from(position)
            .map_or(i64::MAX, |position| position.saturating_add(CURATED_ORDER_OFFSET));
    }

    match groups.get(group_key) {
        Some([first, ..]) => first.order.unwrap_or(0),
        // Grouping never produces empty buckets; unknown keys land here too.
        _ => 0,
    }
}

/// Sort group keys ascending by [`resolve_order`], keeping input order on ties.
#[must_use]
pub fn sort_group_keys<'k>(
    keys: impl IntoIterator<Item = &'k str>,
    curated: &[CuratedEntry],
    groups: &RecordGroups<'_>,
) -> Vec<&'k str> {
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_by_cached_key(|key| resolve_order(key, curated, groups));
    keys
}
