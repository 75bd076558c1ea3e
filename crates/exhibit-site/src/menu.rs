//! Navigation menu building.
//!
//! Turns a flat list of [`ContentRecord`]s into a two-level menu:
//!
//! - Records are bucketed by group key (see [`RecordGroups`]).
//! - Only groups under the active locale (`/{locale}/…`) are kept.
//! - Groups are ordered with [`sort_group_keys`].
//! - Shallow groups (depth ≤ 3, e.g. `/en/examples`) contribute their members
//!   as top-level items; deeper groups become collapsible sub-groups.
//!
//! Companion records (API reference, design notes) never become menu items.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::grouping::RecordGroups;
use crate::icons::IconResolver;
use crate::order::sort_group_keys;
use crate::path_key::{capitalize, is_path_prefix, locale_relative_key, path_depth};
use crate::record::{ContentRecord, CuratedEntry};

/// Groups at or above this depth are flattened into the top level.
pub const FLAT_GROUP_DEPTH: usize = 3;

/// Selectable menu leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Menu key (the record identifier).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Resolved icon reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Identifier the item links to.
    pub target_identifier: String,
}

/// Collapsible sub-group of menu items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    /// Group key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Resolved icon reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Items in display order.
    pub children: Vec<MenuItem>,
}

/// Top-level menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Item rendered directly at the top level.
    Item(MenuItem),
    /// Sub-group with its own items.
    Group(MenuGroup),
}

/// Navigation menu for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Entries in display order.
    pub entries: Vec<MenuEntry>,
}

/// Items surrounding a menu item in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors<'a> {
    /// Previous item.
    pub prev: Option<&'a MenuItem>,
    /// Next item.
    pub next: Option<&'a MenuItem>,
}

impl Menu {
    /// All items in display order, sub-group children included.
    pub fn leaves(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().flat_map(|entry| match entry {
            MenuEntry::Item(item) => std::slice::from_ref(item),
            MenuEntry::Group(group) => group.children.as_slice(),
        })
    }

    /// Previous and next items around `key`.
    ///
    /// Unknown keys have no neighbors.
    #[must_use]
    pub fn neighbors(&self, key: &str) -> Neighbors<'_> {
        let leaves: Vec<&MenuItem> = self.leaves().collect();
        let Some(idx) = leaves.iter().position(|item| item.key == key) else {
            return Neighbors::default();
        };
        Neighbors {
            prev: idx.checked_sub(1).map(|i| leaves[i]),
            next: leaves.get(idx + 1).copied(),
        }
    }

    /// Whether the menu has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the navigation menu for a locale.
///
/// # Arguments
///
/// * `records` - All content records, any locale
/// * `curated` - Curated example list (ordering and sub-group titles)
/// * `locale` - Active locale code (e.g. `en`)
/// * `icons` - Resolver applied to item and sub-group icons
#[must_use]
pub fn build_menu(
    records: &[ContentRecord],
    curated: &[CuratedEntry],
    locale: &str,
    icons: &dyn IconResolver,
) -> Menu {
    let groups = RecordGroups::from_records(records);
    let locale_prefix = format!("/{locale}/");
    let keys = sort_group_keys(
        groups.keys().filter(|key| key.starts_with(&locale_prefix)),
        curated,
        &groups,
    );

    let mut entries = Vec::new();
    for key in keys {
        let items = leaf_items(groups.get(key).unwrap_or_default(), locale, icons);

        if path_depth(key) <= FLAT_GROUP_DEPTH {
            entries.extend(items.into_iter().map(MenuEntry::Item));
            continue;
        }

        if items.is_empty() {
            tracing::debug!(group = %key, "Skipping sub-group without menu items");
            continue;
        }

        let relative_key = locale_relative_key(key);
        let curated_entry = curated.iter().find(|entry| entry.slug == relative_key);
        let fallback = if relative_key.is_empty() {
            key
        } else {
            relative_key.as_str()
        };
        let label = curated_entry
            .and_then(|entry| entry.title_for(locale))
            .unwrap_or(fallback);
        let icon = curated_entry
            .and_then(|entry| entry.icon.as_deref())
            .and_then(|name| icons.resolve(name));

        entries.push(MenuEntry::Group(MenuGroup {
            key: key.to_owned(),
            label: capitalize(label),
            icon,
            children: items,
        }));
    }

    Menu { entries }
}

/// Menu items for a group's members: companions dropped, sorted by `order`.
fn leaf_items(
    members: &[&ContentRecord],
    locale: &str,
    icons: &dyn IconResolver,
) -> Vec<MenuItem> {
    let mut leaves: Vec<&ContentRecord> = members
        .iter()
        .copied()
        .filter(|record| !record.kind().is_companion())
        .collect();
    leaves.sort_by_key(|record| record.order.unwrap_or(0));

    leaves
        .into_iter()
        .map(|record| MenuItem {
            key: record.identifier().to_owned(),
            label: record.label(locale),
            icon: record.icon.as_deref().and_then(|name| icons.resolve(name)),
            target_identifier: record.identifier().to_owned(),
        })
        .collect()
}

/// Group keys to show expanded for the active identifier.
///
/// Every non-empty group key that is an ancestor of `active_identifier`.
/// Derived from the identifier alone, so it is recomputed on each navigation.
#[must_use]
pub fn open_keys(records: &[ContentRecord], active_identifier: &str) -> BTreeSet<String> {
    RecordGroups::from_records(records)
        .keys()
        .filter(|key| !key.is_empty() && is_path_prefix(key, active_identifier))
        .map(str::to_owned)
        .collect()
}
