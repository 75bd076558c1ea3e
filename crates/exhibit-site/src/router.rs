//! Section routing for requested paths.
//!
//! A requested path resolves to one content record plus the section of the
//! example page it asks for: the primary content, the API reference, or the
//! design notes. All three share a root identifier.
//!
//! # Matching
//!
//! Matching is segment-aligned, so `/en/examples/bar` never matches a request
//! for `/en/examples/barchart`:
//!
//! - Primary requests match records whose segments form the tail of the
//!   request (an exact match, or the same path under a mount prefix).
//! - Companion requests (`…/API`, `…/design`) match records whose segments
//!   appear anywhere inside the request, which covers both the companion
//!   record itself and its primary record.
//!
//! When several records match, the one with the most segments wins and ties
//! go to input order.

use serde::Serialize;

use crate::path_key::{self, contains_segments, ends_with_segments, locale_relative_key};
use crate::record::{ContentRecord, DemoRecord, RecordKind};

/// Trailing path of the gallery page.
pub const GALLERY_SUFFIX: &str = "/examples/gallery";

/// Result of routing a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSection<'a> {
    /// Matched record.
    pub record: &'a ContentRecord,
    /// Section the request asks for.
    pub section_kind: RecordKind,
    /// Identifier shared by the primary record and its companions.
    pub root_identifier: &'a str,
}

/// Strip a single trailing slash.
#[must_use]
pub fn normalize_request(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Whether a request targets the gallery page.
#[must_use]
pub fn is_gallery_request(path: &str) -> bool {
    normalize_request(path).ends_with(GALLERY_SUFFIX)
}

/// Resolve the record and section for a requested path.
///
/// Returns `None` when no record matches; callers render nothing.
#[must_use]
pub fn resolve_active_section<'a>(
    requested_path: &str,
    records: &'a [ContentRecord],
) -> Option<ActiveSection<'a>> {
    let path = normalize_request(requested_path);
    let section_kind = RecordKind::classify(path);

    let candidates: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| {
            if section_kind.is_companion() {
                contains_segments(path, record.identifier())
            } else {
                ends_with_segments(path, record.identifier())
            }
        })
        .collect();

    let Some(record) = candidates.iter().copied().reduce(|best, candidate| {
        if specificity(candidate) > specificity(best) {
            candidate
        } else {
            best
        }
    }) else {
        tracing::debug!(path = %path, "No record matches requested path");
        return None;
    };

    let top = specificity(record);
    let ties = candidates
        .iter()
        .filter(|candidate| specificity(candidate) == top)
        .count();
    if ties > 1 {
        tracing::debug!(
            path = %path,
            ties,
            chosen = %record.identifier(),
            "Several records match requested path equally"
        );
    }

    let root_identifier = if section_kind.is_companion() {
        record.root_identifier()
    } else {
        record.identifier()
    };

    Some(ActiveSection {
        record,
        section_kind,
        root_identifier,
    })
}

fn specificity(record: &ContentRecord) -> usize {
    path_key::segments(record.identifier()).count()
}

/// Everything shown on one example page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTabs<'a> {
    /// Primary record (live example and description).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<&'a ContentRecord>,
    /// API reference companion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<&'a ContentRecord>,
    /// Design notes companion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<&'a ContentRecord>,
    /// Demos of this example, in input order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub demos: Vec<&'a DemoRecord>,
}

/// Collect the primary record, companions and demos sharing `root_identifier`.
#[must_use]
pub fn section_tabs<'a>(
    root_identifier: &str,
    records: &'a [ContentRecord],
    demos: &'a [DemoRecord],
) -> SectionTabs<'a> {
    let mut tabs = SectionTabs::default();
    for record in records
        .iter()
        .filter(|record| record.root_identifier() == root_identifier)
    {
        let slot = match record.kind() {
            RecordKind::Primary => &mut tabs.primary,
            RecordKind::ApiCompanion => &mut tabs.api,
            RecordKind::DesignCompanion => &mut tabs.design,
        };
        if slot.is_none() {
            *slot = Some(record);
        }
    }

    let example_key = locale_relative_key(root_identifier);
    if !example_key.is_empty() {
        let demo_prefix = format!("{example_key}/demo/");
        tabs.demos = demos
            .iter()
            .filter(|demo| demo.relative_path.starts_with(&demo_prefix))
            .collect();
    }

    tabs
}
