//! Path key normalization.
//!
//! Identifiers are slash-delimited paths such as `/en/examples/line/basic`.
//! This module derives the keys the rest of the engine works with:
//!
//! - the navigation group key (the identifier minus its trailing segment, or
//!   minus two trailing segments for companions), and
//! - the locale-relative key (everything after the `examples` segment), which
//!   is what curated configuration refers to.
//!
//! All functions are total. Malformed identifiers degrade to empty keys.

use crate::record::RecordKind;

/// Segment that anchors locale-relative keys.
pub const EXAMPLES_SEGMENT: &str = "examples";

/// Non-empty segments of a path.
pub fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Group key of an identifier.
///
/// Companions (`…/API`, `…/design`) drop two trailing segments, everything
/// else drops one.
///
/// ```
/// use exhibit_site::normalize_group_key;
///
/// assert_eq!(normalize_group_key("/en/examples/bar/index"), "/en/examples/bar");
/// assert_eq!(normalize_group_key("/en/examples/bar/API"), "/en/examples");
/// ```
#[must_use]
pub fn normalize_group_key(identifier: &str) -> String {
    group_key(identifier, RecordKind::classify(identifier))
}

/// Group key of an identifier whose kind is already known.
pub(crate) fn group_key(identifier: &str, kind: RecordKind) -> String {
    let dropped = if kind.is_companion() { 2 } else { 1 };
    let pieces: Vec<&str> = identifier.split('/').collect();
    pieces[..pieces.len().saturating_sub(dropped)].join("/")
}

/// Key relative to the `examples` segment (e.g. `line/basic`).
///
/// Returns an empty string when the path has no `examples` segment.
#[must_use]
pub fn locale_relative_key(identifier: &str) -> String {
    let mut pieces = identifier.split('/');
    if !pieces.any(|piece| piece == EXAMPLES_SEGMENT) {
        return String::new();
    }
    pieces
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Number of `/`-separated pieces, counting the empty piece before a leading slash.
///
/// `/en/examples` has depth 3, `/en/examples/line` has depth 4.
#[must_use]
pub fn path_depth(key: &str) -> usize {
    key.split('/').count()
}

/// Whether `prefix` is an ancestor-or-self of `path`, compared segment by segment.
#[must_use]
pub fn is_path_prefix(prefix: &str, path: &str) -> bool {
    let mut path_segments = segments(path);
    segments(prefix).all(|segment| path_segments.next() == Some(segment))
}

/// Whether the segments of `tail` are the trailing segments of `path`.
#[must_use]
pub(crate) fn ends_with_segments(path: &str, tail: &str) -> bool {
    let mut path_segments = segments(path).rev();
    let mut tail_segments = segments(tail).rev().peekable();
    if tail_segments.peek().is_none() {
        return false;
    }
    tail_segments.all(|segment| path_segments.next() == Some(segment))
}

/// Whether the segments of `needle` occur as a contiguous run inside `path`.
#[must_use]
pub(crate) fn contains_segments(path: &str, needle: &str) -> bool {
    let path_segments: Vec<&str> = segments(path).collect();
    let needle_segments: Vec<&str> = segments(needle).collect();
    if needle_segments.is_empty() {
        return false;
    }
    path_segments
        .windows(needle_segments.len())
        .any(|window| window == needle_segments.as_slice())
}

/// Upper-case the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
