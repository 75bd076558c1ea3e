//! Content records consumed by the navigation engine.
//!
//! A [`ContentRecord`] is one parsed markdown document addressed by a
//! slash-delimited identifier (e.g. `/en/examples/line/basic`). Companion
//! documents (API reference, design notes) live next to their primary record
//! under `<root>/API` and `<root>/design`.
//!
//! The companion classification is computed once, when the record is
//! constructed, and carried as a [`RecordKind`] together with the root
//! identifier. Nothing downstream inspects identifier suffixes again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::path_key;

/// Identifier suffix of API reference companions.
pub const API_SUFFIX: &str = "/API";

/// Identifier suffix of design note companions.
pub const DESIGN_SUFFIX: &str = "/design";

/// Display title: either a single string or one string per locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    /// Same title for every locale.
    Plain(String),
    /// Locale code to title.
    Localized(BTreeMap<String, String>),
}

impl Title {
    /// Resolve the title for a locale.
    ///
    /// Plain titles resolve for every locale. Localized titles resolve only
    /// when an entry for `locale` exists.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Plain(title) => Some(title),
            Self::Localized(titles) => titles.get(locale).map(String::as_str),
        }
    }
}

impl From<&str> for Title {
    fn from(title: &str) -> Self {
        Self::Plain(title.to_owned())
    }
}

impl From<String> for Title {
    fn from(title: String) -> Self {
        Self::Plain(title)
    }
}

/// What a record is, relative to the example it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// The example page itself (live demo and description).
    Primary,
    /// API reference attached to a primary record.
    ApiCompanion,
    /// Design notes attached to a primary record.
    DesignCompanion,
}

impl RecordKind {
    /// Classify an identifier or requested path by its trailing segment.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        if path.ends_with(API_SUFFIX) {
            Self::ApiCompanion
        } else if path.ends_with(DESIGN_SUFFIX) {
            Self::DesignCompanion
        } else {
            Self::Primary
        }
    }

    /// Whether this is one of the companion kinds.
    #[must_use]
    pub fn is_companion(self) -> bool {
        !matches!(self, Self::Primary)
    }

    /// Identifier suffix for companion kinds.
    #[must_use]
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Primary => None,
            Self::ApiCompanion => Some(API_SUFFIX),
            Self::DesignCompanion => Some(DESIGN_SUFFIX),
        }
    }

    /// Strip this kind's suffix from `path`, if present.
    #[must_use]
    pub fn strip_suffix(self, path: &str) -> &str {
        self.suffix()
            .and_then(|suffix| path.strip_suffix(suffix))
            .unwrap_or(path)
    }
}

/// One parsed content document.
///
/// Build with [`ContentRecord::new`] so that [`kind`](Self::kind) and
/// [`root_identifier`](Self::root_identifier) stay consistent with the
/// identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordFields", rename_all = "camelCase")]
pub struct ContentRecord {
    identifier: String,
    /// Display title.
    pub title: Title,
    /// Author-supplied sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Icon name from frontmatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    kind: RecordKind,
    root_identifier: String,
    /// Rendered or raw body. Never inspected by the engine.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw_body: String,
}

impl ContentRecord {
    /// Create a record, deriving its kind and root identifier.
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<Title>) -> Self {
        let identifier = identifier.into();
        let kind = RecordKind::classify(&identifier);
        let root_identifier = kind.strip_suffix(&identifier).to_owned();
        Self {
            identifier,
            title: title.into(),
            order: None,
            icon: None,
            kind,
            root_identifier,
            raw_body: String::new(),
        }
    }

    /// Set the author-supplied order.
    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attach the opaque body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.raw_body = body.into();
        self
    }

    /// Hierarchical identifier, unique within a content set.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Companion classification derived from the identifier.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Identifier with any `/API` or `/design` suffix removed.
    #[must_use]
    pub fn root_identifier(&self) -> &str {
        &self.root_identifier
    }

    /// Key of the navigation group this record belongs to.
    #[must_use]
    pub fn group_key(&self) -> String {
        path_key::group_key(&self.identifier, self.kind)
    }

    /// Menu label for a locale: the resolved title, else the last identifier segment.
    #[must_use]
    pub fn label(&self, locale: &str) -> String {
        self.title
            .resolve(locale)
            .or_else(|| path_key::segments(&self.identifier).last())
            .unwrap_or_default()
            .to_owned()
    }
}

/// Deserialization shape of [`ContentRecord`]; derived fields are recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFields {
    identifier: String,
    title: Title,
    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    raw_body: String,
}

impl From<RecordFields> for ContentRecord {
    fn from(fields: RecordFields) -> Self {
        Self {
            order: fields.order,
            icon: fields.icon,
            raw_body: fields.raw_body,
            ..Self::new(fields.identifier, fields.title)
        }
    }
}

/// Author-curated ordering and title override for one example group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    /// Locale-relative slug (e.g. `line` or `line/basic`).
    pub slug: String,
    /// Icon name shown next to the group label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Locale code to group title.
    #[serde(default)]
    pub title: BTreeMap<String, String>,
}

impl CuratedEntry {
    /// Title for a locale, if the entry has one.
    #[must_use]
    pub fn title_for(&self, locale: &str) -> Option<&str> {
        self.title.get(locale).map(String::as_str)
    }
}

/// Per-locale frontmatter of the page a demo belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoFrontmatter {
    /// Category title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Category order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// One runnable demo shown in the gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRecord {
    /// Path relative to the examples root (e.g. `line/basic/demo/smooth.js`).
    pub relative_path: String,
    /// Source file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Card title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Position within its category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Screenshot URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Frontmatter of the owning page, keyed by locale.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub post_frontmatter: BTreeMap<String, DemoFrontmatter>,
}

impl DemoRecord {
    /// Create a demo with only its relative path set.
    #[must_use]
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            ..Self::default()
        }
    }

    /// Frontmatter of the owning page for a locale.
    #[must_use]
    pub fn frontmatter(&self, locale: &str) -> Option<&DemoFrontmatter> {
        self.post_frontmatter.get(locale)
    }
}
