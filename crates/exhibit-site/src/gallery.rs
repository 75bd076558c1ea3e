//! Gallery categorization.
//!
//! Demos are grouped by the title of the page they belong to (per locale),
//! categories are ordered by that page's `order`, and demos are ordered by
//! their own `order`. Demos without a page title land in [`OTHER_CATEGORY`],
//! which always comes first and is rendered without a heading.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::record::DemoRecord;

/// Category of demos without a page title.
pub const OTHER_CATEGORY: &str = "OTHER";

/// Sort key of demos without an `order`.
const UNORDERED_DEMO: i64 = -1;

/// `<dir>/demo/<name>.<ext>` becomes `<dir>#<name>`.
static DEMO_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/demo/(.*)\..*").expect("demo file pattern is valid"));

/// One gallery card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCard {
    /// In-page slug (e.g. `line/basic#smooth`).
    pub slug: String,
    /// Card title.
    pub title: String,
    /// Screenshot URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Link target (`/{locale}/examples/{slug}`).
    pub href: String,
}

/// Demos sharing a category label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCategory {
    /// Category label ([`OTHER_CATEGORY`] for uncategorized demos).
    pub category_label: String,
    /// Anchor id of the category heading.
    pub anchor: String,
    /// Whether the category gets a heading.
    pub show_heading: bool,
    /// Cards in display order.
    pub demos: Vec<GalleryCard>,
}

/// Group demos into ordered categories for a locale.
#[must_use]
pub fn categorize(demos: &[DemoRecord], locale: &str) -> Vec<GalleryCategory> {
    let mut labels: Vec<&str> = Vec::new();
    let mut members: Vec<Vec<&DemoRecord>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for demo in demos {
        let label = category_label(demo, locale);
        if let Some(&idx) = index.get(label) {
            members[idx].push(demo);
        } else {
            index.insert(label, labels.len());
            labels.push(label);
            members.push(vec![demo]);
        }
    }

    let mut categories: Vec<(&str, Vec<&DemoRecord>)> = labels.into_iter().zip(members).collect();
    categories.sort_by_key(|(label, members)| {
        if *label == OTHER_CATEGORY {
            (0, 0)
        } else {
            (1, category_order(members, locale))
        }
    });

    categories
        .into_iter()
        .map(|(label, mut members)| {
            members.sort_by_key(|demo| demo.order.unwrap_or(UNORDERED_DEMO));
            GalleryCategory {
                category_label: label.to_owned(),
                anchor: format!("category-{label}"),
                show_heading: label != OTHER_CATEGORY,
                demos: members.into_iter().map(|demo| card(demo, locale)).collect(),
            }
        })
        .collect()
}

/// Category label of a demo for a locale.
#[must_use]
pub fn category_label<'a>(demo: &'a DemoRecord, locale: &str) -> &'a str {
    demo.frontmatter(locale)
        .and_then(|frontmatter| frontmatter.title.as_deref())
        .unwrap_or(OTHER_CATEGORY)
}

/// Order of a category: its first member's page order, `0` when unset.
fn category_order(members: &[&DemoRecord], locale: &str) -> i64 {
    members
        .first()
        .and_then(|demo| demo.frontmatter(locale))
        .and_then(|frontmatter| frontmatter.order)
        .unwrap_or(0)
}

/// Display slug of a demo path.
///
/// `line/basic/demo/smooth.js` becomes `line/basic#smooth`; paths of any
/// other shape are returned unchanged.
#[must_use]
pub fn display_slug(relative_path: &str) -> String {
    DEMO_FILE_RE.replace(relative_path, "#${1}").into_owned()
}

/// Card title: explicit title, then file name.
#[must_use]
pub fn card_title(demo: &DemoRecord, locale: &str) -> String {
    demo.title
        .as_ref()
        .and_then(|title| title.resolve(locale))
        .or(demo.filename.as_deref())
        .or_else(|| demo.relative_path.rsplit('/').next())
        .unwrap_or_default()
        .to_owned()
}

fn card(demo: &DemoRecord, locale: &str) -> GalleryCard {
    let slug = display_slug(&demo.relative_path);
    GalleryCard {
        href: format!("/{locale}/examples/{slug}"),
        title: card_title(demo, locale),
        screenshot: demo.screenshot.clone(),
        slug,
    }
}
