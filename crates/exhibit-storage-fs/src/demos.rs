//! Demo manifests (`<dir>/demo/meta.json`).

use std::collections::BTreeMap;

use exhibit_site::{DemoFrontmatter, DemoRecord, Title};
use serde::Deserialize;

/// Manifest file name inside a `demo/` directory.
pub(crate) const MANIFEST_FILENAME: &str = "meta.json";

/// Directory holding an example's demos.
pub(crate) const DEMO_DIR: &str = "demo";

#[derive(Debug, Deserialize)]
pub(crate) struct DemoManifest {
    #[serde(default)]
    pub demos: Vec<DemoEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DemoEntry {
    pub filename: String,
    #[serde(default)]
    pub title: Option<Title>,
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Parse a demo manifest.
pub(crate) fn parse_manifest(content: &str) -> Result<DemoManifest, serde_json::Error> {
    serde_json::from_str(content)
}

/// Demo records for one example directory, in manifest order.
///
/// # Arguments
///
/// * `dir` - Example directory relative to `examples/` (e.g. `line/basic`)
/// * `manifest` - Parsed manifest of `<dir>/demo/meta.json`
/// * `frontmatter` - Per-locale title and order of the directory's index pages
pub(crate) fn demo_records(
    dir: &str,
    manifest: DemoManifest,
    frontmatter: &BTreeMap<String, DemoFrontmatter>,
) -> Vec<DemoRecord> {
    manifest
        .demos
        .into_iter()
        .map(|entry| {
            let relative_path = if dir.is_empty() {
                format!("{DEMO_DIR}/{}", entry.filename)
            } else {
                format!("{dir}/{DEMO_DIR}/{}", entry.filename)
            };
            DemoRecord {
                relative_path,
                filename: Some(entry.filename),
                title: entry.title,
                order: entry.order,
                screenshot: entry.screenshot,
                post_frontmatter: frontmatter.clone(),
            }
        })
        .collect()
}
