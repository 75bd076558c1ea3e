//! Filesystem content loader for Exhibit example sites.
//!
//! This crate provides [`FsLoader`], which reads a content directory laid out
//! as `<content_dir>/examples/**` into the records consumed by `exhibit-site`:
//!
//! - `<dir>/index.<locale>.md` becomes `/<locale>/examples/<dir>`
//! - `<dir>/API.<locale>.md` and `<dir>/design.<locale>.md` become companions
//! - any other `<dir>/<name>.<locale>.md` becomes `/<locale>/examples/<dir>/<name>`
//! - `<dir>/demo/meta.json` lists the demos of `<dir>`
//!
//! Markdown files carry YAML frontmatter (`title`, `order`, `icon`). Files
//! without a locale suffix belong to the default locale.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use exhibit_storage_fs::FsLoader;
//!
//! let locales = vec!["en".to_owned(), "zh".to_owned()];
//! let loader = FsLoader::new(PathBuf::from("site"), "en", &locales);
//! let content = loader.load()?;
//! for record in &content.records {
//!     println!("{}", record.identifier());
//! }
//! # Ok::<(), exhibit_storage_fs::LoadError>(())
//! ```

mod demos;
mod frontmatter;
mod scanner;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use exhibit_site::{ContentIndex, ContentRecord, DemoFrontmatter, DemoRecord, Title};

use demos::{demo_records, parse_manifest};
use frontmatter::parse_document;
use scanner::{DocumentRef, Scanner};

/// Directory under the content root that holds all examples.
pub const EXAMPLES_DIR: &str = "examples";

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Frontmatter is not valid YAML.
    #[error("Invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        /// Markdown file.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },
    /// Demo manifest is not valid JSON.
    #[error("Invalid demo manifest {}: {source}", path.display())]
    Manifest {
        /// Manifest file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Records and demos read from disk.
#[derive(Debug, Default)]
pub struct LoadedContent {
    /// Content records sorted by identifier.
    pub records: Vec<ContentRecord>,
    /// Demos in directory order, manifest order within a directory.
    pub demos: Vec<DemoRecord>,
}

impl LoadedContent {
    /// Build a [`ContentIndex`] from the loaded content.
    #[must_use]
    pub fn into_index(self) -> ContentIndex {
        ContentIndex::builder()
            .records(self.records)
            .demos(self.demos)
            .build()
    }
}

/// Loads example content from a directory.
pub struct FsLoader<'a> {
    content_dir: PathBuf,
    default_locale: &'a str,
    locales: &'a [String],
}

impl<'a> FsLoader<'a> {
    /// Create a loader.
    ///
    /// # Arguments
    ///
    /// * `content_dir` - Directory containing `examples/`
    /// * `default_locale` - Locale of files without a locale suffix
    /// * `locales` - Recognized locale suffixes
    #[must_use]
    pub fn new(content_dir: PathBuf, default_locale: &'a str, locales: &'a [String]) -> Self {
        Self {
            content_dir,
            default_locale,
            locales,
        }
    }

    /// Directory that is scanned.
    #[must_use]
    pub fn examples_dir(&self) -> PathBuf {
        self.content_dir.join(EXAMPLES_DIR)
    }

    /// Read all records and demos.
    ///
    /// Individual files that cannot be read or parsed are skipped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the examples directory cannot be read.
    pub fn load(&self) -> Result<LoadedContent, LoadError> {
        let scan = Scanner::new(self.examples_dir(), self.default_locale, self.locales).scan()?;

        let mut records = Vec::with_capacity(scan.documents.len());
        let mut page_frontmatter: HashMap<String, BTreeMap<String, DemoFrontmatter>> =
            HashMap::new();

        for doc in scan.documents {
            match load_record(&doc) {
                Ok((record, frontmatter)) => {
                    if doc.is_index {
                        page_frontmatter
                            .entry(doc.dir)
                            .or_default()
                            .insert(doc.locale, frontmatter);
                    }
                    records.push(record);
                }
                Err(e) => tracing::warn!(error = %e, "Skipping content file"),
            }
        }
        records.sort_by(|a, b| a.identifier().cmp(b.identifier()));

        let mut demos = Vec::new();
        for manifest in scan.manifests {
            match read_manifest(&manifest.path) {
                Ok(parsed) => {
                    let frontmatter = page_frontmatter
                        .get(&manifest.dir)
                        .cloned()
                        .unwrap_or_default();
                    demos.extend(demo_records(&manifest.dir, parsed, &frontmatter));
                }
                Err(e) => tracing::warn!(error = %e, "Skipping demo manifest"),
            }
        }

        tracing::info!(
            records = records.len(),
            demos = demos.len(),
            path = %self.content_dir.display(),
            "Loaded example content"
        );

        Ok(LoadedContent { records, demos })
    }
}

/// Read one markdown file into a record and its page frontmatter for demos.
fn load_record(doc: &DocumentRef) -> Result<(ContentRecord, DemoFrontmatter), LoadError> {
    let content = fs::read_to_string(&doc.path).map_err(|source| LoadError::Io {
        path: doc.path.clone(),
        source,
    })?;
    let (frontmatter, body) = parse_document(&content).map_err(|source| LoadError::Frontmatter {
        path: doc.path.clone(),
        source,
    })?;

    let page = DemoFrontmatter {
        title: frontmatter
            .title
            .as_ref()
            .and_then(|title| title.resolve(&doc.locale))
            .map(str::to_owned),
        order: frontmatter.order,
    };

    // Untitled records fall back to their last identifier segment
    let title = frontmatter
        .title
        .unwrap_or_else(|| Title::Localized(BTreeMap::new()));
    let mut record = ContentRecord::new(doc.identifier.clone(), title).with_body(body);
    record.order = frontmatter.order;
    record.icon = frontmatter.icon;

    Ok((record, page))
}

fn read_manifest(path: &Path) -> Result<demos::DemoManifest, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content).map_err(|source| LoadError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use exhibit_site::RecordKind;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn locales() -> Vec<String> {
        vec!["en".to_owned(), "zh".to_owned()]
    }

    fn create_site(root: &Path) {
        write(
            root,
            "examples/line/basic/index.en.md",
            "---\ntitle: Basic Line\norder: 1\nicon: line\n---\nLine charts.\n",
        );
        write(
            root,
            "examples/line/basic/index.zh.md",
            "---\ntitle: 基础折线图\norder: 1\n---\n",
        );
        write(root, "examples/line/basic/API.en.md", "---\ntitle: API\n---\n## Options\n");
        write(root, "examples/line/basic/design.en.md", "Design notes.\n");
        write(
            root,
            "examples/line/basic/demo/meta.json",
            r#"{"demos": [
                {
                    "filename": "smooth.js",
                    "title": {"en": "Smooth", "zh": "平滑"},
                    "screenshot": "https://img/smooth.png"
                },
                {"filename": "step.js", "title": "Step", "order": 1}
            ]}"#,
        );
        write(root, "examples/gallery.en.md", "---\ntitle: Gallery\norder: -1\n---\n");
    }

    #[test]
    fn test_load_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_site(temp_dir.path());
        let locales = locales();

        let content = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales)
            .load()
            .unwrap();

        let ids: Vec<_> = content.records.iter().map(ContentRecord::identifier).collect();
        assert_eq!(
            ids,
            vec![
                "/en/examples/gallery",
                "/en/examples/line/basic",
                "/en/examples/line/basic/API",
                "/en/examples/line/basic/design",
                "/zh/examples/line/basic",
            ]
        );
        let basic = &content.records[1];
        assert_eq!(basic.label("en"), "Basic Line");
        assert_eq!(basic.order, Some(1));
        assert_eq!(basic.icon.as_deref(), Some("line"));
        assert_eq!(basic.raw_body, "Line charts.\n");
        assert_eq!(content.records[2].kind(), RecordKind::ApiCompanion);
    }

    #[test]
    fn test_untitled_record_uses_last_segment() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_site(temp_dir.path());
        let locales = locales();

        let content = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales)
            .load()
            .unwrap();

        let design = content
            .records
            .iter()
            .find(|r| r.kind() == RecordKind::DesignCompanion)
            .unwrap();
        assert_eq!(design.label("en"), "design");
        assert_eq!(design.raw_body, "Design notes.\n");
    }

    #[test]
    fn test_load_demos_with_page_frontmatter() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_site(temp_dir.path());
        let locales = locales();

        let content = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales)
            .load()
            .unwrap();

        assert_eq!(content.demos.len(), 2);
        let smooth = &content.demos[0];
        assert_eq!(smooth.relative_path, "line/basic/demo/smooth.js");
        assert_eq!(
            smooth.frontmatter("en").and_then(|f| f.title.as_deref()),
            Some("Basic Line")
        );
        assert_eq!(
            smooth.frontmatter("zh").and_then(|f| f.title.as_deref()),
            Some("基础折线图")
        );
        assert_eq!(content.demos[1].order, Some(1));
    }

    #[test]
    fn test_invalid_files_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_site(temp_dir.path());
        write(temp_dir.path(), "examples/pie/basic/index.en.md", "---\norder: [1\n---\n");
        write(temp_dir.path(), "examples/pie/basic/demo/meta.json", "{not json");
        let locales = locales();

        let content = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales)
            .load()
            .unwrap();

        assert!(content.records.iter().all(|r| !r.identifier().contains("pie")));
        assert_eq!(content.demos.len(), 2);
    }

    #[test]
    fn test_missing_examples_dir_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let locales = locales();

        let result = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales).load();

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_into_index() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_site(temp_dir.path());
        let locales = locales();

        let index = FsLoader::new(temp_dir.path().to_path_buf(), "en", &locales)
            .load()
            .unwrap()
            .into_index();

        assert_eq!(index.len(), 5);
        assert!(index.get("/en/examples/line/basic/API").is_some());
        assert_eq!(index.demos().len(), 2);
    }
}
