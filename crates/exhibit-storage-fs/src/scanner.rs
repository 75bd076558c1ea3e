//! Content discovery by filesystem walking.
//!
//! The Scanner only identifies files and derives their identifiers. Reading
//! and parsing happens in [`FsLoader`](crate::FsLoader).

use std::fs;
use std::path::{Path, PathBuf};

use crate::LoadError;
use crate::demos::{DEMO_DIR, MANIFEST_FILENAME};

/// Stem of the file that holds an example's primary content.
const INDEX_STEM: &str = "index";

/// Reference to one markdown content file.
#[derive(Debug, Clone)]
pub(crate) struct DocumentRef {
    /// Record identifier (e.g. `/en/examples/line/basic/API`).
    pub identifier: String,
    /// Locale from the file name, or the default locale.
    pub locale: String,
    /// Directory relative to `examples/` (e.g. `line/basic`).
    pub dir: String,
    /// Whether this is the directory's `index` file.
    pub is_index: bool,
    pub path: PathBuf,
}

/// Reference to a `demo/meta.json` manifest.
#[derive(Debug, Clone)]
pub(crate) struct ManifestRef {
    /// Example directory owning the `demo/` directory.
    pub dir: String,
    pub path: PathBuf,
}

/// Files found under the examples root, in path order.
#[derive(Debug, Default)]
pub(crate) struct ScanResult {
    pub documents: Vec<DocumentRef>,
    pub manifests: Vec<ManifestRef>,
}

/// Walks `<content_dir>/examples`.
pub(crate) struct Scanner<'a> {
    examples_dir: PathBuf,
    default_locale: &'a str,
    locales: &'a [String],
}

impl<'a> Scanner<'a> {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `examples_dir` - Root directory to scan
    /// * `default_locale` - Locale of files without a locale suffix
    /// * `locales` - Recognized locale suffixes
    pub fn new(examples_dir: PathBuf, default_locale: &'a str, locales: &'a [String]) -> Self {
        Self {
            examples_dir,
            default_locale,
            locales,
        }
    }

    /// Scan the examples root.
    ///
    /// Unreadable subdirectories are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the examples root itself cannot be read.
    pub fn scan(&self) -> Result<ScanResult, LoadError> {
        let entries = fs::read_dir(&self.examples_dir).map_err(|source| LoadError::Io {
            path: self.examples_dir.clone(),
            source,
        })?;
        let mut result = ScanResult::default();
        self.scan_entries(entries, "", &mut result);
        Ok(result)
    }

    fn scan_directory(&self, dir_path: &Path, dir: &str, result: &mut ScanResult) {
        match fs::read_dir(dir_path) {
            Ok(entries) => self.scan_entries(entries, dir, result),
            Err(e) => {
                tracing::warn!(
                    path = %dir_path.display(),
                    error = %e,
                    "Skipping unreadable directory"
                );
            }
        }
    }

    fn scan_entries(&self, entries: fs::ReadDir, dir: &str, result: &mut ScanResult) {
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name = e.file_name().to_string_lossy().into_owned();
                (e, is_dir, name)
            })
            .filter(|(_, _, name)| !name.starts_with('.'))
            .collect();
        entries.sort_by(|a, b| a.2.cmp(&b.2));

        for (entry, is_dir, name) in entries {
            let path = entry.path();

            if is_dir && name == DEMO_DIR {
                let manifest = path.join(MANIFEST_FILENAME);
                if manifest.is_file() {
                    result.manifests.push(ManifestRef {
                        dir: dir.to_owned(),
                        path: manifest,
                    });
                }
            } else if is_dir {
                let child_dir = if dir.is_empty() {
                    name
                } else {
                    format!("{dir}/{name}")
                };
                self.scan_directory(&path, &child_dir, result);
            } else if let Some((stem, locale)) = self.parse_file_name(&name) {
                result.documents.push(DocumentRef {
                    identifier: document_identifier(locale, dir, stem),
                    locale: locale.to_owned(),
                    dir: dir.to_owned(),
                    is_index: stem == INDEX_STEM,
                    path,
                });
            }
        }
    }

    /// Split `<stem>.<locale>.md` or `<stem>.md` into stem and locale.
    ///
    /// Returns `None` for files that are not markdown.
    fn parse_file_name<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)>
    where
        'a: 'n,
    {
        let without_ext = name.strip_suffix(".md")?;
        if let Some((stem, locale)) = without_ext.rsplit_once('.')
            && self.locales.iter().any(|l| l == locale)
        {
            return Some((stem, locale));
        }
        Some((without_ext, self.default_locale))
    }
}

/// Identifier of a content file.
///
/// Examples:
/// - `en`, `line/basic`, `index` -> `/en/examples/line/basic`
/// - `en`, `line/basic`, `API` -> `/en/examples/line/basic/API`
/// - `zh`, `""`, `index` -> `/zh/examples`
pub(crate) fn document_identifier(locale: &str, dir: &str, stem: &str) -> String {
    let mut identifier = format!("/{locale}/examples");
    if !dir.is_empty() {
        identifier.push('/');
        identifier.push_str(dir);
    }
    if stem != INDEX_STEM {
        identifier.push('/');
        identifier.push_str(stem);
    }
    identifier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<String> {
        vec!["en".to_owned(), "zh".to_owned()]
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_document_identifier() {
        assert_eq!(document_identifier("en", "line/basic", "index"), "/en/examples/line/basic");
        assert_eq!(
            document_identifier("en", "line/basic", "API"),
            "/en/examples/line/basic/API"
        );
        assert_eq!(
            document_identifier("zh", "line/basic", "design"),
            "/zh/examples/line/basic/design"
        );
        assert_eq!(document_identifier("en", "", "gallery"), "/en/examples/gallery");
        assert_eq!(document_identifier("zh", "", "index"), "/zh/examples");
        assert_eq!(document_identifier("en", "index", "index"), "/en/examples/index");
    }

    #[test]
    fn test_parse_file_name() {
        let locales = locales();
        let scanner = Scanner::new(PathBuf::from("/unused"), "en", &locales);

        assert_eq!(scanner.parse_file_name("index.zh.md"), Some(("index", "zh")));
        assert_eq!(scanner.parse_file_name("API.en.md"), Some(("API", "en")));
        assert_eq!(scanner.parse_file_name("index.md"), Some(("index", "en")));
        assert_eq!(scanner.parse_file_name("step.line.md"), Some(("step.line", "en")));
        assert_eq!(scanner.parse_file_name("smooth.js"), None);
    }

    #[test]
    fn test_scan_finds_documents_and_manifests() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "line/basic/index.en.md", "");
        write(root, "line/basic/index.zh.md", "");
        write(root, "line/basic/API.en.md", "");
        write(root, "line/basic/demo/meta.json", "{}");
        write(root, "line/basic/demo/smooth.js", "");
        write(root, "gallery.en.md", "");
        let locales = locales();

        let result = Scanner::new(root.to_path_buf(), "en", &locales).scan().unwrap();

        let ids: Vec<_> = result.documents.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "/en/examples/gallery",
                "/en/examples/line/basic/API",
                "/en/examples/line/basic",
                "/zh/examples/line/basic",
            ]
        );
        assert!(result.documents[2].is_index);
        assert_eq!(result.documents[3].locale, "zh");
        assert_eq!(result.manifests.len(), 1);
        assert_eq!(result.manifests[0].dir, "line/basic");
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, ".drafts/index.en.md", "");
        write(root, "line/.wip.en.md", "");
        let locales = locales();

        let result = Scanner::new(root.to_path_buf(), "en", &locales).scan().unwrap();

        assert!(result.documents.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let locales = locales();

        let result = Scanner::new(temp_dir.path().join("missing"), "en", &locales).scan();

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
