//! CLI command implementations.

pub(crate) mod gallery;
pub(crate) mod menu;
pub(crate) mod page;
pub(crate) mod route;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use exhibit_config::{CliSettings, Config, ExampleConfig};
use exhibit_site::{
    CuratedEntry, EXAMPLES_SEGMENT, IconFont, IconResolver, NoIcons, Site, SiteConfig, segments,
};
use exhibit_storage_fs::FsLoader;

use crate::error::CliError;

pub(crate) use gallery::GalleryArgs;
pub(crate) use menu::MenuArgs;
pub(crate) use page::PageArgs;
pub(crate) use route::RouteArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover exhibit.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content directory containing `examples/` (overrides config).
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Locale to render (default: site.default_locale).
    #[arg(short, long, global = true, env = "EXHIBIT_LOCALE")]
    locale: Option<String>,

    /// Enable verbose output (load summaries and skipped files).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Loaded site plus the locale to render.
pub(crate) struct Context {
    pub site: Site,
    pub locale: String,
    pub locales: Vec<String>,
}

impl Context {
    /// Locale of a requested path.
    ///
    /// The first configured locale among the segments before `examples`
    /// wins, so mount prefixes are skipped. Paths without one use the
    /// configured locale.
    pub(crate) fn locale_for<'a>(&'a self, path: &'a str) -> &'a str {
        segments(path)
            .take_while(|segment| *segment != EXAMPLES_SEGMENT)
            .find(|segment| self.locales.iter().any(|locale| locale == segment))
            .unwrap_or(self.locale.as_str())
    }
}

impl GlobalArgs {
    /// Load configuration and content.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the content directory
    /// cannot be read.
    pub(crate) fn load(&self) -> Result<Context, CliError> {
        let cli_settings = CliSettings {
            locale: self.locale.clone(),
            content_dir: self.content_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        build_context(&config)
    }
}

/// Build the site described by a loaded configuration.
fn build_context(config: &Config) -> Result<Context, CliError> {
    let site_config = &config.site_resolved;
    let content = FsLoader::new(
        site_config.content_dir.clone(),
        &site_config.default_locale,
        &site_config.locales,
    )
    .load()?;

    let icons: Arc<dyn IconResolver> = if config.icons.enabled {
        Arc::new(IconFont::new(config.icons.script_url.clone()))
    } else {
        Arc::new(NoIcons)
    };

    let site = Site::new(
        content.into_index(),
        SiteConfig {
            curated: curated_entries(&config.examples),
            placeholder_screenshot: config.gallery.placeholder().map(str::to_owned),
        },
        icons,
    );

    Ok(Context {
        site,
        locale: site_config.default_locale.clone(),
        locales: site_config.locales.clone(),
    })
}

/// Convert the configured example list into curated entries.
fn curated_entries(examples: &[ExampleConfig]) -> Vec<CuratedEntry> {
    examples
        .iter()
        .map(|example| CuratedEntry {
            slug: example.slug.clone(),
            icon: example.icon.clone(),
            title: example.title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::test_site::{bilingual_site, write};
    use super::*;

    #[test]
    fn test_curated_entries() {
        let examples = vec![ExampleConfig {
            slug: "line".to_owned(),
            icon: Some("line".to_owned()),
            title: BTreeMap::from([("en".to_owned(), "Line Charts".to_owned())]),
        }];

        let curated = curated_entries(&examples);

        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].slug, "line");
        assert_eq!(curated[0].title_for("en"), Some("Line Charts"));
    }

    #[test]
    fn test_load_context_from_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "exhibit.toml",
            r#"
[site]
default_locale = "en"
locales = ["en"]

[[examples]]
slug = "line"
icon = "line"
title = { en = "line charts" }

[icons]
enabled = false
"#,
        );
        write(root, "site/examples/line/basic/index.en.md", "---\ntitle: Basic\n---\n");
        let args = GlobalArgs {
            config: Some(root.join("exhibit.toml")),
            content_dir: None,
            locale: None,
            verbose: false,
        };

        let context = args.load().unwrap();

        assert_eq!(context.locale, "en");
        let menu = context.site.menu("en");
        let labels: Vec<_> = menu.leaves().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["Basic"]);
        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["entries"][0]["label"], "Line charts");
        assert!(json["entries"][0].get("icon").is_none());
    }

    #[test]
    fn test_load_context_missing_content_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "exhibit.toml", "");
        let args = GlobalArgs {
            config: Some(temp_dir.path().join("exhibit.toml")),
            content_dir: Some(temp_dir.path().join("missing")),
            locale: None,
            verbose: false,
        };

        let result = args.load();

        assert!(matches!(result, Err(CliError::Load(_))));
    }

    #[test]
    fn test_locale_for_requested_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();

        assert_eq!(context.locale_for("/zh/examples/line/basic"), "zh");
        assert_eq!(context.locale_for("/g2/zh/examples/line/basic/API"), "zh");
        assert_eq!(context.locale_for("/en/examples/gallery"), "en");
    }

    #[test]
    fn test_locale_for_falls_back_to_configured_locale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();

        assert_eq!(context.locale_for("/fr/examples/line/basic"), "en");
        assert_eq!(context.locale_for("/examples/zh"), "en");
        assert_eq!(context.locale_for(""), "en");
    }
}
