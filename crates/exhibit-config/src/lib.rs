//! Configuration management for Exhibit.
//!
//! Parses `exhibit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `gallery.placeholder_screenshot`
//! - `icons.script_url`

mod expand;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the default locale.
    pub locale: Option<String>,
    /// Override the content directory.
    pub content_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "exhibit.toml";

/// Screenshot shown for demos without one.
pub const DEFAULT_PLACEHOLDER_SCREENSHOT: &str =
    "https://gw.alipayobjects.com/os/s/prod/antv/assets/image/screenshot-placeholder-b8e70.png";

/// Icon-font script for menu icons.
pub const DEFAULT_ICON_SCRIPT_URL: &str = "//at.alicdn.com/t/font_470089_9m0keqj54r.js";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (content dir is a relative string from TOML).
    site: SiteConfigRaw,
    /// Curated example list, in display order.
    pub examples: Vec<ExampleConfig>,
    /// Gallery configuration.
    pub gallery: GalleryConfig,
    /// Icon configuration.
    pub icons: IconsConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    default_locale: Option<String>,
    locales: Option<Vec<String>>,
    content_dir: Option<String>,
}

/// Resolved site configuration with an absolute content directory.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Locale used when none is requested.
    pub default_locale: String,
    /// Locales the site is published in.
    pub locales: Vec<String>,
    /// Directory containing `examples/`.
    pub content_dir: PathBuf,
}

impl SiteConfig {
    /// Whether `locale` is one of the configured locales.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

/// One curated example group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ExampleConfig {
    /// Slug relative to `examples/` (e.g. `line`).
    pub slug: String,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Locale code to group title.
    #[serde(default)]
    pub title: BTreeMap<String, String>,
}

/// Gallery configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Screenshot shown for demos without one. Empty disables the placeholder.
    pub placeholder_screenshot: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            placeholder_screenshot: DEFAULT_PLACEHOLDER_SCREENSHOT.to_owned(),
        }
    }
}

impl GalleryConfig {
    /// Placeholder URL, `None` when disabled.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        Some(self.placeholder_screenshot.as_str()).filter(|url| !url.is_empty())
    }
}

/// Icon configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Whether menu icons are shown.
    pub enabled: bool,
    /// Icon-font script URL.
    pub script_url: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_url: DEFAULT_ICON_SCRIPT_URL.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`icons.script_url`").
        field: String,
        /// Error message (e.g., "${`ICON_CDN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `exhibit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after the overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(locale) = &settings.locale {
            self.site_resolved.default_locale.clone_from(locale);
        }
        if let Some(content_dir) = &settings.content_dir {
            self.site_resolved.content_dir.clone_from(content_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            site: SiteConfigRaw::default(),
            examples: Vec::new(),
            gallery: GalleryConfig::default(),
            icons: IconsConfig::default(),
            site_resolved: SiteConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_examples()?;
        Ok(())
    }

    /// Validate locales.
    fn validate_site(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;
        if site.locales.is_empty() {
            return Err(ConfigError::Validation(
                "site.locales cannot be empty".to_owned(),
            ));
        }
        for locale in &site.locales {
            require_non_empty(locale, "site.locales")?;
        }
        require_non_empty(&site.default_locale, "site.default_locale")?;
        if !site.has_locale(&site.default_locale) {
            return Err(ConfigError::Validation(format!(
                "site.default_locale \"{}\" is not listed in site.locales",
                site.default_locale
            )));
        }
        Ok(())
    }

    /// Validate the curated example list.
    fn validate_examples(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for example in &self.examples {
            require_non_empty(&example.slug, "examples.slug")?;
            if !seen.insert(example.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate example slug \"{}\"",
                    example.slug
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.gallery.placeholder_screenshot = expand::expand_env(
            &self.gallery.placeholder_screenshot,
            "gallery.placeholder_screenshot",
        )?;
        self.icons.script_url = expand::expand_env(&self.icons.script_url, "icons.script_url")?;
        Ok(())
    }

    /// Resolve the raw site section against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let default_locale = self
            .site
            .default_locale
            .clone()
            .unwrap_or_else(|| "en".to_owned());
        let locales = self
            .site
            .locales
            .clone()
            .unwrap_or_else(|| vec!["en".to_owned(), "zh".to_owned()]);

        self.site_resolved = SiteConfig {
            default_locale,
            locales,
            content_dir: config_dir.join(self.site.content_dir.as_deref().unwrap_or("site")),
        };
    }
}
