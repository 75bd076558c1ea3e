//! Icon resolution for menu entries.
//!
//! Provides the [`IconResolver`] trait and implementations:
//! - [`IconFont`]: icon-font glyphs (`icon-<name>`) served from a script URL
//! - [`NoIcons`]: drops all icons
//!
//! A resolver is built once by the caller and handed to [`Site`](crate::Site).

/// Maps icon names from content and configuration to renderable references.
pub trait IconResolver: Send + Sync {
    /// Resolve an icon name. `None` hides the icon.
    fn resolve(&self, name: &str) -> Option<String>;

    /// Script that defines the resolved glyphs.
    fn script_url(&self) -> Option<&str> {
        None
    }
}

/// Resolver that never yields an icon.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconResolver for NoIcons {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Icon-font resolver.
///
/// Glyph ids follow the `icon-<name>` convention of icon-font scripts.
#[derive(Clone, Debug)]
pub struct IconFont {
    script_url: String,
}

impl IconFont {
    /// Create a resolver for the icon-font script at `script_url`.
    #[must_use]
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

impl IconResolver for IconFont {
    fn resolve(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(format!("icon-{name}"))
    }

    fn script_url(&self) -> Option<&str> {
        Some(&self.script_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_font_prefixes_name() {
        let icons = IconFont::new("//at.alicdn.com/t/font.js");

        assert_eq!(icons.resolve("line"), Some("icon-line".to_owned()));
        assert_eq!(icons.script_url(), Some("//at.alicdn.com/t/font.js"));
    }

    #[test]
    fn test_icon_font_skips_blank_names() {
        let icons = IconFont::new("//at.alicdn.com/t/font.js");

        assert_eq!(icons.resolve("  "), None);
    }

    #[test]
    fn test_no_icons_resolves_nothing() {
        assert_eq!(NoIcons.resolve("line"), None);
        assert_eq!(NoIcons.script_url(), None);
    }
}
