//! Site facade.
//!
//! [`Site`] owns an immutable [`ContentIndex`] plus the curated example list
//! and exposes the per-request views: the menu, the routing decision, the
//! example page tabs and the gallery. Every call is a pure computation over
//! the snapshot, so a `Site` can be shared behind an `Arc` without locking.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::content_index::ContentIndex;
use crate::gallery::{GalleryCategory, categorize};
use crate::icons::IconResolver;
use crate::menu::{Menu, MenuItem, build_menu, open_keys};
use crate::record::CuratedEntry;
use crate::router::{
    ActiveSection, SectionTabs, is_gallery_request, resolve_active_section, section_tabs,
};

/// Configuration for [`Site`].
#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    /// Curated example list (group order, titles and icons).
    pub curated: Vec<CuratedEntry>,
    /// Screenshot used for demos without one.
    ///
    /// If `None`, such cards have no screenshot.
    pub placeholder_screenshot: Option<String>,
}

/// Everything needed to render one requested path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    /// Routing decision for the request.
    pub section: ActiveSection<'a>,
    /// Menu key to highlight.
    pub selected_key: String,
    /// Sub-group keys to expand.
    pub open_keys: BTreeSet<String>,
    /// Navigation menu for the locale.
    pub menu: Menu,
    /// Page body.
    pub content: PageContent<'a>,
    /// Icon-font script referenced by menu icons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_script_url: Option<&'a str>,
}

/// Body of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageContent<'a> {
    /// Gallery of all demos with links to the surrounding menu items.
    Gallery {
        /// Categories in display order.
        categories: Vec<GalleryCategory>,
        /// Previous menu item.
        #[serde(skip_serializing_if = "Option::is_none")]
        prev: Option<MenuItem>,
        /// Next menu item.
        #[serde(skip_serializing_if = "Option::is_none")]
        next: Option<MenuItem>,
    },
    /// Example page with its content tabs.
    Example {
        /// Primary record, companions and demos.
        tabs: SectionTabs<'a>,
    },
}

/// Example site: content snapshot plus the views derived from it.
pub struct Site {
    index: ContentIndex,
    curated: Vec<CuratedEntry>,
    placeholder_screenshot: Option<String>,
    icons: Arc<dyn IconResolver>,
}

impl Site {
    /// Create a site.
    ///
    /// # Arguments
    ///
    /// * `index` - Loaded content records and demos
    /// * `config` - Site configuration
    /// * `icons` - Icon resolver applied to menu entries
    #[must_use]
    pub fn new(index: ContentIndex, config: SiteConfig, icons: Arc<dyn IconResolver>) -> Self {
        Self {
            index,
            curated: config.curated,
            placeholder_screenshot: config.placeholder_screenshot,
            icons,
        }
    }

    /// Icon-font script the presentation layer loads, if any.
    #[must_use]
    pub fn icon_script_url(&self) -> Option<&str> {
        self.icons.script_url()
    }

    /// Navigation menu for a locale.
    #[must_use]
    pub fn menu(&self, locale: &str) -> Menu {
        build_menu(
            self.index.records(),
            &self.curated,
            locale,
            self.icons.as_ref(),
        )
    }

    /// Sub-group keys to expand for the active identifier.
    #[must_use]
    pub fn open_keys(&self, active_identifier: &str) -> BTreeSet<String> {
        open_keys(self.index.records(), active_identifier)
    }

    /// Route a requested path. `None` means nothing should be rendered.
    #[must_use]
    pub fn resolve_section(&self, path: &str) -> Option<ActiveSection<'_>> {
        resolve_active_section(path, self.index.records())
    }

    /// Tabs of the example rooted at `root_identifier`.
    #[must_use]
    pub fn section_tabs(&self, root_identifier: &str) -> SectionTabs<'_> {
        section_tabs(root_identifier, self.index.records(), self.index.demos())
    }

    /// Gallery categories for a locale, with placeholder screenshots applied.
    #[must_use]
    pub fn gallery(&self, locale: &str) -> Vec<GalleryCategory> {
        let mut categories = categorize(self.index.demos(), locale);
        if let Some(placeholder) = &self.placeholder_screenshot {
            for card in categories.iter_mut().flat_map(|c| c.demos.iter_mut()) {
                if card.screenshot.is_none() {
                    card.screenshot = Some(placeholder.clone());
                }
            }
        }
        categories
    }

    /// Full view of a requested path.
    ///
    /// Gallery paths (`…/examples/gallery`) render the gallery, everything
    /// else renders the example tabs of the matched record's root.
    ///
    /// # Returns
    ///
    /// `None` if no record matches the path.
    #[must_use]
    pub fn page(&self, path: &str, locale: &str) -> Option<PageView<'_>> {
        let section = self.resolve_section(path)?;
        let selected_key = section.root_identifier.to_owned();
        let menu = self.menu(locale);

        let content = if is_gallery_request(path) {
            let neighbors = menu.neighbors(&selected_key);
            PageContent::Gallery {
                categories: self.gallery(locale),
                prev: neighbors.prev.cloned(),
                next: neighbors.next.cloned(),
            }
        } else {
            PageContent::Example {
                tabs: self.section_tabs(section.root_identifier),
            }
        };

        Some(PageView {
            open_keys: self.open_keys(&selected_key),
            section,
            selected_key,
            menu,
            content,
            icon_script_url: self.icon_script_url(),
        })
    }
}
