//! Navigation, routing and gallery engine for Exhibit example sites.
//!
//! This crate provides:
//! - [`Site`]: content snapshot plus the views derived from it
//! - [`build_menu`]: two-level navigation menu from flat content records
//! - [`resolve_active_section`]: request routing to primary, API and design sections
//! - [`categorize`]: ordered gallery categories
//!
//! Everything here is a pure computation over in-memory records. Loading
//! content from disk lives in `exhibit-storage-fs`.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use exhibit_site::{ContentIndex, ContentRecord, NoIcons, Site, SiteConfig};
//!
//! let index = ContentIndex::builder()
//!     .records([
//!         ContentRecord::new("/en/examples/line/basic", "Basic"),
//!         ContentRecord::new("/en/examples/line/basic/API", "API"),
//!     ])
//!     .build();
//! let site = Site::new(index, SiteConfig::default(), Arc::new(NoIcons));
//!
//! let menu = site.menu("en");
//! assert_eq!(menu.leaves().count(), 1);
//!
//! let section = site.resolve_section("/en/examples/line/basic/API").unwrap();
//! assert_eq!(section.root_identifier, "/en/examples/line/basic");
//! ```

mod content_index;
mod gallery;
mod grouping;
mod icons;
mod menu;
mod order;
mod path_key;
mod record;
mod router;
mod site;

pub use content_index::{ContentIndex, ContentIndexBuilder};
pub use gallery::{
    GalleryCard, GalleryCategory, OTHER_CATEGORY, card_title, categorize, category_label,
    display_slug,
};
pub use grouping::RecordGroups;
pub use icons::{IconFont, IconResolver, NoIcons};
pub use menu::{
    FLAT_GROUP_DEPTH, Menu, MenuEntry, MenuGroup, MenuItem, Neighbors, build_menu, open_keys,
};
pub use order::{CURATED_ORDER_OFFSET, resolve_order, sort_group_keys};
pub use path_key::{
    EXAMPLES_SEGMENT, capitalize, is_path_prefix, locale_relative_key, normalize_group_key,
    path_depth, segments,
};
pub use record::{
    API_SUFFIX, ContentRecord, CuratedEntry, DESIGN_SUFFIX, DemoFrontmatter, DemoRecord,
    RecordKind, Title,
};
pub use router::{
    ActiveSection, GALLERY_SUFFIX, SectionTabs, is_gallery_request, normalize_request,
    resolve_active_section, section_tabs,
};
pub use site::{PageContent, PageView, Site, SiteConfig};
