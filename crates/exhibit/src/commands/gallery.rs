//! `exhibit gallery` command implementation.

use clap::Args;
use exhibit_site::GalleryCategory;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Arguments for the gallery command.
#[derive(Args)]
pub(crate) struct GalleryArgs {
    /// Only print the category with this label.
    #[arg(long)]
    category: Option<String>,
}

impl GalleryArgs {
    /// Execute the gallery command.
    ///
    /// The gallery is rendered in `--locale`, or the configured default.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or output fails.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let context = global.load()?;
        let categories = self.categories(&context);

        if categories.is_empty() {
            Output::new().info("No demos found");
        }

        print_json(&categories)
    }

    fn categories(&self, context: &Context) -> Vec<GalleryCategory> {
        let mut categories = context.site.gallery(&context.locale);
        if let Some(label) = &self.category {
            categories.retain(|category| &category.category_label == label);
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_site::bilingual_site;

    fn labels(categories: &[GalleryCategory]) -> Vec<&str> {
        categories
            .iter()
            .map(|category| category.category_label.as_str())
            .collect()
    }

    #[test]
    fn test_gallery_lists_all_categories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = GalleryArgs { category: None };

        let categories = args.categories(&context);

        assert_eq!(labels(&categories), vec!["Basic Line", "Pie"]);
    }

    #[test]
    fn test_gallery_category_filter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = GalleryArgs {
            category: Some("Pie".to_owned()),
        };

        let categories = args.categories(&context);

        assert_eq!(labels(&categories), vec!["Pie"]);
        assert_eq!(categories[0].demos.len(), 1);
        assert_eq!(categories[0].demos[0].title, "Donut");
    }

    #[test]
    fn test_gallery_unknown_category_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = GalleryArgs {
            category: Some("Area".to_owned()),
        };

        assert!(args.categories(&context).is_empty());
    }

    #[test]
    fn test_gallery_uses_locale_option() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut global = bilingual_site(temp_dir.path());
        global.locale = Some("zh".to_owned());
        let context = global.load().unwrap();
        let args = GalleryArgs { category: None };

        let categories = args.categories(&context);

        assert_eq!(labels(&categories), vec!["OTHER", "基础折线图"]);
    }
}
