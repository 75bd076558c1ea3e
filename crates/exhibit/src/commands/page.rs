//! `exhibit page` command implementation.

use clap::Args;
use exhibit_site::PageView;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Requested path (e.g. /en/examples/gallery).
    path: String,
}

impl PageArgs {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or output fails.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let context = global.load()?;

        match self.view(&context) {
            Some(view) => print_json(&view),
            None => {
                Output::new().warning(&format!("Not found: {}", self.path));
                Ok(())
            }
        }
    }

    /// Page view rendered in the locale of the requested path.
    fn view<'a>(&self, context: &'a Context) -> Option<PageView<'a>> {
        context
            .site
            .page(&self.path, context.locale_for(&self.path))
    }
}
