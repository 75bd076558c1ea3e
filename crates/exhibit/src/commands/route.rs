//! `exhibit route` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Arguments for the route command.
#[derive(Args)]
pub(crate) struct RouteArgs {
    /// Requested path (e.g. /en/examples/line/basic/API).
    path: String,
}

impl RouteArgs {
    /// Execute the route command.
    ///
    /// An unmatched path is not an error: a notice is printed and nothing
    /// is written to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or output fails.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let context = global.load()?;

        match context.site.resolve_section(&self.path) {
            Some(section) => print_json(&section),
            None => {
                Output::new().warning(&format!("Not found: {}", self.path));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_site::bilingual_site;

    #[test]
    fn test_route_unmatched_path_succeeds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let global = bilingual_site(temp_dir.path());
        let args = RouteArgs {
            path: "/en/examples/area/basic".to_owned(),
        };

        assert!(args.execute(&global).is_ok());
    }

    #[test]
    fn test_route_matched_path_succeeds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let global = bilingual_site(temp_dir.path());
        let args = RouteArgs {
            path: "/en/examples/line/basic/API".to_owned(),
        };

        assert!(args.execute(&global).is_ok());
    }

    #[test]
    fn test_route_propagates_load_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut global = bilingual_site(temp_dir.path());
        global.config = Some(temp_dir.path().join("missing.toml"));
        let args = RouteArgs {
            path: "/en/examples/line/basic".to_owned(),
        };

        let result = args.execute(&global);

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
