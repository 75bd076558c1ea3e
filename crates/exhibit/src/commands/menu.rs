//! `exhibit menu` command implementation.

use std::collections::BTreeSet;

use clap::Args;
use exhibit_site::Menu;
use serde::Serialize;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    /// Active identifier; its ancestor groups are reported as open.
    #[arg(long)]
    active: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuOutput<'a> {
    menu: Menu,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_keys: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_script_url: Option<&'a str>,
}

impl MenuArgs {
    /// Execute the menu command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or output fails.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let context = global.load()?;
        let output = self.output(&context);

        if output.menu.is_empty() {
            Output::new().info("No menu entries for this locale");
        }

        print_json(&output)
    }

    /// Menu in the locale of the active identifier, if one is given.
    fn output<'a>(&self, context: &'a Context) -> MenuOutput<'a> {
        let locale = match &self.active {
            Some(active) => context.locale_for(active),
            None => context.locale.as_str(),
        };

        MenuOutput {
            menu: context.site.menu(locale),
            open_keys: self
                .active
                .as_deref()
                .map(|active| context.site.open_keys(active)),
            icon_script_url: context.site.icon_script_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_site::bilingual_site;

    #[test]
    fn test_menu_without_active_has_no_open_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = MenuArgs { active: None };

        let json = serde_json::to_value(args.output(&context)).unwrap();

        assert!(json.get("openKeys").is_none());
        assert_eq!(json["iconScriptUrl"], "//icons.example.com/font.js");
        assert_eq!(json["menu"]["entries"][0]["key"], "/en/examples/gallery");
    }

    #[test]
    fn test_menu_with_active_adds_open_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = MenuArgs {
            active: Some("/en/examples/line/basic".to_owned()),
        };

        let json = serde_json::to_value(args.output(&context)).unwrap();

        assert_eq!(
            json["openKeys"],
            serde_json::json!(["/en/examples", "/en/examples/line"])
        );
    }

    #[test]
    fn test_menu_follows_locale_of_active_identifier() {
        let temp_dir = tempfile::tempdir().unwrap();
        let context = bilingual_site(temp_dir.path()).load().unwrap();
        let args = MenuArgs {
            active: Some("/zh/examples/line/basic".to_owned()),
        };

        let output = args.output(&context);

        let keys: Vec<_> = output.menu.leaves().map(|item| item.key.as_str()).collect();
        assert_eq!(keys, vec!["/zh/examples/gallery", "/zh/examples/line/basic"]);
    }
}
