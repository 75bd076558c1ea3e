//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// An unset variable without a default is an error. Strings without `${`
/// are returned unchanged, so bare `$` (common in URLs) is left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Lookup failure for an unset variable.
struct UnsetVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("EXHIBIT_TEST_CDN", "cdn.example.com");
        }
        let result = expand_env(
            "https://${EXHIBIT_TEST_CDN}/shot.png",
            "gallery.placeholder_screenshot",
        )
        .unwrap();
        assert_eq!(result, "https://cdn.example.com/shot.png");
        unsafe {
            std::env::remove_var("EXHIBIT_TEST_CDN");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("EXHIBIT_TEST_UNSET_ICONS");
        }
        let result =
            expand_env("${EXHIBIT_TEST_UNSET_ICONS:-//icons.js}", "icons.script_url").unwrap();
        assert_eq!(result, "//icons.js");
    }

    #[test]
    fn test_expand_missing_var_is_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("EXHIBIT_TEST_MISSING");
        }
        let err = expand_env("${EXHIBIT_TEST_MISSING}", "icons.script_url").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("EXHIBIT_TEST_MISSING"));
        assert!(err.to_string().contains("icons.script_url"));
    }

    #[test]
    fn test_expand_reports_required_var_after_default() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::remove_var("EXHIBIT_TEST_OPTIONAL_HOST");
            std::env::remove_var("EXHIBIT_TEST_REQUIRED_PATH");
        }
        let err = expand_env(
            "//${EXHIBIT_TEST_OPTIONAL_HOST:-cdn}/${EXHIBIT_TEST_REQUIRED_PATH}",
            "icons.script_url",
        )
        .unwrap_err();

        assert!(err.to_string().contains("EXHIBIT_TEST_REQUIRED_PATH"));
        assert!(!err.to_string().contains("EXHIBIT_TEST_OPTIONAL_HOST"));
    }

    #[test]
    fn test_bare_dollar_unchanged() {
        let result = expand_env("https://example.com/$path", "icons.script_url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
