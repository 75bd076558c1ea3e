//! YAML frontmatter parsing for content files.

use exhibit_site::Title;
use serde::Deserialize;

/// Frontmatter fields the loader uses. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Frontmatter {
    pub title: Option<Title>,
    pub order: Option<i64>,
    pub icon: Option<String>,
}

/// Split `---` delimited frontmatter from the body.
///
/// Returns `(None, content)` when the content has no complete frontmatter block.
pub(crate) fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---")
        .and_then(|rest| rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")))
    else {
        return (None, content);
    };

    // Closing delimiter starts a line
    let end = if rest.starts_with("---") {
        Some(0)
    } else {
        rest.find("\n---").map(|idx| idx + 1)
    };
    let Some(end) = end else {
        return (None, content);
    };

    let yaml = &rest[..end];
    let body = rest[end + 3..]
        .split_once('\n')
        .map_or("", |(_, body)| body);
    (Some(yaml), body)
}

/// Parse a content file into its frontmatter and body.
///
/// Files without frontmatter get default fields and the whole content as body.
///
/// # Errors
///
/// Returns an error if the frontmatter is not valid YAML for [`Frontmatter`].
pub(crate) fn parse_document(content: &str) -> Result<(Frontmatter, &str), serde_yaml::Error> {
    let (yaml, body) = split_frontmatter(content);
    let frontmatter = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)?,
        _ => Frontmatter::default(),
    };
    Ok((frontmatter, body))
}
