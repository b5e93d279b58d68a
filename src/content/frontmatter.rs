//! Front-matter parsing

use serde::{Deserialize, Serialize};

/// Front-matter data from a post
///
/// Only the keys below are read; anything else in the block is ignored so
/// arbitrary metadata never reaches the rendered record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A block must open on the very first line with `---` and close with a
    /// line that is exactly `---` or `...`. Text without a complete block is
    /// returned untouched as the body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_opening_delimiter(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            let marker = line.trim_end_matches(['\n', '\r']);
            if marker == "---" || marker == "..." {
                let yaml_content = &rest[..offset];
                let remaining = &rest[offset + line.len()..];

                if yaml_content.trim().is_empty() {
                    return Ok((FrontMatter::default(), remaining));
                }

                let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
                return Ok((fm, remaining));
            }
            offset += line.len();
        }

        // No closing delimiter, treat as no front-matter
        Ok((FrontMatter::default(), content))
    }

    /// Title, if present and not blank
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    /// Raw date string, if present and not blank
    pub fn date(&self) -> Option<&str> {
        non_blank(&self.date)
    }
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    (first.trim_end() == "---").then_some(rest)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
