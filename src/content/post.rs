//! Post models

use serde::Serialize;

use super::{FrontMatter, PostDate};

/// Listing record for a post: metadata only, no body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    /// Filename without the `.md` extension
    pub id: String,

    /// Publication date
    pub date: Option<PostDate>,

    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl PostMeta {
    /// Build a record from an id and its parsed front-matter
    pub fn from_front_matter(id: impl Into<String>, fm: FrontMatter) -> Self {
        let date = fm.date().map(PostDate::new);
        Self {
            id: id.into(),
            date,
            title: fm.title,
            subtitle: fm.subtitle,
            author: fm.author,
            image: fm.image,
            description: fm.description,
        }
    }
}

/// A single post with its rendered body
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Rendered HTML content
    pub content_html: String,
}

/// Flat record handed to the page layer
///
/// Optional fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostProps {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub date: String,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Rendered HTML, injected into the page as-is
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_from_front_matter() {
        let fm = FrontMatter {
            title: Some("T".to_string()),
            date: Some("2023-01-01".to_string()),
            author: Some("Publius".to_string()),
            ..Default::default()
        };
        let meta = PostMeta::from_front_matter("hello", fm);
        assert_eq!(meta.id, "hello");
        assert_eq!(meta.title.as_deref(), Some("T"));
        assert_eq!(meta.date.as_ref().map(PostDate::as_str), Some("2023-01-01"));
        assert_eq!(meta.subtitle, None);
    }

    #[test]
    fn test_blank_date_is_missing() {
        let fm = FrontMatter {
            date: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(PostMeta::from_front_matter("x", fm).date, None);
    }

    #[test]
    fn test_props_serialize_nulls() {
        let props = PostProps {
            id: "hello".to_string(),
            title: "T".to_string(),
            subtitle: None,
            author: Some("Publius".to_string()),
            date: "2023-01-01".to_string(),
            image: None,
            description: None,
            content: "<p>Hello</p>\n".to_string(),
        };
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["subtitle"], serde_json::Value::Null);
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["title"], "T");
        assert_eq!(json["content"], "<p>Hello</p>\n");
    }
}
