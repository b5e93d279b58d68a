//! Generator module - builds the records blog post pages are rendered from
//!
//! `static_paths` declares which posts can be pre-rendered, `static_props`
//! loads one post and validates it for the page layer.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentLoader, Post, PostProps, Result};
use crate::Blog;

/// Outcome of preparing a single post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "props", rename_all = "snake_case")]
pub enum StaticProps {
    Found(PostProps),
    NotFound,
}

impl StaticProps {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Ids that can be rendered ahead of time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<String>,
    /// Whether ids outside `paths` may still be requested
    pub fallback: bool,
}

/// Length of a metadata field against its recommended maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthCheck {
    pub name: &'static str,
    pub length: usize,
    pub limit: usize,
}

impl LengthCheck {
    /// Length is counted in characters
    pub fn new(name: &'static str, value: &str, limit: usize) -> Self {
        Self {
            name,
            length: value.chars().count(),
            limit,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.length <= self.limit
    }
}

/// Builds page records for blog posts
pub struct Generator {
    loader: ContentLoader,
    title_max_length: usize,
    description_max_length: usize,
    fallback: bool,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Self {
        Self::with_loader(ContentLoader::new(blog), &blog.config)
    }

    pub fn with_loader(loader: ContentLoader, config: &SiteConfig) -> Self {
        Self {
            loader,
            title_max_length: config.title_max_length,
            description_max_length: config.description_max_length,
            fallback: config.fallback,
        }
    }

    /// Every post id, for pre-rendering
    pub fn static_paths(&self) -> Result<StaticPaths> {
        Ok(StaticPaths {
            paths: self.loader.list_post_ids()?,
            fallback: self.fallback,
        })
    }

    /// Load one post and turn it into page props
    ///
    /// A post without a title, a date, or any rendered body is reported as
    /// not found. With fallback disabled an id missing from `static_paths`
    /// is reported the same way without touching the filesystem. Read and
    /// parse failures, a missing file included, are returned as errors.
    pub async fn static_props(&self, id: &str) -> Result<StaticProps> {
        if !self.fallback && !self.loader.list_post_ids()?.iter().any(|p| p == id) {
            tracing::debug!("blog/{}: not a declared path", id);
            return Ok(StaticProps::NotFound);
        }

        let post = self.loader.load_post(id).await?;

        let Some(props) = into_props(post) else {
            tracing::info!("blog/{}: missing title, date, or content", id);
            return Ok(StaticProps::NotFound);
        };

        tracing::info!("rendering blog/{}", id);
        for check in self.length_checks(&props) {
            report(&props.id, &check);
        }

        Ok(StaticProps::Found(props))
    }

    /// Recommended-length diagnostics for a post's title and description
    pub fn length_checks(&self, props: &PostProps) -> [LengthCheck; 2] {
        [
            LengthCheck::new("title", &props.title, self.title_max_length),
            LengthCheck::new(
                "description",
                props.description.as_deref().unwrap_or_default(),
                self.description_max_length,
            ),
        ]
    }
}

fn into_props(post: Post) -> Option<PostProps> {
    let meta = post.meta;
    let title = meta.title.filter(|t| !t.trim().is_empty())?;
    let date = meta.date?;
    if post.content_html.trim().is_empty() {
        return None;
    }

    Some(PostProps {
        id: meta.id,
        title,
        subtitle: meta.subtitle.filter(|s| !s.is_empty()),
        author: meta.author,
        date: date.as_str().to_string(),
        image: meta.image.filter(|s| !s.is_empty()),
        description: meta.description,
        content: post.content_html,
    })
}

fn report(id: &str, check: &LengthCheck) {
    if check.is_valid() {
        tracing::debug!(
            "blog/{}: {} length {} (max {})",
            id,
            check.name,
            check.length,
            check.limit
        );
    } else {
        tracing::warn!(
            "blog/{}: {} length {} exceeds {}",
            id,
            check.name,
            check.length,
            check.limit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentError;
    use std::fs;
    use tempfile::TempDir;

    fn generator(dir: &TempDir, config: SiteConfig) -> Generator {
        Generator::with_loader(ContentLoader::with_config(dir.path(), &config), &config)
    }

    fn write_post(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_found_post_props() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "hello.md",
            "---\ntitle: \"T\"\ndate: \"2023-01-01\"\nsubtitle: \"\"\nauthor: Publius\n---\nHello",
        );

        let props = generator(&dir, SiteConfig::default())
            .static_props("hello")
            .await
            .unwrap();
        let StaticProps::Found(props) = props else {
            panic!("expected a found post");
        };
        assert_eq!(props.id, "hello");
        assert_eq!(props.title, "T");
        assert_eq!(props.date, "2023-01-01");
        assert_eq!(props.subtitle, None);
        assert_eq!(props.author.as_deref(), Some("Publius"));
        assert_eq!(props.image, None);
        assert!(props.content.contains("<p>Hello</p>"));
    }

    #[tokio::test]
    async fn test_missing_title_or_date_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "untitled.md", "---\ndate: 2023-01-01\n---\nBody");
        write_post(&dir, "undated.md", "---\ntitle: Undated\n---\nBody");
        write_post(&dir, "plain.md", "Just a body");

        let generator = generator(&dir, SiteConfig::default());
        for id in ["untitled", "undated", "plain"] {
            let props = generator.static_props(id).await.unwrap();
            assert!(props.is_not_found(), "{} should be not found", id);
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "empty.md", "---\ntitle: Empty\ndate: 2023-01-01\n---\n\n");

        let props = generator(&dir, SiteConfig::default())
            .static_props("empty")
            .await
            .unwrap();
        assert_eq!(props, StaticProps::NotFound);
    }

    #[tokio::test]
    async fn test_long_title_still_renders() {
        let dir = TempDir::new().unwrap();
        let title = "x".repeat(80);
        write_post(
            &dir,
            "long.md",
            &format!("---\ntitle: {}\ndate: 2023-01-01\n---\nBody", title),
        );

        let generator = generator(&dir, SiteConfig::default());
        let StaticProps::Found(props) = generator.static_props("long").await.unwrap() else {
            panic!("expected a found post");
        };
        let [title_check, description_check] = generator.length_checks(&props);
        assert!(!title_check.is_valid());
        assert_eq!(title_check.length, 80);
        assert!(description_check.is_valid());
        assert_eq!(description_check.length, 0);
    }

    #[tokio::test]
    async fn test_missing_file_propagates_with_fallback() {
        let dir = TempDir::new().unwrap();

        let err = generator(&dir, SiteConfig::default())
            .static_props("ghost")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::PostNotFound(ref id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_undeclared_id_without_fallback_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "real.md", "---\ntitle: Real\ndate: 2023-01-01\n---\nBody");

        let config = SiteConfig {
            fallback: false,
            ..Default::default()
        };
        let generator = generator(&dir, config);
        for id in ["ghost", "../real", ""] {
            let props = generator.static_props(id).await.unwrap();
            assert!(props.is_not_found(), "{:?} should be not found", id);
        }
        let props = generator.static_props("real").await.unwrap();
        assert!(matches!(props, StaticProps::Found(ref p) if p.title == "Real"));
    }

    #[tokio::test]
    async fn test_malformed_post_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "broken.md", "---\ntitle: [x\n---\nBody");

        let err = generator(&dir, SiteConfig::default())
            .static_props("broken")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_static_paths() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "a.md", "---\ntitle: A\n---\n");
        write_post(&dir, "b.md", "---\ntitle: B\n---\n");

        let paths = generator(&dir, SiteConfig::default())
            .static_paths()
            .unwrap();
        assert_eq!(paths.paths, vec!["a".to_string(), "b".to_string()]);
        assert!(paths.fallback);
    }

    #[test]
    fn test_length_check_counts_chars() {
        let check = LengthCheck::new("title", "héllo", 5);
        assert_eq!(check.length, 5);
        assert!(check.is_valid());
        assert!(!LengthCheck::new("title", "123456", 5).is_valid());
    }
}
