//! Content loader - loads posts from the content directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{FrontMatter, HtmlSanitizer, MarkdownRenderer, Post, PostMeta};
use crate::config::SiteConfig;
use crate::Blog;

/// Loads posts from a flat directory of markdown files
pub struct ContentLoader {
    content_dir: PathBuf,
    renderer: Arc<MarkdownRenderer>,
    sanitizer: Option<Arc<HtmlSanitizer>>,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(blog: &Blog) -> Self {
        Self::with_config(&blog.content_dir, &blog.config)
    }

    /// Create a loader for an explicit directory
    pub fn with_config(content_dir: impl Into<PathBuf>, config: &SiteConfig) -> Self {
        let renderer = Arc::new(MarkdownRenderer::with_options(&config.highlight));
        let sanitizer = config
            .sanitize_html
            .then(|| Arc::new(HtmlSanitizer::new()));
        Self {
            content_dir: content_dir.into(),
            renderer,
            sanitizer,
        }
    }

    /// Load metadata for every post, newest first
    ///
    /// Any unreadable file or malformed front-matter aborts the whole listing.
    pub fn list_posts(&self) -> Result<Vec<PostMeta>> {
        let mut posts = Vec::new();

        for (id, path) in self.post_files()? {
            let content = fs::read_to_string(&path).map_err(|source| ContentError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let (fm, _) = FrontMatter::parse(&content)
                .map_err(|source| ContentError::FrontMatter { path, source })?;
            posts.push(PostMeta::from_front_matter(id, fm));
        }

        // Sort by date descending (newest first), undated posts last
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }

    /// Identifiers of every post, without reading the files
    pub fn list_post_ids(&self) -> Result<Vec<String>> {
        Ok(self.post_files()?.into_iter().map(|(id, _)| id).collect())
    }

    /// Load a single post and render its body to HTML
    pub async fn load_post(&self, id: &str) -> Result<Post> {
        let path = self.post_path(id)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::PostNotFound(id.to_string()));
            }
            Err(source) => return Err(ContentError::ReadFile { path, source }),
        };

        let (fm, body) = match FrontMatter::parse(&content) {
            Ok(parsed) => parsed,
            Err(source) => return Err(ContentError::FrontMatter { path, source }),
        };
        let body = body.to_string();
        let meta = PostMeta::from_front_matter(id, fm);

        let renderer = Arc::clone(&self.renderer);
        let sanitizer = self.sanitizer.clone();
        let content_html = tokio::task::spawn_blocking(move || {
            let html = renderer.render(&body);
            match sanitizer {
                Some(sanitizer) => sanitizer.clean(&html),
                None => html,
            }
        })
        .await
        .map_err(|e| ContentError::Markdown {
            path,
            message: e.to_string(),
        })?;

        Ok(Post { meta, content_html })
    }

    /// Resolve an id to its markdown file, rejecting anything that would
    /// escape the content directory
    fn post_path(&self, id: &str) -> Result<PathBuf> {
        if !is_valid_id(id) {
            return Err(ContentError::InvalidId(id.to_string()));
        }
        Ok(self.content_dir.join(format!("{}.md", id)))
    }

    /// Markdown files directly inside the content directory, by file name
    fn post_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let read_dir_error = |path: &Path, source: io::Error| ContentError::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(&self.content_dir)
            .map_err(|e| read_dir_error(self.content_dir.as_path(), e))?;
        if !metadata.is_dir() {
            return Err(read_dir_error(
                self.content_dir.as_path(),
                io::Error::other("not a directory"),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.content_dir.as_path()).to_path_buf();
                read_dir_error(&path, io::Error::from(e))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(id) = post_id(entry.path()) {
                files.push((id, entry.into_path()));
            }
        }

        Ok(files)
    }
}

/// Filename minus `.md`, for markdown files with UTF-8 names
fn post_id(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return None;
    }
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if is_valid_id(stem) => Some(stem.to_string()),
        Some(_) => {
            tracing::warn!("Skipping post with unusable file name: {:?}", path);
            None
        }
        None => {
            tracing::warn!("Skipping post with non UTF-8 file name: {:?}", path);
            None
        }
    }
}

/// A single path component; only the platform's own separators are rejected
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.chars().any(|c| std::path::is_separator(c) || c == '\0')
}
