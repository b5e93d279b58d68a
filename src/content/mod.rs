//! Content module - loads posts, parses front-matter, and renders markdown

mod date;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod sanitize;

pub use date::PostDate;
pub use error::{ContentError, Result};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostMeta, PostProps};
pub use sanitize::HtmlSanitizer;
