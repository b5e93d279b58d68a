//! List posts

use anyhow::Result;

use crate::content::{ContentLoader, PostMeta};
use crate::Blog;

/// List posts or post ids
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(blog);

    match content_type {
        "post" | "posts" => {
            let posts = loader.list_posts()?;
            println!("{} posts ({}):", blog.config.title, posts.len());
            for post in &posts {
                println!("  {}", format_entry(post));
            }
        }
        "id" | "ids" => {
            for id in loader.list_post_ids()? {
                println!("{}", id);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, id", content_type);
        }
    }

    Ok(())
}

fn format_entry(post: &PostMeta) -> String {
    format!(
        "{} - {} [{}]",
        post.date
            .as_ref()
            .map(|d| d.as_str())
            .unwrap_or("(undated)"),
        post.title.as_deref().unwrap_or("(untitled)"),
        post.id
    )
}
