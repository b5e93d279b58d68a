//! Render a single post

use anyhow::Result;

use crate::content::PostProps;
use crate::generator::{Generator, StaticProps};
use crate::Blog;

/// Print the page record for one post, or `not found`
pub async fn run(blog: &Blog, id: &str, json: bool) -> Result<()> {
    let props = Generator::new(blog).static_props(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&props)?);
        return Ok(());
    }

    match props {
        StaticProps::Found(props) => print!("{}", format_props(&props)),
        StaticProps::NotFound => println!("blog/{}: not found", id),
    }

    Ok(())
}

fn format_props(props: &PostProps) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", props.title));
    if let Some(subtitle) = &props.subtitle {
        out.push_str(&format!("## {}\n", subtitle));
    }
    out.push_str(&format!(
        "{} · {}\n",
        props.author.as_deref().unwrap_or("Anonymous"),
        props.date
    ));
    if let Some(image) = &props.image {
        out.push_str(&format!("image: {}\n", image));
    }
    if let Some(description) = &props.description {
        out.push_str(&format!("description: {}\n", description));
    }
    out.push('\n');
    out.push_str(&props.content);
    if !props.content.ends_with('\n') {
        out.push('\n');
    }
    out
}
