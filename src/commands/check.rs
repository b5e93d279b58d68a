//! Check every post the way a full build would

use anyhow::Result;

use crate::generator::{Generator, StaticProps};
use crate::Blog;

/// Summary of a check run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub rendered: usize,
    pub not_found: Vec<String>,
    pub long_fields: Vec<(String, &'static str)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.not_found.is_empty()
    }
}

/// Render every declared post and collect diagnostics
///
/// Read and parse failures abort the run, like a failed build.
pub async fn check(blog: &Blog) -> Result<CheckReport> {
    let generator = Generator::new(blog);
    let paths = generator.static_paths()?;
    let mut report = CheckReport::default();

    for id in paths.paths {
        match generator.static_props(&id).await {
            Ok(StaticProps::Found(props)) => {
                report.rendered += 1;
                for check in generator.length_checks(&props) {
                    if !check.is_valid() {
                        report.long_fields.push((id.clone(), check.name));
                    }
                }
            }
            Ok(StaticProps::NotFound) => report.not_found.push(id),
            Err(e) if e.is_not_found() => report.not_found.push(id),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

/// Run the check command
pub async fn run(blog: &Blog) -> Result<()> {
    let report = check(blog).await?;

    println!("Rendered {} posts", report.rendered);
    for (id, field) in &report.long_fields {
        println!("  blog/{}: {} is longer than recommended", id, field);
    }
    for id in &report.not_found {
        println!("  blog/{}: not found (missing title, date, or content)", id);
    }

    if !report.is_ok() {
        anyhow::bail!("{} posts cannot be rendered", report.not_found.len());
    }
    Ok(())
}
