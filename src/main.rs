//! CLI entry point for bean-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bean-blog")]
#[command(version)]
#[command(about = "Load, list, and render markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// What to list (post, id)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// List the ids of every renderable post
    Ids,

    /// Render a single post
    Show {
        /// Post id (file name without .md)
        id: String,

        /// Print the page record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render every post and report problems
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "bean_blog=debug,info"
    } else {
        "bean_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = bean_blog::Blog::new(&base_dir)?;
            bean_blog::commands::list::run(&blog, &r#type)?;
        }

        Commands::Ids => {
            let blog = bean_blog::Blog::new(&base_dir)?;
            bean_blog::commands::list::run(&blog, "id")?;
        }

        Commands::Show { id, json } => {
            let blog = bean_blog::Blog::new(&base_dir)?;
            tracing::debug!("Rendering {} from {:?}", id, blog.content_dir);
            bean_blog::commands::show::run(&blog, &id, json).await?;
        }

        Commands::Check => {
            let blog = bean_blog::Blog::new(&base_dir)?;
            tracing::info!("Checking posts in {:?}", blog.content_dir);
            bean_blog::commands::check::run(&blog).await?;
        }

        Commands::Version => {
            println!("bean-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
