//! CLI entry point for postdex

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postdex")]
#[command(version)]
#[command(about = "Load, index and export markdown blog posts", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// List posts or tags
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post
    Show {
        /// Post identifier (file name without extension)
        slug: String,

        /// Also print the rendered HTML body
        #[arg(long)]
        html: bool,
    },

    /// Export post and tag data to the public directory
    #[command(alias = "e")]
    Export,

    /// Remove the public directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "postdex=debug,info"
    } else {
        "postdex=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = postdex::Site::new(&base_dir)?;
            postdex::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { slug, html } => {
            let site = postdex::Site::new(&base_dir)?;
            postdex::commands::show::run(&site, &slug, html)?;
        }

        Commands::Export => {
            let site = postdex::Site::new(&base_dir)?;
            tracing::info!("Exporting to {:?}", site.public_dir);
            let summary = site.export()?;
            println!(
                "Exported {} posts and {} tags to {}",
                summary.posts,
                summary.tags,
                site.public_dir.display()
            );
        }

        Commands::Clean => {
            let site = postdex::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("postdex version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
