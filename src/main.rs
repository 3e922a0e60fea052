//! CLI entry point for pagesmith

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagesmith::commands::{init, list, new, show};
use pagesmith::Site;

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(version)]
#[command(about = "Content loading and markdown rendering for static sites", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new page
    New {
        /// Title of the new page
        title: String,

        /// Mark the page as a draft
        #[arg(long)]
        draft: bool,

        /// Public URL of the page
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List the published pages of a collection
    #[command(alias = "ls")]
    List {
        /// Collection directory
        #[arg(default_value = "content")]
        dir: String,
    },

    /// Render an index page, e.g. content/_index.md
    Show {
        /// Path or content-root relative reference
        reference: String,

        /// Print front-matter and HTML as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a regular page by slug
    Page {
        /// Page slug, e.g. about
        slug: String,

        /// Print front-matter and HTML as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagesmith=debug,info"
    } else {
        "pagesmith=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            let written = init::init_site(&target_dir)?;
            println!(
                "Initialized site in {:?} ({} files written)",
                target_dir,
                written.len()
            );
        }

        Commands::New { title, draft, url } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Creating new page with title: {}", title);
            let path = new::create_page(
                &site,
                &new::NewPage {
                    title: &title,
                    draft,
                    url: url.as_deref(),
                },
            )?;
            println!("Created {:?}", path);
        }

        Commands::List { dir } => {
            let site = Site::new(&base_dir)?;
            list::run(&site, &dir)?;
        }

        Commands::Show { reference, json } => {
            let site = Site::new(&base_dir)?;
            show::run(&site, show::Target::ListPage(&reference), json)?;
        }

        Commands::Page { slug, json } => {
            let site = Site::new(&base_dir)?;
            show::run(&site, show::Target::RegularPage(&slug), json)?;
        }

        Commands::Version => {
            println!("pagesmith version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
