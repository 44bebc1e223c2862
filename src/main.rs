//! CLI entry point for aji-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aji_blog::commands;
use aji_blog::commands::query::QueryArgs;
use aji_blog::Blog;

#[derive(Parser)]
#[command(name = "aji-blog")]
#[command(version)]
#[command(about = "Search, filter and browse the AJI travel blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Use the built-in sample posts instead of the site's content
    #[arg(long, global = true)]
    demo: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Category id
        #[arg(short = 'C', long)]
        category: String,

        /// Author id
        #[arg(short, long)]
        author: String,

        /// Tags, comma separated
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List blog content
    List {
        /// Type of content to list (post, category, author, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Search, filter, sort and page through posts
    #[command(alias = "q")]
    Query {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Category id
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Sort order (date, popularity, title)
        #[arg(long)]
        sort: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<usize>,

        /// Posts per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Blog URL or query string to take parameters from
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Show a post with related posts and page metadata
    Show {
        /// Post slug
        slug: String,
    },

    /// Show blog statistics
    Stats,

    /// Check posts against the authoring rules
    Validate,

    /// Like or unlike a post
    Like {
        /// Post id
        post_id: String,
    },

    /// Remove local state such as likes
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "aji_blog=debug,info"
    } else {
        "aji_blog=info"
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

    let load = || -> Result<Blog> {
        if cli.demo {
            Blog::demo(&base_dir)
        } else {
            Blog::new(&base_dir)
        }
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            category,
            author,
            tags,
        } => {
            let blog = Blog::new(&base_dir)?;
            let path = commands::new::create_post(&blog, &title, &category, &author, &tags)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type } => {
            commands::list::run(&load()?, &r#type, cli.json)?;
        }

        Commands::Query {
            search,
            category,
            sort,
            page,
            per_page,
            url,
        } => {
            let args = QueryArgs {
                search,
                category,
                sort,
                page,
                per_page,
                url,
            };
            commands::query::run(&load()?, &args, cli.json)?;
        }

        Commands::Show { slug } => {
            commands::show::run(&load()?, &slug, cli.json)?;
        }

        Commands::Stats => {
            commands::stats::run(&load()?, cli.json)?;
        }

        Commands::Validate => {
            commands::validate::run(&load()?, cli.json)?;
        }

        Commands::Like { post_id } => {
            commands::like::run(&load()?, &post_id, cli.json)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning local state...");
            commands::clean::run(&base_dir)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("aji-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
