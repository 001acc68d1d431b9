//! CLI entry point for aiblaze

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aiblaze")]
#[command(author = "AIBlaze Team")]
#[command(version)]
#[command(about = "Content server for the AIBlaze blog", long_about = None)]
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

    /// Create a new post file
    New {
        /// Title of the new post
        title: String,

        /// Category of the new post
        #[arg(short = 'C', long, default_value = "General")]
        category: String,

        /// Promote the post on the homepage
        #[arg(short, long)]
        featured: bool,
    },

    /// Write the post bundle and sitemap into the public directory
    #[command(alias = "g")]
    Generate,

    /// Start the API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Remove generated files
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, featured, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "aiblaze=debug,tower_http=debug,info"
    } else {
        "aiblaze=info,tower_http=info"
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
            aiblaze::commands::init::init_site(&target_dir)?;
            println!("Initialized AIBlaze site in {:?}", target_dir);
        }

        Commands::New {
            title,
            category,
            featured,
        } => {
            let app = aiblaze::AiBlaze::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            app.new_post(&title, &category, featured)?;
        }

        Commands::Generate => {
            let app = aiblaze::AiBlaze::new(&base_dir)?;
            tracing::info!("Generating static files...");
            app.generate()?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            let app = aiblaze::AiBlaze::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| app.config.server.ip.clone());
            let port = port.unwrap_or(app.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            aiblaze::server::start(&app, &ip, port).await?;
        }

        Commands::Clean => {
            let app = aiblaze::AiBlaze::new(&base_dir)?;
            tracing::info!("Cleaning generated files...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = aiblaze::AiBlaze::new(&base_dir)?;
            aiblaze::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("aiblaze version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
