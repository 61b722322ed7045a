//! CLI entry point for stagefront

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stagefront")]
#[command(version)]
#[command(about = "Artist marketing site server with a lightweight content manager", long_about = None)]
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
    /// Start the site server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the configured host)
        #[arg(short, long)]
        ip: Option<String>,

        /// Disable live reload of open pages after admin saves
        #[arg(long)]
        no_reload: bool,
    },

    /// Seed the content database with the default document
    Seed,

    /// Validate the stored content document
    Check,

    /// Print the reconciled content document as JSON
    Export,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "stagefront=debug,info"
    } else {
        "stagefront=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve {
            port,
            ip,
            no_reload,
        } => {
            let app = stagefront::Stagefront::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| app.config.server.host.clone());
            let port = port.unwrap_or(app.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            stagefront::server::start(&app, &ip, port, !no_reload).await?;
        }

        Commands::Seed => {
            let app = stagefront::Stagefront::new(&base_dir)?;
            let repo = app.repository().await;
            if repo.seed().await? {
                println!("Seeded storage with default content.");
            } else {
                println!("Content document already present, nothing to do.");
            }
        }

        Commands::Check => {
            let app = stagefront::Stagefront::new(&base_dir)?;
            let repo = app.repository().await;
            let document = repo.load_document().await;
            match stagefront::content::validate_document(&document) {
                Ok(_) => println!("Content is valid."),
                Err(violations) => {
                    for violation in &violations {
                        eprintln!("{violation}");
                    }
                    eprintln!("{} violation(s) found.", violations.len());
                    std::process::exit(1);
                }
            }
        }

        Commands::Export => {
            let app = stagefront::Stagefront::new(&base_dir)?;
            let repo = app.repository().await;
            let document = repo.load_document().await;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }

        Commands::Version => {
            println!("stagefront version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
