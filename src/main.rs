//! StudyDesk CLI
//!
//! Run with: cargo run -- serve
//!
//! Environment variables:
//! - `STUDYDESK_HOST`, `STUDYDESK_PORT`: Address to bind (default: 127.0.0.1:8084)
//! - `STUDYDESK_SITE_DIR`: Static site directory (default: ./site)
//! - `STUDYDESK_LOG_LEVEL`, `STUDYDESK_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directive, overrides the level

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studydesk::config::{generate_default_config, Config, LoggingConfig};
use studydesk::server::{serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "studydesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the StudyDesk static site for local development")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the site (default)
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding the pages and fragments
        #[arg(long)]
        site_dir: Option<PathBuf>,
    },

    /// Print a default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
        site_dir: None,
    }) {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Serve {
            config,
            host,
            port,
            site_dir,
        } => {
            // The real subscriber depends on the loaded config, so anything
            // logged while loading goes to a plain stderr one.
            let mut config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
                match config {
                    Some(path) => Config::load_with_env(&path),
                    None => Ok(Config::load_default()),
                }
            })?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(site_dir) = site_dir {
                config.server.site_dir = site_dir;
            }

            init_logging(&config.logging);
            tracing::info!("Starting StudyDesk v{}", env!("CARGO_PKG_VERSION"));

            if !config.server.site_dir.is_dir() {
                tracing::warn!("Site directory {:?} does not exist", config.server.site_dir);
            }

            serve(AppState::new(config.server)).await?;
            Ok(())
        }
    }
}

fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt().with_writer(std::io::stderr).finish()
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("studydesk={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
