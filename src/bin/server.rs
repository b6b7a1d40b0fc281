//! Biblio HTTP server
//!
//! Run with: biblio-server

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio::server::BiblioServer;
use biblio::{BookEngine, EngineConfig};

#[derive(Parser, Debug)]
#[command(name = "biblio-server")]
#[command(about = "HTTP server for book vibes and bookseller chat")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "BIBLIO_PORT", default_value = "5000")]
    port: u16,

    /// JSON mood catalog enabling enhanced notes and mood tags
    #[arg(long, env = "BIBLIO_MOOD_CATALOG")]
    mood_catalog: Option<String>,

    /// Skip enhanced notes even when a catalog is loaded
    #[arg(long, env = "BIBLIO_DISABLE_ENHANCED")]
    disable_enhanced: bool,

    /// Emit logs as JSON
    #[arg(long, env = "BIBLIO_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::from_default_env());
    if args.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    // Expand ~ in path
    let mood_catalog_path = args
        .mood_catalog
        .map(|p| PathBuf::from(shellexpand::tilde(&p).to_string()));

    let config = EngineConfig {
        mood_catalog_path,
        enable_enhanced_notes: !args.disable_enhanced,
        ..EngineConfig::default()
    };

    let engine = Arc::new(BookEngine::from_config(&config));
    tracing::info!(
        mood_analysis = ?engine.mood_analysis(),
        version = biblio::VERSION,
        "Book engine ready"
    );

    BiblioServer::new(engine, args.port).start().await?;
    Ok(())
}
