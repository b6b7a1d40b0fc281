//! Biblio CLI
//!
//! One-shot access to the book engine from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio::intelligence::IntentCategory;
use biblio::{BookEngine, EngineConfig};

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "Book vibes and bookseller chat CLI")]
#[command(version)]
struct Cli {
    /// JSON mood catalog enabling enhanced notes and mood tags
    #[arg(long, env = "BIBLIO_MOOD_CATALOG")]
    mood_catalog: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a vibe note for a book description
    Note {
        /// Book description
        description: String,
        /// Book title
        #[arg(short, long)]
        title: Option<String>,
        /// Book author
        #[arg(short, long)]
        author: Option<String>,
    },
    /// Ask the bookseller something
    Chat {
        /// Message to send
        message: String,
    },
    /// Look up mood tags for a book
    Tags {
        /// Book title
        title: String,
        /// Book author
        #[arg(short, long)]
        author: Option<String>,
    },
    /// Adapt a recommendation query
    Query {
        /// Search query
        query: String,
    },
    /// List chat intents in priority order
    Intents,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Expand ~ in path
    let config = EngineConfig {
        mood_catalog_path: cli
            .mood_catalog
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).to_string())),
        ..EngineConfig::default()
    };
    let engine = BookEngine::from_config(&config);

    match cli.command {
        Commands::Note {
            description,
            title,
            author,
        } => {
            let outcome = engine.generate_book_note_detailed(
                &description,
                title.as_deref(),
                author.as_deref(),
            );
            if cli.json {
                println!(
                    "{}",
                    json!({ "vibe": outcome.vibe, "source": outcome.source })
                );
            } else {
                println!("{}", outcome.vibe);
            }
        }
        Commands::Chat { message } => {
            let intent = engine.classify_intent(&message);
            let response = engine.classify_and_respond(&message, &[]);
            if cli.json {
                println!("{}", json!({ "intent": intent, "response": response }));
            } else {
                println!("{}", response);
            }
        }
        Commands::Tags { title, author } => {
            let tags = engine.get_mood_tags_safe(&title, author.as_deref());
            if cli.json {
                println!("{}", json!({ "tags": tags }));
            } else if tags.is_empty() {
                println!("No mood tags found.");
            } else {
                println!("{}", tags.join(", "));
            }
        }
        Commands::Query { query } => {
            let adapted = engine.adapt_query(&query);
            if cli.json {
                println!("{}", json!({ "query": adapted }));
            } else {
                println!("{}", adapted);
            }
        }
        Commands::Intents => {
            for (i, intent) in IntentCategory::ALL.iter().enumerate() {
                let triggers = intent.triggers();
                if triggers.is_empty() {
                    println!("{:2}. {:<12} (no match)", i + 1, intent.as_str());
                } else {
                    println!("{:2}. {:<12} {}", i + 1, intent.as_str(), triggers.join(", "));
                }
            }
        }
    }

    Ok(())
}
