//! # resume-sieve CLI (`rsv`)
//!
//! The `rsv` binary is the interface for resume-sieve. It provides commands
//! for database initialization, resume ingestion, keyword vocabulary
//! management, ranked search, and maintenance.
//!
//! ## Usage
//!
//! ```bash
//! rsv --config ./config/rsv.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rsv init` | Create the SQLite database and run schema migrations |
//! | `rsv ingest <paths…>` | Decode, extract, store, and index resume files |
//! | `rsv list` | List stored resumes, newest first |
//! | `rsv show <id>` | Print a resume's fields, keyword tallies, and content |
//! | `rsv delete <id>` | Delete a resume and its match rows |
//! | `rsv keyword add <text>` | Add or reweight a vocabulary keyword |
//! | `rsv keyword list` | List the vocabulary |
//! | `rsv keyword remove <id>` | Delete a keyword and its match rows |
//! | `rsv reindex` | Re-tally every resume against the current vocabulary |
//! | `rsv search "<terms>"` | Ranked search over comma-separated terms |
//! | `rsv stats` | Database counts and size |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_sieve::{
    config, db, documents, indexer, ingest, keywords, migrate, search, show, stats,
};

/// resume-sieve CLI — a local-first resume screening and ranking tool.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/rsv.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "rsv",
    about = "resume-sieve — a local-first resume screening and ranking tool",
    version,
    long_about = "resume-sieve ingests resume files (PDF, DOCX, plain text), extracts candidate \
    contact fields with deterministic heuristics, tallies a weighted keyword vocabulary against \
    each resume, and answers ranked relevance queries from a single SQLite database."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/rsv.toml`. Database, keyword, and search
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./config/rsv.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and all required tables (documents,
    /// keywords, keyword_matches). Idempotent — running it again is safe.
    Init,

    /// Ingest resume files.
    ///
    /// Decodes each file (PDF, DOCX, or plain text), extracts the candidate's
    /// name, email, and phone, stores the resume, and tallies the keyword
    /// vocabulary against its text. Directories are walked for supported
    /// files. A failure on one file never aborts the rest of the batch.
    Ingest {
        /// Resume files or directories to ingest.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List stored resumes, newest first.
    List,

    /// Print one resume: contact fields, keyword tallies, full content.
    Show {
        /// Resume id.
        id: i64,
    },

    /// Delete a resume and its keyword match rows.
    Delete {
        /// Resume id.
        id: i64,
    },

    /// Manage the weighted keyword vocabulary.
    Keyword {
        #[command(subcommand)]
        action: KeywordAction,
    },

    /// Re-tally every stored resume against the current vocabulary.
    ///
    /// Run this after adding or reweighting keywords so previously ingested
    /// resumes catch up. Safe to repeat; tallies are replaced, not stacked.
    Reindex,

    /// Search resumes by comma-separated terms and print a ranked list.
    ///
    /// A resume qualifies when its raw text contains any term; qualifying
    /// resumes are ordered by their total weighted keyword score.
    Search {
        /// Comma-separated search terms, e.g. "Python, Django".
        query: String,

        /// Emit results as JSON instead of the human-readable listing.
        #[arg(long)]
        json: bool,

        /// Maximum number of results (defaults to `search.limit` in config).
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show database counts and size.
    Stats,
}

/// Keyword vocabulary subcommands.
#[derive(Subcommand)]
enum KeywordAction {
    /// Add a keyword, or overwrite the weight of an existing one.
    Add {
        /// Keyword text (matched case-insensitively against resume text).
        text: String,

        /// Weight from 1 to 10 (defaults to `keywords.default_weight`).
        #[arg(long)]
        weight: Option<i64>,
    },

    /// List all keywords sorted by text.
    List,

    /// Remove a keyword by id. No-op if the id does not exist.
    Remove {
        /// Keyword id.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            let pool = db::connect(&cfg).await?;
            migrate::run_migrations(&pool).await?;
            pool.close().await;
            println!("Database initialized successfully.");
        }
        Commands::Ingest { paths } => {
            ingest::run_ingest(&cfg, &paths).await?;
        }
        Commands::List => {
            documents::run_list(&cfg).await?;
        }
        Commands::Show { id } => {
            show::run_show(&cfg, id).await?;
        }
        Commands::Delete { id } => {
            documents::run_delete(&cfg, id).await?;
        }
        Commands::Keyword { action } => match action {
            KeywordAction::Add { text, weight } => {
                keywords::run_add(&cfg, &text, weight).await?;
            }
            KeywordAction::List => {
                keywords::run_list(&cfg).await?;
            }
            KeywordAction::Remove { id } => {
                keywords::run_remove(&cfg, id).await?;
            }
        },
        Commands::Reindex => {
            indexer::run_reindex(&cfg).await?;
        }
        Commands::Search { query, json, limit } => {
            search::run_search(&cfg, &query, json, limit).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
