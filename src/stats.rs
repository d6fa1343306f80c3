//! Database statistics overview.
//!
//! A quick summary of what's stored: resume, keyword, and match counts plus
//! the database size. Gives confidence that ingestion and indexing are
//! working as expected.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store::Store;

pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let documents = store.count_documents().await?;
    let keywords = store.count_keywords().await?;
    let matches = store.count_matches().await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("resume-sieve — Database Stats");
    println!("=============================");
    println!();
    println!("  Database:  {}", config.db.path.display());
    println!("  Size:      {}", format_bytes(db_size));
    println!();
    println!("  Resumes:   {}", documents);
    println!("  Keywords:  {}", keywords);
    println!("  Matches:   {}", matches);
    println!();

    store.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
