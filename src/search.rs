//! Ranked resume search.
//!
//! Parses a comma-separated term list and prints the two-stage ranking
//! produced by [`Store::search`]: substring recall over raw content, scored
//! by each candidate's total weighted keyword occurrences.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store::Store;

pub async fn run_search(
    config: &Config,
    query: &str,
    json: bool,
    limit: Option<usize>,
) -> Result<()> {
    let terms: Vec<String> = query
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let mut hits = store.search(&terms).await?;
    hits.truncate(limit.unwrap_or(config.search.limit));

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        store.close().await;
        return Ok(());
    }

    if hits.is_empty() {
        println!("No results.");
        store.close().await;
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, hit.score, hit.name);
        println!("    email: {}", hit.email);
        println!("    phone: {}", hit.phone);
        println!("    id: {}", hit.id);
        println!();
    }

    store.close().await;
    Ok(())
}
