//! Keyword vocabulary management commands.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store::Store;

/// Upserts a keyword. The weight falls back to `[keywords].default_weight`
/// when not given on the command line.
pub async fn run_add(config: &Config, text: &str, weight: Option<i64>) -> Result<()> {
    let weight = weight.unwrap_or(config.keywords.default_weight);

    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let id = store.upsert_keyword(text, weight).await?;
    println!("Keyword '{}' saved with weight {} (id {}).", text.trim(), weight, id);

    store.close().await;
    Ok(())
}

/// Lists the vocabulary, sorted by keyword text.
pub async fn run_list(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let keywords = store.list_keywords().await?;

    if keywords.is_empty() {
        println!("No keywords defined.");
        store.close().await;
        return Ok(());
    }

    println!("{:>5}  {:<32} {}", "ID", "KEYWORD", "WEIGHT");
    for kw in &keywords {
        println!("{:>5}  {:<32} {}", kw.id, kw.keyword, kw.weight);
    }

    store.close().await;
    Ok(())
}

/// Removes a keyword and its match rows. Idempotent on missing ids.
pub async fn run_remove(config: &Config, id: i64) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    store.delete_keyword(id).await?;
    println!("Removed keyword {} (if it existed).", id);

    store.close().await;
    Ok(())
}
