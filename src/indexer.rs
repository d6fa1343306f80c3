//! Occurrence indexing of resume text against the keyword vocabulary.
//!
//! Each resume is tallied against a vocabulary snapshot taken once at call
//! time; later vocabulary edits do not retroactively reindex anything.
//! `rsv reindex` exists for exactly that catch-up.

use anyhow::Result;
use regex::Regex;

use crate::config::Config;
use crate::db;
use crate::models::Keyword;
use crate::store::Store;

/// Counts case-insensitive whole-word occurrences of `keyword` in `text`.
/// The keyword is escaped before boundary-wrapping, so vocabulary entries
/// containing regex metacharacters match literally.
pub fn count_occurrences(keyword: &str, text: &str) -> Result<usize> {
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?;
    Ok(pattern.find_iter(text).count())
}

/// Indexes one resume against the current vocabulary snapshot. Prior match
/// rows for the resume are cleared first, making the operation idempotent.
/// Only keywords with at least one occurrence get a row. Returns the number
/// of match rows written.
pub async fn index_document(store: &Store, document_id: i64, text: &str) -> Result<u64> {
    let vocabulary = store.list_keywords().await?;
    index_against(store, document_id, text, &vocabulary).await
}

/// Same as [`index_document`] but against an explicit vocabulary snapshot,
/// so a batch can tally many resumes without refetching the keyword list.
pub async fn index_against(
    store: &Store,
    document_id: i64,
    text: &str,
    vocabulary: &[Keyword],
) -> Result<u64> {
    store.clear_matches(document_id).await?;

    let mut written = 0u64;
    for keyword in vocabulary {
        let count = count_occurrences(&keyword.keyword, text)?;
        if count > 0 {
            store
                .insert_match(document_id, keyword.id, count as i64)
                .await?;
            written += 1;
        }
    }

    Ok(written)
}

/// Re-runs the indexer for every stored resume against the current
/// vocabulary. Used after keyword edits to bring old resumes up to date.
pub async fn run_reindex(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let vocabulary = store.list_keywords().await?;
    let documents = store.list_documents().await?;

    let mut matches_written = 0u64;
    for doc in &documents {
        matches_written += index_against(&store, doc.id, &doc.content, &vocabulary).await?;
    }

    println!("reindex");
    println!("  resumes:         {}", documents.len());
    println!("  keywords:        {}", vocabulary.len());
    println!("  matches written: {}", matches_written);
    println!("ok");

    store.close().await;
    Ok(())
}
