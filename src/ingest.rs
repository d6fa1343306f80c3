//! Resume ingestion pipeline.
//!
//! Coordinates the full flow per file: decode → field extraction → insert →
//! occurrence indexing. A failure on one file is reported and the loop
//! continues; sibling files in the batch are never aborted.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::db;
use crate::extract;
use crate::fields;
use crate::indexer;
use crate::models::Keyword;
use crate::store::Store;

pub async fn run_ingest(config: &Config, paths: &[PathBuf]) -> Result<()> {
    let files = collect_files(paths);

    if files.is_empty() {
        println!("No resume files found.");
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    // One vocabulary snapshot for the whole batch; keyword edits made while
    // ingesting do not affect files already tallied.
    let vocabulary = store.list_keywords().await?;

    let mut processed = 0u64;
    let mut failed = 0u64;
    let mut matches_written = 0u64;

    for file in &files {
        match ingest_file(&store, file, &vocabulary).await {
            Ok((id, written)) => {
                processed += 1;
                matches_written += written;
                println!("  {} -> resume {}", file.display(), id);
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} skipped: {}", file.display(), e);
            }
        }
    }

    println!("ingest");
    println!("  files found:     {}", files.len());
    println!("  stored:          {}", processed);
    println!("  failed:          {}", failed);
    println!("  matches written: {}", matches_written);
    println!("ok");

    store.close().await;
    Ok(())
}

/// Decodes, extracts fields, stores, and indexes a single resume file.
async fn ingest_file(
    store: &Store,
    path: &Path,
    vocabulary: &[Keyword],
) -> Result<(i64, u64)> {
    let text = extract::decode(path)?;
    let contact = fields::extract(&text);

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("(unnamed)");

    let id = store
        .insert_document(filename, &contact.name, &contact.email, &contact.phone, &text)
        .await?;

    let written = indexer::index_against(store, id, &text, vocabulary).await?;
    Ok((id, written))
}

/// Expands the argument list: files are taken as-is (so unsupported formats
/// are reported per-file), directories are walked for supported extensions.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && extract::is_supported(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files
}
