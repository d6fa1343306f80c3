//! Resume listing and deletion commands.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store::Store;

/// Lists stored resumes, newest first.
pub async fn run_list(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let documents = store.list_documents().await?;

    if documents.is_empty() {
        println!("No resumes stored.");
        store.close().await;
        return Ok(());
    }

    println!(
        "{:>5}  {:<24} {:<30} {:<16} {}",
        "ID", "NAME", "EMAIL", "PHONE", "FILE"
    );
    for doc in &documents {
        println!(
            "{:>5}  {:<24} {:<30} {:<16} {}",
            doc.id, doc.name, doc.email, doc.phone, doc.filename
        );
    }

    store.close().await;
    Ok(())
}

/// Deletes a resume and its match rows. Idempotent: a missing id reports
/// but does not fail.
pub async fn run_delete(config: &Config, id: i64) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    if store.delete_document(id).await? {
        println!("Deleted resume {}.", id);
    } else {
        println!("No resume with id {}.", id);
    }

    store.close().await;
    Ok(())
}
