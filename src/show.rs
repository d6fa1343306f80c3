//! Resume retrieval by id.
//!
//! Fetches a full resume, its keyword tallies, and its raw content.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store::Store;

pub async fn run_show(config: &Config, id: i64) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = Store::new(pool);

    let doc = match store.get_document(id).await? {
        Some(doc) => doc,
        None => {
            store.close().await;
            eprintln!("Error: resume not found: {}", id);
            std::process::exit(1);
        }
    };

    let matches = store.matches_for_document(id).await?;

    println!("--- Resume ---");
    println!("id:       {}", doc.id);
    println!("file:     {}", doc.filename);
    println!("name:     {}", doc.name);
    println!("email:    {}", doc.email);
    println!("phone:    {}", doc.phone);
    println!();

    println!("--- Keyword matches ({}) ---", matches.len());
    for m in &matches {
        println!(
            "  {} (count {}, weight {}, contributes {})",
            m.keyword,
            m.count,
            m.weight,
            m.count * m.weight
        );
    }
    println!();

    println!("--- Content ---");
    println!("{}", doc.content);

    store.close().await;
    Ok(())
}
