//! The SQLite record store.
//!
//! All persistence for resumes, the keyword vocabulary, and occurrence
//! matches goes through [`Store`]. Every query binds its parameters; keyword
//! and search-term text is never interpolated into SQL.

use anyhow::Result;
use sqlx::{Row, SqlitePool};

use crate::models::{Document, Keyword, MatchDetail, SearchHit};

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    // ============ Resumes ============

    /// Inserts a new resume row and returns its assigned id. Rows are never
    /// updated afterwards; re-ingesting a file inserts a fresh row.
    pub async fn insert_document(
        &self,
        filename: &str,
        name: &str,
        email: &str,
        phone: &str,
        content: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO documents (filename, name, email, phone, content) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(filename)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_document(&self, id: i64) -> Result<Option<Document>> {
        let row = sqlx::query(
            "SELECT id, filename, name, email, phone, content FROM documents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| document_from_row(&row)))
    }

    /// All resumes, most recently inserted first.
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT id, filename, name, email, phone, content FROM documents ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(document_from_row).collect())
    }

    /// Deletes a resume and, via cascade, its match rows. Returns whether a
    /// row existed; a missing id is not an error.
    pub async fn delete_document(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ============ Keyword vocabulary ============

    /// Upsert-by-text: inserting an existing keyword overwrites its weight
    /// and returns the existing id. Rejects empty text and weights outside
    /// [1, 10] before touching the database.
    pub async fn upsert_keyword(&self, text: &str, weight: i64) -> Result<i64> {
        let text = text.trim();
        if text.is_empty() {
            anyhow::bail!("keyword text must not be empty");
        }
        if !(1..=10).contains(&weight) {
            anyhow::bail!("keyword weight must be in [1, 10], got {}", weight);
        }

        sqlx::query(
            r#"
            INSERT INTO keywords (keyword, weight) VALUES (?, ?)
            ON CONFLICT(keyword) DO UPDATE SET weight = excluded.weight
            "#,
        )
        .bind(text)
        .bind(weight)
        .execute(&self.pool)
        .await?;

        let id: i64 = sqlx::query_scalar("SELECT id FROM keywords WHERE keyword = ?")
            .bind(text)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Removes a keyword and, via cascade, its match rows. No-op on a
    /// missing id.
    pub async fn delete_keyword(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM keywords WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// The vocabulary, sorted by keyword text ascending.
    pub async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        let rows = sqlx::query("SELECT id, keyword, weight FROM keywords ORDER BY keyword")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Keyword {
                id: row.get("id"),
                keyword: row.get("keyword"),
                weight: row.get("weight"),
            })
            .collect())
    }

    // ============ Occurrence matches ============

    pub async fn insert_match(&self, document_id: i64, keyword_id: i64, count: i64) -> Result<()> {
        sqlx::query(
            "INSERT INTO keyword_matches (document_id, keyword_id, count) VALUES (?, ?, ?)",
        )
        .bind(document_id)
        .bind(keyword_id)
        .bind(count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Drops all match rows for a resume. Run before re-indexing so that
    /// catching up with a changed vocabulary never duplicates rows.
    pub async fn clear_matches(&self, document_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM keyword_matches WHERE document_id = ?")
            .bind(document_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// A resume's keyword tallies joined with their weights, strongest
    /// contribution (`count * weight`) first.
    pub async fn matches_for_document(&self, document_id: i64) -> Result<Vec<MatchDetail>> {
        let rows = sqlx::query(
            r#"
            SELECT k.keyword, km.count, k.weight
            FROM keyword_matches km
            JOIN keywords k ON k.id = km.keyword_id
            WHERE km.document_id = ?
            ORDER BY km.count * k.weight DESC, k.keyword ASC
            "#,
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| MatchDetail {
                keyword: row.get("keyword"),
                count: row.get("count"),
                weight: row.get("weight"),
            })
            .collect())
    }

    // ============ Ranked search ============

    /// Two-stage relevance query.
    ///
    /// Stage one (recall): a resume is a candidate when its raw content
    /// contains at least one trimmed query term as a case-sensitive
    /// substring — registered keyword or not.
    ///
    /// Stage two (ranking): each candidate's score is the sum of
    /// `count * weight` over ALL of its match rows, regardless of which
    /// term gated it in. Candidates with no match rows score 0 but are
    /// still returned. Order: score descending, id ascending.
    pub async fn search(&self, terms: &[String]) -> Result<Vec<SearchHit>> {
        let terms: Vec<&str> = terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();

        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let gate = terms
            .iter()
            .map(|_| "instr(d.content, ?) > 0")
            .collect::<Vec<_>>()
            .join(" OR ");

        let sql = format!(
            r#"
            SELECT d.id, d.name, d.email, d.phone,
                   COALESCE(SUM(km.count * k.weight), 0) AS score
            FROM documents d
            LEFT JOIN keyword_matches km ON km.document_id = d.id
            LEFT JOIN keywords k ON k.id = km.keyword_id
            WHERE {}
            GROUP BY d.id
            ORDER BY score DESC, d.id ASC
            "#,
            gate
        );

        let mut query = sqlx::query(&sql);
        for term in &terms {
            query = query.bind(*term);
        }

        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| SearchHit {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                phone: row.get("phone"),
                score: row.get("score"),
            })
            .collect())
    }

    // ============ Counters ============

    pub async fn count_documents(&self) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await?)
    }

    pub async fn count_keywords(&self) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM keywords")
            .fetch_one(&self.pool)
            .await?)
    }

    pub async fn count_matches(&self) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM keyword_matches")
            .fetch_one(&self.pool)
            .await?)
    }
}

fn document_from_row(row: &sqlx::sqlite::SqliteRow) -> Document {
    Document {
        id: row.get("id"),
        filename: row.get("filename"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        content: row.get("content"),
    }
}
