//! Core data models used throughout resume-sieve.
//!
//! These types represent the resumes, keywords, and search results that flow
//! through the ingestion and ranking pipeline. All rows carry named fields
//! rather than positional tuples.

use serde::Serialize;

/// A stored resume. Immutable after insertion; re-ingesting the same file
/// creates a new row rather than updating this one.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: i64,
    pub filename: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: String,
}

/// A weighted vocabulary entry. `keyword` is the case-sensitive upsert key;
/// occurrence counting against resume text is case-insensitive.
#[derive(Debug, Clone, Serialize)]
pub struct Keyword {
    pub id: i64,
    pub keyword: String,
    pub weight: i64,
}

/// One keyword's occurrence tally for a resume, joined with its weight.
/// Only stored when `count >= 1`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetail {
    pub keyword: String,
    pub count: i64,
    pub weight: i64,
}

/// A ranked search result: resume contact fields plus the total
/// weighted-occurrence score across the resume's entire match history.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: i64,
}
