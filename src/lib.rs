//! # resume-sieve
//!
//! A local-first resume screening and ranking tool.
//!
//! resume-sieve ingests resume files (PDF, DOCX, plain text), extracts
//! candidate contact fields with deterministic heuristics, tallies a
//! user-maintained weighted keyword vocabulary against each resume, and
//! answers ranked relevance queries — all against a single SQLite database.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌───────────┐
//! │  Decoding   │──▶│   Pipeline    │──▶│  SQLite   │
//! │ PDF/DOCX/TXT│   │ Fields+Index │   │  (store)  │
//! └─────────────┘   └──────────────┘   └────┬──────┘
//!                                           │
//!                                           ▼
//!                                      ┌──────────┐
//!                                      │   CLI    │
//!                                      │  (rsv)   │
//!                                      └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! rsv init                          # create database
//! rsv keyword add Python --weight 8 # grow the vocabulary
//! rsv ingest ./resumes              # decode, extract, index
//! rsv search "Python, Java"         # ranked results
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`extract`] | Format-specific text decoding |
//! | [`fields`] | Contact-field heuristics |
//! | [`store`] | SQLite record store |
//! | [`indexer`] | Keyword occurrence tallying |
//! | [`ingest`] | Batch ingestion pipeline |
//! | [`search`] | Ranked relevance queries |
//! | [`documents`] | Resume listing and deletion |
//! | [`keywords`] | Vocabulary management |
//! | [`show`] | Resume detail view |
//! | [`stats`] | Database overview |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod config;
pub mod db;
pub mod documents;
pub mod extract;
pub mod fields;
pub mod indexer;
pub mod ingest;
pub mod keywords;
pub mod migrate;
pub mod models;
pub mod search;
pub mod show;
pub mod stats;
pub mod store;
