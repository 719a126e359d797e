//! In-memory inverted index with boolean document-at-a-time queries and
//! TF-IDF ranking.
//!
//! The index is built in one pass over a tokenized collection and treated
//! as read-only afterward. Query evaluation merges the query terms'
//! postings document-at-a-time for AND and OR, and the ranker orders a
//! result set by a raw-ratio TF-IDF score. File I/O and report formatting
//! live in the `searcher` binary crate, not here.

pub mod index;
pub mod postings;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub type DocId = u32;

pub use index::InvertedIndex;
pub use postings::{Posting, PostingsList};
pub use query::{QueryError, QueryOutput};
