use crate::DocId;
use serde::{Deserialize, Serialize};

/// One (document, term frequency) entry in a term's postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,
}

impl Posting {
    pub fn new(doc_id: DocId) -> Self {
        Self { doc_id, term_freq: 1 }
    }
}

/// Postings of a single term, kept in insertion order.
///
/// Insertion order is whatever order the builder saw the documents in; it
/// is ascending by doc id only when the collection was ingested that way.
/// The DAAT merges require ascending order, and `normalize` restores it
/// when the precondition does not already hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingsList {
    postings: Vec<Posting>,
    df: u32,
}

impl PostingsList {
    /// A list holding one posting for `doc_id` with term frequency 1.
    pub fn new(doc_id: DocId) -> Self {
        Self { postings: vec![Posting::new(doc_id)], df: 1 }
    }

    /// Push a posting for `doc_id` at the tail. The caller guarantees the
    /// doc id is not already present.
    pub fn append(&mut self, doc_id: DocId) {
        self.postings.push(Posting::new(doc_id));
        self.df += 1;
    }

    /// Linear scan from the front for the posting of `doc_id`.
    pub fn find(&self, doc_id: DocId) -> Option<&Posting> {
        self.postings.iter().find(|p| p.doc_id == doc_id)
    }

    pub fn find_mut(&mut self, doc_id: DocId) -> Option<&mut Posting> {
        self.postings.iter_mut().find(|p| p.doc_id == doc_id)
    }

    /// Number of distinct documents containing the term.
    pub fn df(&self) -> u32 {
        self.df
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Doc ids in insertion order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.postings.iter().map(|p| p.doc_id)
    }

    /// Reorder postings ascending by doc id with repeated adjacent-swap
    /// passes, shrinking the unsorted suffix each pass.
    ///
    /// Neither the index builder nor the query pipeline calls this; it is
    /// a repair operation for collections not ingested in ascending doc
    /// id order.
    pub fn normalize(&mut self) {
        let n = self.postings.len();
        for end in (1..n).rev() {
            for i in 0..end {
                if self.postings[i].doc_id > self.postings[i + 1].doc_id {
                    self.postings.swap(i, i + 1);
                }
            }
        }
    }
}
