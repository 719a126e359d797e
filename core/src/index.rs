use crate::postings::PostingsList;
use crate::tokenizer::tokenize;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Term to postings mapping, built in one pass and read-only afterward.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingsList>,
}

impl InvertedIndex {
    /// Build the index from `(doc_id, text)` pairs in input order.
    ///
    /// Each term's postings end up in first-seen document order, so they
    /// are ascending by doc id only if the collection was. A repeat
    /// occurrence of a term within a document bumps the stored term
    /// frequency instead of adding a posting. The scan for an existing
    /// posting is a linear walk, matching the O(n) `find` contract of
    /// `PostingsList`.
    pub fn build(collection: &[(DocId, String)]) -> Self {
        let mut terms: HashMap<String, PostingsList> = HashMap::new();
        for (doc_id, text) in collection {
            for term in tokenize(text) {
                match terms.get_mut(term) {
                    None => {
                        terms.insert(term.to_string(), PostingsList::new(*doc_id));
                    }
                    Some(list) => match list.find_mut(*doc_id) {
                        Some(posting) => posting.term_freq += 1,
                        None => list.append(*doc_id),
                    },
                }
            }
        }
        tracing::debug!(
            num_docs = collection.len(),
            num_terms = terms.len(),
            "built inverted index"
        );
        Self { terms }
    }

    pub fn get(&self, term: &str) -> Option<&PostingsList> {
        self.terms.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> Vec<(DocId, String)> {
        vec![
            (1, "cat dog cat".to_string()),
            (2, "dog bird".to_string()),
            (3, "cat bird".to_string()),
        ]
    }

    #[test]
    fn builds_postings_with_term_frequencies() {
        let index = InvertedIndex::build(&sample_collection());
        assert_eq!(index.len(), 3);

        let cat = index.get("cat").unwrap();
        assert_eq!(cat.df(), 2);
        assert_eq!(cat.doc_ids().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(cat.find(1).unwrap().term_freq, 2);
        assert_eq!(cat.find(3).unwrap().term_freq, 1);

        let dog = index.get("dog").unwrap();
        assert_eq!(dog.df(), 2);
        assert_eq!(dog.doc_ids().collect::<Vec<_>>(), vec![1, 2]);

        let bird = index.get("bird").unwrap();
        assert_eq!(bird.doc_ids().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn build_is_deterministic() {
        let collection = sample_collection();
        assert_eq!(
            InvertedIndex::build(&collection),
            InvertedIndex::build(&collection)
        );
    }

    #[test]
    fn postings_keep_insertion_order_for_out_of_order_collections() {
        let collection = vec![
            (9, "cat".to_string()),
            (2, "cat".to_string()),
            (5, "cat".to_string()),
        ];
        let index = InvertedIndex::build(&collection);
        let cat = index.get("cat").unwrap();
        assert_eq!(cat.doc_ids().collect::<Vec<_>>(), vec![9, 2, 5]);
    }

    #[test]
    fn empty_text_contributes_no_terms() {
        let collection = vec![(1, String::new()), (2, "cat".to_string())];
        let index = InvertedIndex::build(&collection);
        assert_eq!(index.len(), 1);
        assert!(index.contains("cat"));
    }

    #[test]
    fn consecutive_spaces_index_the_empty_term() {
        let collection = vec![(1, "cat  dog".to_string())];
        let index = InvertedIndex::build(&collection);
        assert!(index.contains(""));
        assert_eq!(index.get("").unwrap().df(), 1);
    }

    #[test]
    fn df_matches_posting_count_for_every_term() {
        let index = InvertedIndex::build(&sample_collection());
        for term in index.terms() {
            let list = index.get(term).unwrap();
            assert_eq!(list.df() as usize, list.len());
        }
    }
}
