use crate::index::InvertedIndex;
use crate::postings::PostingsList;
use crate::DocId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A query term with no postings aborts evaluation of the whole query
    /// rather than being treated as an empty list.
    #[error("term not found in index: {term}")]
    TermNotFound { term: String },
    #[error("query has no terms")]
    EmptyQuery,
}

/// Result documents of a boolean merge plus the comparisons it spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub results: Vec<DocId>,
    pub comparisons: u64,
}

/// Doc ids of one term in insertion order, for postings retrieval.
pub fn postings_of(term: &str, index: &InvertedIndex) -> Result<Vec<DocId>, QueryError> {
    let list = index
        .get(term)
        .ok_or_else(|| QueryError::TermNotFound { term: term.to_string() })?;
    Ok(list.doc_ids().collect())
}

/// Document-at-a-time boolean AND over the terms' postings.
///
/// Every involved list must be ascending and duplicate-free by doc id;
/// the builder does not guarantee that on its own (see
/// [`PostingsList::normalize`]).
///
/// Each round tests the first cursor's doc id against every other cursor,
/// advancing the smaller side, and emits the doc id when all pairs match.
/// Every pairwise test performed counts one comparison, including a test
/// whose advance exhausts a cursor; the merge stops at the boundary check
/// before the next test would read past the end of a list, so later pairs
/// of a round are still tested after a non-head cursor runs out.
pub fn daat_and(terms: &[&str], index: &InvertedIndex) -> Result<QueryOutput, QueryError> {
    let lists = resolve(terms, index)?;
    let mut results = Vec::new();
    let mut comparisons = 0u64;

    // single-term shortcut: the whole list, no comparisons
    if lists.len() == 1 {
        results.extend(lists[0].doc_ids());
        return Ok(QueryOutput { results, comparisons });
    }

    let mut cursors = vec![0usize; lists.len()];
    'merge: loop {
        let mut matched = 0usize;
        for i in 1..lists.len() {
            // boundary check in place of dereferencing an exhausted cursor
            if cursors[0] >= lists[0].len() || cursors[i] >= lists[i].len() {
                break 'merge;
            }
            let head = lists[0].postings()[cursors[0]].doc_id;
            let other = lists[i].postings()[cursors[i]].doc_id;
            if head < other {
                cursors[0] += 1;
            } else if head > other {
                cursors[i] += 1;
            } else {
                matched += 1;
            }
            comparisons += 1;
        }
        if matched == lists.len() - 1 {
            results.push(lists[0].postings()[cursors[0]].doc_id);
            for cursor in cursors.iter_mut() {
                *cursor += 1;
            }
        }
    }
    Ok(QueryOutput { results, comparisons })
}

/// Document-at-a-time boolean OR over the terms' postings.
///
/// Same ascending, duplicate-free precondition as [`daat_and`]. Each
/// round scans the live cursors for the minimum doc id (one comparison
/// per cursor past the first), emits it once, advances every cursor that
/// sat at the minimum, and drops exhausted cursors.
pub fn daat_or(terms: &[&str], index: &InvertedIndex) -> Result<QueryOutput, QueryError> {
    let lists = resolve(terms, index)?;
    let mut results = Vec::new();
    let mut comparisons = 0u64;

    if lists.len() == 1 {
        results.extend(lists[0].doc_ids());
        return Ok(QueryOutput { results, comparisons });
    }

    let mut cursors: Vec<(&PostingsList, usize)> = lists.iter().map(|list| (*list, 0)).collect();
    while !cursors.is_empty() {
        let mut min_doc = cursors[0].0.postings()[cursors[0].1].doc_id;
        for (list, pos) in cursors.iter().skip(1) {
            let doc = list.postings()[*pos].doc_id;
            if doc < min_doc {
                min_doc = doc;
            }
            comparisons += 1;
        }
        results.push(min_doc);
        cursors.retain_mut(|(list, pos)| {
            if list.postings()[*pos].doc_id == min_doc {
                *pos += 1;
            }
            *pos < list.len()
        });
    }
    Ok(QueryOutput { results, comparisons })
}

fn resolve<'a>(
    terms: &[&str],
    index: &'a InvertedIndex,
) -> Result<Vec<&'a PostingsList>, QueryError> {
    if terms.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    terms
        .iter()
        .map(|term| {
            index
                .get(term)
                .ok_or_else(|| QueryError::TermNotFound { term: term.to_string() })
        })
        .collect()
}
