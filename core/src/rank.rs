use crate::index::InvertedIndex;
use crate::DocId;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Order `documents` by TF-IDF relevance to `query_terms`, best first.
///
/// score(d) sums, over the query terms with a posting for d, the product
/// of `term_freq / doc_length` and `collection_size / df`. The IDF is the
/// raw ratio, not its logarithm; that is a behavioral contract of this
/// scorer. A term without a posting for d contributes nothing, as does a
/// doc id missing from `doc_lengths`. Ties on score rank the smaller doc
/// id first.
pub fn rank_tf_idf(
    query_terms: &[&str],
    documents: &[DocId],
    index: &InvertedIndex,
    doc_lengths: &HashMap<DocId, usize>,
    collection_size: usize,
) -> Vec<DocId> {
    let mut scored: Vec<(f64, DocId)> = documents
        .iter()
        .map(|&doc_id| {
            (
                score(query_terms, doc_id, index, doc_lengths, collection_size),
                doc_id,
            )
        })
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });
    scored.into_iter().map(|(_, doc_id)| doc_id).collect()
}

fn score(
    query_terms: &[&str],
    doc_id: DocId,
    index: &InvertedIndex,
    doc_lengths: &HashMap<DocId, usize>,
    collection_size: usize,
) -> f64 {
    let mut total = 0.0;
    for term in query_terms {
        let Some(list) = index.get(term) else { continue };
        let Some(posting) = list.find(doc_id) else { continue };
        let Some(&doc_len) = doc_lengths.get(&doc_id) else { continue };
        if doc_len == 0 {
            continue;
        }
        let tf = posting.term_freq as f64 / doc_len as f64;
        let idf = collection_size as f64 / list.df() as f64;
        total += tf * idf;
    }
    total
}
