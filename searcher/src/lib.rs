use anyhow::{bail, Context, Result};
use searchcore::query::{daat_and, daat_or, postings_of};
use searchcore::rank::rank_tf_idf;
use searchcore::tokenizer::{query_terms, tokenize};
use searchcore::{DocId, InvertedIndex};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// A parsed corpus plus the statistics the ranker needs.
#[derive(Debug)]
pub struct Corpus {
    pub collection: Vec<(DocId, String)>,
    pub doc_lengths: HashMap<DocId, usize>,
}

impl Corpus {
    pub fn collection_size(&self) -> usize {
        self.collection.len()
    }
}

/// Parse a tab-separated corpus, one `doc_id<TAB>text` row per line.
///
/// A row without exactly two fields, or with an unparsable doc id, is a
/// fatal error; there is no best-effort recovery of partial rows.
pub fn parse_corpus(input: &str) -> Result<Corpus> {
    let mut collection = Vec::new();
    let mut doc_lengths = HashMap::new();
    for (idx, line) in input.lines().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            bail!(
                "corpus line {}: expected `doc_id<TAB>text`, found {} field(s)",
                idx + 1,
                fields.len()
            );
        }
        let doc_id: DocId = fields[0]
            .trim()
            .parse()
            .with_context(|| format!("corpus line {}: bad document id {:?}", idx + 1, fields[0]))?;
        let text = fields[1].to_string();
        doc_lengths.insert(doc_id, tokenize(&text).len());
        collection.push((doc_id, text));
    }
    Ok(Corpus { collection, doc_lengths })
}

/// Run every query against the corpus and return the report text.
///
/// Per query the report carries, in order: one `GetPostings` section per
/// term, the `DaatAnd` section, a `TF-IDF` ranking of the AND results,
/// the `DaatOr` section, and a `TF-IDF` ranking of the OR results.
/// Consecutive queries are separated by a blank line.
pub fn run(corpus_text: &str, queries_text: &str) -> Result<String> {
    let corpus = parse_corpus(corpus_text)?;
    let index = InvertedIndex::build(&corpus.collection);
    tracing::info!(
        num_docs = corpus.collection_size(),
        num_terms = index.len(),
        "index ready"
    );

    let queries: Vec<Vec<&str>> = queries_text
        .lines()
        .map(query_terms)
        .filter(|terms| !terms.is_empty())
        .collect();

    let mut report = String::new();
    for (i, terms) in queries.iter().enumerate() {
        if i > 0 {
            report.push('\n');
        }
        write_query_report(&mut report, terms, &index, &corpus)
            .with_context(|| format!("evaluating query {:?}", terms.join(" ")))?;
    }
    Ok(report)
}

/// File-path front end over [`run`], used by the binary.
pub fn run_files(corpus: &Path, queries: &Path, output: &Path) -> Result<()> {
    let corpus_text = fs::read_to_string(corpus)
        .with_context(|| format!("reading corpus {}", corpus.display()))?;
    let queries_text = fs::read_to_string(queries)
        .with_context(|| format!("reading queries {}", queries.display()))?;
    let report = run(&corpus_text, &queries_text)?;
    fs::write(output, report)
        .with_context(|| format!("writing report {}", output.display()))?;
    tracing::info!(output = %output.display(), "report written");
    Ok(())
}

fn write_query_report(
    out: &mut String,
    terms: &[&str],
    index: &InvertedIndex,
    corpus: &Corpus,
) -> Result<()> {
    for term in terms {
        let ids = postings_of(term, index)?;
        write!(out, "GetPostings\n{}\nPostings list: {}\n", term, join_ids(&ids))?;
    }

    let and = daat_and(terms, index)?;
    write!(
        out,
        "DaatAnd\n{}\nResults: {}\nNumber of documents in results: {}\nNumber of comparisons: {}\n",
        terms.join(" "),
        ids_or_empty(&and.results),
        and.results.len(),
        and.comparisons
    )?;
    let ranked = rank_tf_idf(
        terms,
        &and.results,
        index,
        &corpus.doc_lengths,
        corpus.collection_size(),
    );
    write!(out, "TF-IDF\nResults: {}\n", ids_or_empty(&ranked))?;

    let or = daat_or(terms, index)?;
    write!(
        out,
        "DaatOr\n{}\nResults: {}\nNumber of documents in results: {}\nNumber of comparisons: {}\n",
        terms.join(" "),
        ids_or_empty(&or.results),
        or.results.len(),
        or.comparisons
    )?;
    let ranked = rank_tf_idf(
        terms,
        &or.results,
        index,
        &corpus.doc_lengths,
        corpus.collection_size(),
    );
    write!(out, "TF-IDF\nResults: {}\n", ids_or_empty(&ranked))?;
    Ok(())
}

fn join_ids(ids: &[DocId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ids_or_empty(ids: &[DocId]) -> String {
    if ids.is_empty() {
        "empty".to_string()
    } else {
        join_ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_rows() {
        let corpus = parse_corpus("1\tcat dog cat\n2\tdog bird\n").unwrap();
        assert_eq!(corpus.collection_size(), 2);
        assert_eq!(corpus.collection[0], (1, "cat dog cat".to_string()));
        assert_eq!(corpus.doc_lengths[&1], 3);
        assert_eq!(corpus.doc_lengths[&2], 2);
    }

    #[test]
    fn rejects_rows_with_wrong_field_count() {
        let err = parse_corpus("1\tcat\textra\n").unwrap_err();
        assert!(err.to_string().contains("corpus line 1"));
        assert!(parse_corpus("no tabs here\n").is_err());
    }

    #[test]
    fn rejects_non_numeric_doc_ids() {
        let err = parse_corpus("one\tcat dog\n").unwrap_err();
        assert!(format!("{err:#}").contains("bad document id"));
    }

    #[test]
    fn empty_document_text_has_length_zero() {
        let corpus = parse_corpus("5\t\n").unwrap();
        assert_eq!(corpus.doc_lengths[&5], 0);
    }
}
