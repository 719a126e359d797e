/// Split document text into terms on the single space character.
///
/// Consecutive separators yield empty terms and those are kept; the index
/// treats them like any other term. A wholly empty text yields no terms.
pub fn tokenize(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').collect()
}

/// Split a query line into terms on arbitrary whitespace, dropping empties.
pub fn query_terms(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_space() {
        assert_eq!(tokenize("cat dog cat"), vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn keeps_empty_terms_between_separators() {
        assert_eq!(tokenize("cat  dog"), vec!["cat", "", "dog"]);
    }

    #[test]
    fn empty_text_has_no_terms() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn query_terms_drop_extra_whitespace() {
        assert_eq!(query_terms("  cat \t dog "), vec!["cat", "dog"]);
    }
}
