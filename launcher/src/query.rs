use crate::error::{LauncherError, Result};
use std::fmt;

/// Search text assembled from command-line words.
///
/// Words are joined verbatim with a single space, in order. Nothing is escaped
/// or percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Join `words` into a query. Fails with [`LauncherError::EmptyQuery`] when
    /// there are no words.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        if words.is_empty() {
            return Err(LauncherError::EmptyQuery);
        }
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Self(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words_with_single_spaces() {
        let q = SearchQuery::from_words(&["rust", "ownership", "explained"]).unwrap();
        assert_eq!(q.as_str(), "rust ownership explained");
    }

    #[test]
    fn keeps_words_verbatim() {
        // Inner whitespace and metacharacters survive untouched.
        let q = SearchQuery::from_words(&["a  b", "c&d", "$HOME"]).unwrap();
        assert_eq!(q.to_string(), "a  b c&d $HOME");
    }

    #[test]
    fn single_word_has_no_separator() {
        let q = SearchQuery::from_words(&["ferris"]).unwrap();
        assert_eq!(q.as_str(), "ferris");
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let words: Vec<String> = Vec::new();
        let err = SearchQuery::from_words(&words).unwrap_err();
        assert!(matches!(err, LauncherError::EmptyQuery));
        assert_eq!(err.to_string(), "You did not provide me anything to search.");
    }
}
