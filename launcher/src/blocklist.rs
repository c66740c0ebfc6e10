use crate::error::{LauncherError, Result};
use regex::{Regex, RegexBuilder};

/// Pattern refused by the default blocklist.
pub const DEFAULT_PATTERN: &str = "(League of Legends|LoL)";

/// Case-insensitive pattern that queries are checked against before launching.
///
/// A match anywhere in the query counts, so `"lollipop"` is refused just like
/// `"LoL"`.
#[derive(Debug, Clone)]
pub struct Blocklist {
    re: Regex,
}

impl Blocklist {
    /// Compile a custom blocklist pattern. Matching ignores case.
    pub fn new(pattern: &str) -> Result<Self> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| LauncherError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { re })
    }

    pub fn is_blocked(&self, query: &str) -> bool {
        self.re.is_match(query)
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        // DEFAULT_PATTERN is a fixed literal alternation, always valid.
        Self {
            re: RegexBuilder::new(DEFAULT_PATTERN)
                .case_insensitive(true)
                .build()
                .expect("default blocklist pattern compiles"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_any_letter_case() {
        let bl = Blocklist::default();
        for q in [
            "League of Legends",
            "league of legends montage",
            "best LEAGUE OF LEGENDS plays",
            "LoL",
            "lol",
            "funny LOL moments",
        ] {
            assert!(bl.is_blocked(q), "expected {q:?} to be blocked");
        }
    }

    #[test]
    fn blocks_substring_matches() {
        let bl = Blocklist::default();
        assert!(bl.is_blocked("lollipop recipe"));
        assert!(bl.is_blocked("trolololo"));
    }

    #[test]
    fn lets_other_queries_through() {
        let bl = Blocklist::default();
        for q in ["rust tutorial", "league of extraordinary gentlemen", "l o l", "legends"] {
            assert!(!bl.is_blocked(q), "expected {q:?} to pass");
        }
    }

    #[test]
    fn custom_pattern_ignores_case() {
        let bl = Blocklist::new("dota").unwrap();
        assert!(bl.is_blocked("DoTa 2 highlights"));
        assert!(!bl.is_blocked("lol"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = Blocklist::new("(unclosed").unwrap_err();
        assert!(matches!(err, LauncherError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }
}
