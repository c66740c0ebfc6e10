use thiserror::Error;

/// Errors produced by the launcher library.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No words were given to build a query from.
    #[error("You did not provide me anything to search.")]
    EmptyQuery,

    #[error("invalid blocklist pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The opener program could not be started at all.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LauncherError>;
