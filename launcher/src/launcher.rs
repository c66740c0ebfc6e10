use crate::blocklist::Blocklist;
use crate::opener::{ExitCode, SystemOpener, UrlOpener};
use crate::query::SearchQuery;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

/// Prefix every search URL starts with. The query is appended unescaped.
pub const SEARCH_ENDPOINT: &str = "https://www.youtube.com/results?search_query=";

/// Exit code reported when the opener program could not be started.
const SPAWN_FAILURE: ExitCode = 127;

/// What happened to a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The query matched the blocklist; nothing was launched.
    Refused,
    /// Dry run: the URL was computed but not opened.
    Previewed { url: String },
    /// The opener exited with status 0.
    Opened { url: String },
    /// The opener exited non-zero or could not be spawned.
    Failed { url: String, code: ExitCode },
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// Launch failures only surface as a non-zero code when `strict` is set;
    /// otherwise the diagnostic is the only signal.
    pub fn exit_code(&self, strict: bool) -> ExitCode {
        match self {
            Outcome::Failed { code, .. } if strict => *code,
            _ => 0,
        }
    }
}

/// Build the search URL for `query`.
pub fn search_url(query: &SearchQuery) -> String {
    format!("{}{}", SEARCH_ENDPOINT, query)
}

/// Checks queries against a [`Blocklist`] and opens the allowed ones.
///
/// Example
/// ```no_run
/// use query_launcher::{Launcher, SearchQuery};
/// let launcher: Launcher = Launcher::default();
/// let query = SearchQuery::from_words(&["rust", "lifetimes"]).unwrap();
/// launcher
///     .run(&query, &mut std::io::stdout(), &mut std::io::stderr())
///     .unwrap();
/// ```
pub struct Launcher<O = SystemOpener> {
    blocklist: Blocklist,
    opener: O,
    dry_run: bool,
}

impl<O: UrlOpener> Launcher<O> {
    pub fn new(blocklist: Blocklist, opener: O) -> Self {
        Self {
            blocklist,
            opener,
            dry_run: false,
        }
    }

    /// When enabled, [`Launcher::search`] stops after building the URL.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Decide what to do with `query` and do it, without printing anything.
    ///
    /// Spawns at most one process, and none for blocked queries or dry runs.
    pub fn search(&self, query: &SearchQuery) -> Outcome {
        if self.blocklist.is_blocked(query.as_str()) {
            info!(query = %query, "query refused by blocklist");
            return Outcome::Refused;
        }

        let url = search_url(query);
        debug!(%url, "built search url");
        if self.dry_run {
            return Outcome::Previewed { url };
        }

        match self.opener.open(&url) {
            Ok(0) => Outcome::Opened { url },
            Ok(code) => {
                warn!(code, %url, "url opener exited with failure");
                Outcome::Failed { url, code }
            }
            Err(err) => {
                warn!(error = %err, %url, "url opener could not be started");
                Outcome::Failed {
                    url,
                    code: SPAWN_FAILURE,
                }
            }
        }
    }

    /// Run [`Launcher::search`] and print the user-facing message for the outcome.
    pub fn run(
        &self,
        query: &SearchQuery,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Outcome> {
        let outcome = self.search(query);
        match &outcome {
            Outcome::Refused => writeln!(stdout, "No, quit now!")?,
            Outcome::Previewed { url } => writeln!(stdout, "{}", url)?,
            Outcome::Opened { .. } => writeln!(stdout, "YouTube search opened successfully.")?,
            Outcome::Failed { .. } => writeln!(stderr, "Failed to open YouTube search.")?,
        }
        Ok(outcome)
    }
}

impl Default for Launcher<SystemOpener> {
    fn default() -> Self {
        Self::new(Blocklist::default(), SystemOpener::default())
    }
}
