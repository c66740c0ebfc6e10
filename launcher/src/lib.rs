//! A tiny command-line search launcher.
//!
//! The crate turns a list of words into a search query, refuses queries that
//! match a blocklist, and hands the resulting search URL to the operating
//! system's "open in default browser" command.
//!
//! The main entry point is [`Launcher`], which combines a [`Blocklist`] with a
//! pluggable [`UrlOpener`]. [`SystemOpener`] spawns the platform command; tests
//! and embedders can provide their own opener instead.

mod blocklist;
mod error;
mod launcher;
pub mod opener;
mod query;

pub use blocklist::Blocklist;
pub use error::{LauncherError, Result};
pub use launcher::{Launcher, Outcome, SEARCH_ENDPOINT, search_url};
pub use opener::{ExitCode, Platform, SystemOpener, UrlOpener};
pub use query::SearchQuery;
