//! Keyword search over a read-only product catalog.
//!
//! The search page receives its term through the `q` query parameter and
//! looks it up in an injected [`CatalogLookup`]. The storefront ships a
//! fixed list of products, modeled by [`StaticCatalog`], which can also be
//! loaded from a JSON file.
//!
//! Matching is a case-insensitive substring test against the product name
//! or its category. Finding nothing is a normal outcome that renders the
//! "no results" block.

use std::path::Path;

use game_mania_core::CatalogEntry;
use thiserror::Error;
use tracing::instrument;

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of entries.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A read-only product list that can be searched by term.
pub trait CatalogLookup {
    /// Entries whose name or category contains `term`, ignoring case, in
    /// catalog order.
    fn search(&self, term: &str) -> Vec<CatalogEntry>;
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    /// Create a catalog from `entries`.
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)?;
        tracing::debug!(entries = entries.len(), "catalog loaded");
        Ok(Self::new(entries))
    }

    /// Every entry in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl CatalogLookup for StaticCatalog {
    #[instrument(skip(self))]
    fn search(&self, term: &str) -> Vec<CatalogEntry> {
        let needle = term.to_lowercase();
        let results: Vec<CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches_lowercase(&needle))
            .cloned()
            .collect();
        tracing::debug!(matches = results.len(), "catalog searched");
        results
    }
}

/// Search page query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The search term, trimmed and non-empty.
    pub term: String,
}

impl SearchQuery {
    /// Query parameter carrying the search term.
    pub const PARAM: &'static str = "q";

    /// Read the term from a URL query string such as `q=rtx+4070`.
    ///
    /// A leading `?` is accepted. Returns `None` when the parameter is
    /// missing or blank, in which case the page shows no search.
    #[must_use]
    pub fn from_query_string(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == Self::PARAM)
            .map(|(_, value)| value.trim().to_owned())
            .filter(|term| !term.is_empty())
            .map(|term| Self { term })
    }

    /// Build the query string for a search link, e.g. `q=rtx%204070`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!("{}={}", Self::PARAM, urlencoding::encode(&self.term))
    }
}
