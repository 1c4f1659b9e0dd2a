//! Search results view.

use askama::Template;
use game_mania_core::CatalogEntry;

use super::{ViewError, mounts};
use crate::page::Page;

#[derive(Template)]
#[template(path = "partials/search_results.html")]
struct SearchResultsTemplate<'a> {
    term: &'a str,
    results: &'a [CatalogEntry],
}

/// Result grid of the search page.
#[derive(Debug, Clone)]
pub struct SearchView {
    page: Page,
}

impl SearchView {
    /// Create a search view writing into `page`.
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self { page }
    }

    /// Render `results` for `term`, or the "no results" block when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self, term: &str, results: &[CatalogEntry]) -> Result<bool, ViewError> {
        let html = SearchResultsTemplate { term, results }.render()?;
        Ok(self.page.set_html(mounts::SEARCH_RESULTS, html))
    }
}
