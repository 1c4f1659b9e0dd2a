//! Read-only catalog entries used by the search page.

use serde::{Deserialize, Serialize};

/// A product record in the searchable catalog.
///
/// Catalog entries are never mutated by the storefront. A cart line item
/// may be built from the fields of a rendered entry, but the cart keeps no
/// reference back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product display name.
    pub name: String,
    /// Price text as displayed, e.g. `R$ 4.299,00`.
    pub price_text: String,
    /// Product image reference.
    pub image_url: String,
    /// Link to the product page.
    pub link: String,
    /// Category label (e.g. `hardware`, `jogos`, `notebooks`).
    pub category: String,
}

impl CatalogEntry {
    /// Case-insensitive substring match against the name or the category.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            price_text: "R$ 1,00".to_string(),
            image_url: "img.png".to_string(),
            link: "produto.html".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_matches_name_ignoring_case() {
        assert!(entry("PlayStation 5", "consoles").matches_lowercase("playstation"));
        assert!(entry("PlayStation 5", "consoles").matches_lowercase("tion 5"));
    }

    #[test]
    fn test_matches_category() {
        assert!(entry("RTX 4070", "Hardware").matches_lowercase("hard"));
    }

    #[test]
    fn test_no_match() {
        assert!(!entry("RTX 4070", "hardware").matches_lowercase("xbox"));
    }
}
