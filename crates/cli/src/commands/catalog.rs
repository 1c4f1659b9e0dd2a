//! Catalog search and category filter commands.
//!
//! Both read the JSON catalog named by `GM_CATALOG_PATH`.

use game_mania_core::FilterSelection;
use game_mania_storefront::config::StorefrontConfig;
use game_mania_storefront::error::Result;
use game_mania_storefront::grid::{GridKind, ProductGrid};
use game_mania_storefront::page::Page;
use game_mania_storefront::search::{CatalogLookup, StaticCatalog};
use game_mania_storefront::views::{SearchView, mounts};

/// Search the catalog for `term`.
///
/// With `html`, prints the markup the search page would show.
#[allow(clippy::print_stdout)]
pub fn search(config: &StorefrontConfig, term: &str, html: bool) -> Result<()> {
    let catalog = StaticCatalog::from_json_file(&config.catalog_path)?;
    let results = catalog.search(term);

    if html {
        let page = Page::new("/busca.html", [mounts::SEARCH_RESULTS]);
        SearchView::new(page.clone()).render(term, &results)?;
        println!("{}", page.html(mounts::SEARCH_RESULTS).unwrap_or_default());
        return Ok(());
    }

    if results.is_empty() {
        println!("Nenhum resultado encontrado para \"{term}\".");
        return Ok(());
    }

    for entry in &results {
        println!(
            "{:<40} {:<12} {:<14} {}",
            entry.name, entry.category, entry.price_text, entry.link
        );
    }
    Ok(())
}

/// Print the catalog products left visible by a category filter.
#[allow(clippy::print_stdout)]
pub fn filter(config: &StorefrontConfig, category: &str) -> Result<()> {
    let catalog = StaticCatalog::from_json_file(&config.catalog_path)?;
    let mut grid = ProductGrid::new(
        GridKind::Products,
        catalog
            .entries()
            .iter()
            .map(|entry| (entry.name.clone(), entry.category.clone())),
    );

    grid.filter(&FilterSelection::parse(category), None);

    for card in grid.visible() {
        println!("{:<40} {}", card.name, card.attribute);
    }
    Ok(())
}
