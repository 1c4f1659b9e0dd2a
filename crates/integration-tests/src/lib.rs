//! Integration tests for the Game Mania storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p game-mania-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store, persistence and the views that follow it
//! - `search` - Catalog search and the search page
//! - `page_boot` - Page start-up sequence against fragment directories
//!
//! The helpers below build the on-disk fixtures those tests share.

use std::io;
use std::path::Path;

use game_mania_core::CatalogEntry;

/// Sidebar fragment declaring the item list and total mounts.
pub const SIDEBAR_FRAGMENT_HTML: &str = r#"<div class="offcanvas offcanvas-end" id="offcanvasCarrinho">
  <div class="offcanvas-body"><div id="lista-itens-carrinho"></div></div>
  <div class="offcanvas-footer">
    <span>Total:</span> <strong id="preco-total-carrinho">R$ 0,00</strong>
    <a class="btn btn-warning" href="checkout.html">Finalizar compra</a>
  </div>
</div>"#;

/// Write `header.html`, `footer.html` and `cart_sidebar.html` into `dir`.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_fragments(dir: &Path) -> io::Result<()> {
    std::fs::write(dir.join("header.html"), "<header><nav>Game Mania</nav></header>")?;
    std::fs::write(dir.join("footer.html"), "<footer>Game Mania 2026</footer>")?;
    std::fs::write(dir.join("cart_sidebar.html"), SIDEBAR_FRAGMENT_HTML)
}

/// A small catalog covering several categories.
#[must_use]
pub fn sample_catalog() -> Vec<CatalogEntry> {
    [
        ("PlayStation 5 Slim", "R$ 3.799,00", "consoles"),
        ("Xbox Series S", "R$ 2.499,00", "consoles"),
        ("Controle DualSense", "R$ 449,90", "acessorios"),
        ("Placa de Vídeo RTX 4070", "R$ 4.299,90", "hardware"),
        ("Notebook Gamer Nitro", "R$ 5.199,00", "notebooks"),
    ]
    .into_iter()
    .map(|(name, price, category)| CatalogEntry {
        name: name.to_owned(),
        price_text: price.to_owned(),
        image_url: format!("img/{category}.png"),
        link: "produto.html".to_owned(),
        category: category.to_owned(),
    })
    .collect()
}

/// Write [`sample_catalog`] as JSON to `path`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be serialized or written.
pub fn write_catalog(path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&sample_catalog())?;
    std::fs::write(path, json)
}
