//! Presentation adapters.
//!
//! Views read cart or catalog state and write HTML into a [`Page`]. They
//! never mutate the cart; the sidebar and checkout views are driven by
//! [`CartObserver`](crate::cart::CartObserver) notifications.
//!
//! [`Page`]: crate::page::Page

mod checkout;
mod search;
mod sidebar;

use game_mania_core::CartLineItem;
use thiserror::Error;

pub use checkout::{CheckoutSummary, CheckoutView};
pub use search::SearchView;
pub use sidebar::{EMPTY_CART_MESSAGE, SidebarView};

/// Mount point ids used by the views.
pub mod mounts {
    /// Container the cart sidebar fragment is loaded into.
    pub const CART_SIDEBAR_CONTAINER: &str = "cart-sidebar-container";
    /// Sidebar item list, declared by the sidebar fragment.
    pub const CART_ITEMS: &str = "lista-itens-carrinho";
    /// Sidebar running total, declared by the sidebar fragment.
    pub const CART_TOTAL: &str = "preco-total-carrinho";

    /// Present only on the checkout page.
    pub const CHECKOUT_CONTAINER: &str = "checkout-resumo-container";
    /// Checkout item list.
    pub const CHECKOUT_ITEMS: &str = "checkout-lista-itens";
    /// Checkout subtotal.
    pub const CHECKOUT_SUBTOTAL: &str = "checkout-subtotal";
    /// Checkout total.
    pub const CHECKOUT_TOTAL: &str = "checkout-total";

    /// Search results grid.
    pub const SEARCH_RESULTS: &str = "search-results";
}

/// Errors raised while rendering a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// A full-page navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target path, without query parameters.
    pub path: String,
}

/// Line item data for templates.
struct LineView<'a> {
    index: usize,
    name: &'a str,
    price_text: &'a str,
    image_url: &'a str,
}

impl<'a> LineView<'a> {
    fn list(items: &'a [CartLineItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self {
                index,
                name: item.name(),
                price_text: item.price_text(),
                image_url: item.image_url(),
            })
            .collect()
    }
}
