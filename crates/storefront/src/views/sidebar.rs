//! Cart sidebar view.

use askama::Template;
use game_mania_core::{CartLineItem, Price};

use super::{LineView, Navigation, ViewError, mounts};
use crate::cart::CartObserver;
use crate::page::Page;

/// Placeholder shown when the cart has no items.
pub const EMPTY_CART_MESSAGE: &str = "Seu carrinho está vazio.";

#[derive(Template)]
#[template(path = "partials/cart_sidebar_items.html")]
struct SidebarItemsTemplate<'a> {
    items: Vec<LineView<'a>>,
    empty_message: &'a str,
}

/// Off-canvas cart listing with a running total.
///
/// Renders into the item list and total mounts declared by the sidebar
/// fragment. Until that fragment is loaded there is nothing to render
/// into and renders are skipped.
#[derive(Debug, Clone)]
pub struct SidebarView {
    page: Page,
    checkout_path: String,
}

impl SidebarView {
    /// Create a sidebar view writing into `page`.
    #[must_use]
    pub fn new(page: Page, checkout_path: impl Into<String>) -> Self {
        Self {
            page,
            checkout_path: checkout_path.into(),
        }
    }

    /// Render `items` and their total.
    ///
    /// Returns `Ok(false)` if the item list mount is not on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self, items: &[CartLineItem]) -> Result<bool, ViewError> {
        if !self.page.has_mount(mounts::CART_ITEMS) {
            return Ok(false);
        }

        let html = SidebarItemsTemplate {
            items: LineView::list(items),
            empty_message: EMPTY_CART_MESSAGE,
        }
        .render()?;
        self.page.set_html(mounts::CART_ITEMS, html);

        let total: Price = items.iter().map(CartLineItem::price).sum();
        self.page.set_html(mounts::CART_TOTAL, total.to_string());
        Ok(true)
    }

    /// The "finalizar compra" action: go to the checkout page.
    #[must_use]
    pub fn proceed(&self) -> Navigation {
        Navigation {
            path: self.checkout_path.clone(),
        }
    }
}

impl CartObserver for SidebarView {
    fn cart_changed(&mut self, items: &[CartLineItem]) {
        if let Err(e) = self.render(items) {
            tracing::error!(error = %e, "failed to render cart sidebar");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sidebar_page() -> Page {
        Page::new("/index.html", [mounts::CART_ITEMS, mounts::CART_TOTAL])
    }

    fn item(name: &str, price: &str) -> CartLineItem {
        CartLineItem::new(name, price, "img/item.png").unwrap()
    }

    #[test]
    fn test_render_empty_placeholder() {
        let page = sidebar_page();
        let view = SidebarView::new(page.clone(), "checkout.html");
        assert!(view.render(&[]).unwrap());

        assert!(page.html(mounts::CART_ITEMS).unwrap().contains(EMPTY_CART_MESSAGE));
        assert_eq!(page.html(mounts::CART_TOTAL).unwrap(), "R$ 0,00");
    }

    #[test]
    fn test_render_items_and_total() {
        let page = sidebar_page();
        let view = SidebarView::new(page.clone(), "checkout.html");
        view.render(&[item("PS5", "R$ 100,00"), item("Xbox", "R$ 50,00")])
            .unwrap();

        let html = page.html(mounts::CART_ITEMS).unwrap();
        assert!(html.contains("PS5"));
        assert!(html.contains("Xbox"));
        assert!(html.contains(r#"data-remove-index="1""#));
        assert!(!html.contains(EMPTY_CART_MESSAGE));
        assert!(html.find("PS5").unwrap() < html.find("Xbox").unwrap());
        assert_eq!(page.html(mounts::CART_TOTAL).unwrap(), "R$ 150,00");
    }

    #[test]
    fn test_render_without_mount_is_skipped() {
        let page = Page::new("/index.html", [mounts::CART_SIDEBAR_CONTAINER]);
        let view = SidebarView::new(page, "checkout.html");
        assert!(!view.render(&[item("PS5", "R$ 1,00")]).unwrap());
    }

    #[test]
    fn test_names_are_escaped() {
        let page = sidebar_page();
        let view = SidebarView::new(page.clone(), "checkout.html");
        view.render(&[item("<b>Promo</b>", "R$ 1,00")]).unwrap();
        assert!(!page.html(mounts::CART_ITEMS).unwrap().contains("<b>Promo</b>"));
    }

    #[test]
    fn test_proceed_targets_checkout() {
        let view = SidebarView::new(sidebar_page(), "checkout.html");
        assert_eq!(view.proceed().path, "checkout.html");
    }
}
