//! Checkout summary view.

use askama::Template;
use game_mania_core::{CartLineItem, Price};

use super::{LineView, ViewError, mounts};
use crate::cart::CartObserver;
use crate::page::Page;

#[derive(Template)]
#[template(path = "partials/checkout_items.html")]
struct CheckoutItemsTemplate<'a> {
    items: Vec<LineView<'a>>,
}

/// Amounts shown on the checkout page.
///
/// No taxes, fees or discounts are modeled, so subtotal and total are
/// always the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Sum of the item prices.
    pub subtotal: Price,
    /// Amount to pay.
    pub total: Price,
}

impl CheckoutSummary {
    /// Compute the summary for `items`.
    #[must_use]
    pub fn from_items(items: &[CartLineItem]) -> Self {
        let subtotal: Price = items.iter().map(CartLineItem::price).sum();
        Self {
            subtotal,
            total: subtotal,
        }
    }
}

/// Order summary on the checkout page.
#[derive(Debug, Clone)]
pub struct CheckoutView {
    page: Page,
}

impl CheckoutView {
    /// Create a checkout view writing into `page`.
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self { page }
    }

    /// Render the item list, subtotal and total.
    ///
    /// Returns `None` if the item list mount is not on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self, items: &[CartLineItem]) -> Result<Option<CheckoutSummary>, ViewError> {
        if !self.page.has_mount(mounts::CHECKOUT_ITEMS) {
            return Ok(None);
        }

        let html = CheckoutItemsTemplate {
            items: LineView::list(items),
        }
        .render()?;
        self.page.set_html(mounts::CHECKOUT_ITEMS, html);

        let summary = CheckoutSummary::from_items(items);
        self.page
            .set_html(mounts::CHECKOUT_SUBTOTAL, summary.subtotal.to_string());
        self.page
            .set_html(mounts::CHECKOUT_TOTAL, summary.total.to_string());
        Ok(Some(summary))
    }
}

impl CartObserver for CheckoutView {
    fn cart_changed(&mut self, items: &[CartLineItem]) {
        if let Err(e) = self.render(items) {
            tracing::error!(error = %e, "failed to render checkout summary");
        }
    }
}
