//! Cart line item type.

use serde::{Deserialize, Serialize};

use super::price::{Price, parse_currency};

/// Errors that can occur when building a [`CartLineItem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    /// The product name is empty or only whitespace.
    #[error("line item name cannot be empty")]
    EmptyName,
}

/// One unit of a product added to the cart.
///
/// There is no quantity: adding the same product twice produces two line
/// items. Line items are immutable once created and are removed wholesale.
///
/// The price is kept as the text shown on the product card when the item
/// was added. It is the authoritative display value and is only parsed
/// when totals are computed.
///
/// ## Persisted form
///
/// Line items serialize with the storefront's historical field names:
///
/// ```
/// use game_mania_core::CartLineItem;
///
/// let item = CartLineItem::new("Controle Xbox", "R$ 399,90", "img/controle.png").unwrap();
/// let json = serde_json::to_string(&item).unwrap();
/// assert_eq!(json, r#"{"nome":"Controle Xbox","precoTexto":"R$ 399,90","img":"img/controle.png"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct CartLineItem {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "precoTexto")]
    price_text: String,
    #[serde(rename = "img")]
    image_url: String,
}

/// Unvalidated wire form, checked through [`CartLineItem::new`] on load.
#[derive(Deserialize)]
struct RawLineItem {
    nome: String,
    #[serde(rename = "precoTexto")]
    preco_texto: String,
    img: String,
}

impl TryFrom<RawLineItem> for CartLineItem {
    type Error = LineItemError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        Self::new(raw.nome, raw.preco_texto, raw.img)
    }
}

impl CartLineItem {
    /// Create a line item.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::EmptyName`] if `name` is empty or blank.
    pub fn new(
        name: impl Into<String>,
        price_text: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, LineItemError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LineItemError::EmptyName);
        }

        Ok(Self {
            name,
            price_text: price_text.into(),
            image_url: image_url.into(),
        })
    }

    /// Product display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price text exactly as captured from the page.
    #[must_use]
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    /// Product image reference.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Parsed price; unreadable text is worth zero.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::new(parse_currency(Some(&self.price_text)))
    }
}
