//! Cart and checkout commands.
//!
//! # Usage
//!
//! ```bash
//! gm-cli cart add -n "Headset HyperX" -p "R$ 399,00" -i img/headset.png
//! gm-cli cart list
//! gm-cli cart remove 0
//! gm-cli cart total
//! gm-cli checkout
//! ```

use game_mania_core::CartLineItem;
use game_mania_storefront::config::StorefrontConfig;
use game_mania_storefront::error::Result;
use game_mania_storefront::views::{CheckoutSummary, EMPTY_CART_MESSAGE};

use super::open_store;

/// Print every item with its position and the cart total.
#[allow(clippy::print_stdout)]
pub fn list(config: &StorefrontConfig) -> Result<()> {
    let store = open_store(config)?;

    if store.is_empty() {
        println!("{EMPTY_CART_MESSAGE}");
        return Ok(());
    }

    print_items(store.items());
    println!("Total: {}", store.total_price());
    Ok(())
}

/// Add an item and print the new total.
#[allow(clippy::print_stdout)]
pub fn add(config: &StorefrontConfig, name: String, price: String, image: String) -> Result<()> {
    let item = CartLineItem::new(name, price, image)?;
    let mut store = open_store(config)?;

    tracing::info!(name = item.name(), price = %item.price(), "adding item");
    store.add_item(item)?;

    println!("{} item(s), total {}", store.len(), store.total_price());
    Ok(())
}

/// Remove the item at `index`. An unknown position changes nothing.
#[allow(clippy::print_stdout)]
pub fn remove(config: &StorefrontConfig, index: usize) -> Result<()> {
    let mut store = open_store(config)?;

    match store.remove_item(index)? {
        Some(item) => println!("Removed {} ({})", item.name(), item.price()),
        None => tracing::warn!(index, len = store.len(), "no item at that position"),
    }

    println!("Total: {}", store.total_price());
    Ok(())
}

/// Print only the formatted total.
#[allow(clippy::print_stdout)]
pub fn total(config: &StorefrontConfig) -> Result<()> {
    let store = open_store(config)?;
    println!("{}", store.total_price());
    Ok(())
}

/// Print the checkout summary.
#[allow(clippy::print_stdout)]
pub fn checkout(config: &StorefrontConfig) -> Result<()> {
    let store = open_store(config)?;

    if store.is_empty() {
        println!("{EMPTY_CART_MESSAGE}");
        return Ok(());
    }

    let summary = CheckoutSummary::from_items(store.items());
    print_items(store.items());
    println!("Subtotal: {}", summary.subtotal);
    println!("Total:    {}", summary.total);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_items(items: &[CartLineItem]) {
    for (index, item) in items.iter().enumerate() {
        println!("{index:>3}  {:<40} {}", item.name(), item.price());
    }
}
