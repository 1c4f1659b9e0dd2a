//! Core types for Game Mania.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod filter;
pub mod line_item;
pub mod price;

pub use catalog::CatalogEntry;
pub use filter::FilterSelection;
pub use line_item::{CartLineItem, LineItemError};
pub use price::{Price, format_currency, parse_currency};
