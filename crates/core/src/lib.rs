//! Game Mania Core - Shared types library.
//!
//! This crate provides common types used across all Game Mania components:
//! - `storefront` - Cart store, views and page wiring for the static shop
//! - `cli` - Command-line driver for the cart, checkout and search
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, cart line items, catalog entries and filter selections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
