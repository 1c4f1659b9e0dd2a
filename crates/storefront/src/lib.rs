//! Game Mania storefront library.
//!
//! Cart state, persistence and the page-level behavior shared by every
//! storefront page: fragment loading, the cart sidebar and checkout
//! summary, catalog search, grid filters, the offer countdown and the help
//! widget.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod boot;
pub mod cart;
pub mod config;
pub mod countdown;
pub mod error;
pub mod fragments;
pub mod grid;
pub mod help;
pub mod page;
pub mod search;
pub mod storage;
pub mod views;
