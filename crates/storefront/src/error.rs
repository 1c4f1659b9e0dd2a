//! Unified error handling.
//!
//! Each concern has its own error enum next to the code that raises it.
//! [`StorefrontError`] gathers them for callers that drive several
//! concerns at once, such as the CLI.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::fragments::FragmentError;
use crate::search::CatalogError;
use crate::storage::StorageError;
use crate::views::ViewError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A cart mutation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A fragment could not be fetched.
    #[error("Fragment error: {0}")]
    Fragment(#[from] FragmentError),

    /// A view failed to render.
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Caller supplied invalid input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<game_mania_core::LineItemError> for StorefrontError {
    fn from(err: game_mania_core::LineItemError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
