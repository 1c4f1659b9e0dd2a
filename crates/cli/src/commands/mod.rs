//! Subcommand implementations.

pub mod cart;
pub mod catalog;
pub mod page;

use game_mania_storefront::cart::CartStore;
use game_mania_storefront::config::StorefrontConfig;
use game_mania_storefront::storage::{FileStorage, StorageError};

/// Open the cart persisted at the configured storage path.
///
/// This is the only place the CLI creates a cart store; each command works
/// on the one instance it gets from here.
fn open_store(config: &StorefrontConfig) -> Result<CartStore<FileStorage>, StorageError> {
    let storage = FileStorage::open(&config.storage_path)?;
    Ok(CartStore::load(storage))
}
