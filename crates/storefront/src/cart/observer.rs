//! Cart change notifications.

use game_mania_core::CartLineItem;

/// Something that re-renders when the cart changes.
///
/// Observers receive the full, ordered item list after each successful
/// mutation and on explicit [`render_now`](super::CartStore::render_now)
/// calls.
pub trait CartObserver {
    /// Called with the current cart contents.
    fn cart_changed(&mut self, items: &[CartLineItem]);
}

impl<F> CartObserver for F
where
    F: FnMut(&[CartLineItem]),
{
    fn cart_changed(&mut self, items: &[CartLineItem]) {
        self(items);
    }
}

/// Handle returned by [`subscribe`](super::CartStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(super) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}
