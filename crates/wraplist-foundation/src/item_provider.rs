//! Item provider trait for the wrap-content list.
//!
//! This module defines the [`ItemProvider`] trait through which the layout
//! manager borrows, measures and returns list items.

use crate::error::{InvalidationUnsupported, ItemUnavailable};
use wraplist_layout::{EdgeInsets, IntSize, ItemLayoutParams, MeasureSpec};

/// Supplies and reclaims item instances by index under a pooled
/// borrow/return discipline.
///
/// Items are moved out by [`item_for_position`](Self::item_for_position) and
/// must be handed back through [`recycle`](Self::recycle) exactly once. The
/// layout manager never holds more than one item at a time.
pub trait ItemProvider {
    /// The pooled item type.
    type Item;

    /// The total number of items in the data set.
    fn item_count(&self) -> usize;

    /// Borrows the item bound to `index`.
    ///
    /// Fails when the index is structurally invalid, e.g. while an item
    /// removal animation is still running.
    fn item_for_position(&mut self, index: usize) -> Result<Self::Item, ItemUnavailable>;

    /// Measures `item` with the given constraints, updating its measured size.
    fn measure(&mut self, item: &mut Self::Item, width: MeasureSpec, height: MeasureSpec);

    /// The size recorded by the last [`measure`](Self::measure) call.
    fn measured_size(&self, item: &Self::Item) -> IntSize;

    /// Margins and requested size of `item`.
    fn layout_params(&self, item: &Self::Item) -> ItemLayoutParams;

    /// Marks the cached decoration insets of `item` as stale.
    ///
    /// Providers that cache insets without a way to drop the cache should
    /// keep the default, which reports the capability as unsupported.
    fn invalidate_decoration_insets(
        &mut self,
        item: &mut Self::Item,
    ) -> Result<(), InvalidationUnsupported> {
        let _ = item;
        Err(InvalidationUnsupported)
    }

    /// Decoration insets of `item`.
    ///
    /// Only trustworthy right after
    /// [`invalidate_decoration_insets`](Self::invalidate_decoration_insets);
    /// otherwise a previously cached value may be returned.
    fn decoration_insets(&mut self, item: &mut Self::Item) -> EdgeInsets;

    /// Returns a borrowed item to the pool.
    fn recycle(&mut self, item: Self::Item);
}
