//! Measurement of a single list item.
//!
//! The measurer borrows one item from the provider, measures it against the
//! space left by container padding, item margins and decorations, and hands
//! it straight back. It never keeps more than one item out of the pool.

use crate::decoration::DecorationInvalidator;
use crate::item_provider::ItemProvider;
use wraplist_layout::{Axis, EdgeInsets, IntSize, MeasureSpec};

/// Measures the outer size (content + decorations + margins) of one item.
#[derive(Clone, Copy, Debug)]
pub struct ChildMeasurer {
    orientation: Axis,
    padding: EdgeInsets,
    invalidator: DecorationInvalidator,
}

impl ChildMeasurer {
    pub fn new(orientation: Axis, padding: EdgeInsets, invalidator: DecorationInvalidator) -> Self {
        Self {
            orientation,
            padding,
            invalidator,
        }
    }

    /// Measures the item at `index` against the available `width` and `height`.
    ///
    /// Returns `None` without touching the pool when the item cannot be
    /// borrowed; callers keep whatever dimensions they had before.
    pub fn measure<P: ItemProvider>(
        &self,
        provider: &mut P,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Option<IntSize> {
        let mut item = match provider.item_for_position(index) {
            Ok(item) => item,
            Err(err) => {
                if cfg!(debug_assertions) {
                    log::warn!(
                        "{err}, previously used dimensions will be reused. \
                         Set a child size or disable item animations to avoid this"
                    );
                }
                return None;
            }
        };

        let params = provider.layout_params(&item);

        self.invalidator.invalidate(provider, &mut item);
        let decorations = provider.decoration_insets(&mut item);

        let used = self.padding + params.margins + decorations;
        let child_spec = |axis: Axis, parent: MeasureSpec| {
            MeasureSpec::for_child(
                parent,
                used.sum_along(axis),
                params.requested(axis),
                axis == self.orientation,
            )
        };
        let width_spec = child_spec(Axis::Horizontal, width);
        let height_spec = child_spec(Axis::Vertical, height);

        provider.measure(&mut item, width_spec, height_spec);
        let measured = provider.measured_size(&item);

        let extras = decorations + params.margins;
        let outer = IntSize::new(
            measured.width.saturating_add(extras.horizontal_sum()),
            measured.height.saturating_add(extras.vertical_sum()),
        );
        log::trace!(
            "item {index}: specs ({width_spec:?}, {height_spec:?}) measured {measured:?} outer {outer:?}"
        );

        // The item goes back to the pool; its next user must not see these insets.
        self.invalidator.invalidate(provider, &mut item);
        provider.recycle(item);

        Some(outer)
    }
}

#[cfg(test)]
#[path = "tests/child_measurer_tests.rs"]
mod tests;
