//! Measures the list container by sampling its first item.
//!
//! Along the axis perpendicular to the orientation the list takes whatever
//! the container offers; along the orientation axis it wraps exactly the
//! first item. When the first item cannot be borrowed the probe falls back
//! to the cached dimensions, so a measurement pass never fails.

use crate::child_measurer::ChildMeasurer;
use crate::dimension_cache::DimensionCache;
use crate::item_provider::ItemProvider;
use wraplist_layout::{Axis, EdgeInsets, IntSize, MeasureSpec};

/// Index of the item sampled to size the list.
const ANCHOR_INDEX: usize = 0;

pub struct SizeProbe<'a> {
    measurer: ChildMeasurer,
    cache: &'a mut DimensionCache,
    orientation: Axis,
    padding: EdgeInsets,
    child_extent: i32,
}

impl<'a> SizeProbe<'a> {
    pub fn new(
        measurer: ChildMeasurer,
        cache: &'a mut DimensionCache,
        orientation: Axis,
        padding: EdgeInsets,
        child_extent: i32,
    ) -> Self {
        Self {
            measurer,
            cache,
            orientation,
            padding,
            child_extent,
        }
    }

    /// Computes the list's own size for the container's `width` and `height` specs.
    pub fn measure<P: ItemProvider>(
        &mut self,
        provider: &mut P,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> IntSize {
        self.cache.initialize(
            width.size.max(0),
            height.size.max(0),
            self.orientation,
            self.child_extent,
        );

        let (width_request, height_request) = match self.orientation {
            Axis::Vertical => (width, MeasureSpec::unspecified()),
            Axis::Horizontal => (MeasureSpec::unspecified(), height),
        };

        if provider.item_count() > ANCHOR_INDEX {
            if let Some(outer) =
                self.measurer
                    .measure(provider, ANCHOR_INDEX, width_request, height_request)
            {
                self.cache.store(outer);
            }
        }

        let wrapped = self
            .cache
            .dimensions()
            .along(self.orientation)
            .saturating_add(self.padding.sum_along(self.orientation))
            .max(0);
        let filled = self
            .orientation
            .cross_axis()
            .select(width.size, height.size)
            .max(0);

        match self.orientation {
            Axis::Vertical => IntSize::new(filled, wrapped),
            Axis::Horizontal => IntSize::new(wrapped, filled),
        }
    }
}

#[cfg(test)]
#[path = "tests/size_probe_tests.rs"]
mod tests;
