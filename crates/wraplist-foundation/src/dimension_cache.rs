//! Last known item dimensions and the explicit child size override.

use wraplist_layout::{Axis, IntSize};

/// Remembers the outer size of the last successfully measured item.
///
/// A zero pair means "not initialized". Once initialized the pair is only
/// replaced by a successful measurement or cleared by [`reset`](Self::reset)
/// when the orientation changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DimensionCache {
    dimensions: IntSize,
}

impl DimensionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> IntSize {
        self.dimensions
    }

    pub fn is_initialized(&self) -> bool {
        !self.dimensions.is_zero()
    }

    /// Seeds the cache from the container size and the child extent.
    ///
    /// Does nothing once the cache holds a nonzero component.
    pub fn initialize(&mut self, width: i32, height: i32, orientation: Axis, child_extent: i32) {
        if self.is_initialized() {
            return;
        }
        self.dimensions = match orientation {
            Axis::Vertical => IntSize::new(width, child_extent),
            Axis::Horizontal => IntSize::new(child_extent, height),
        };
    }

    /// Records a successful measurement.
    pub fn store(&mut self, dimensions: IntSize) {
        self.dimensions = dimensions;
    }

    pub fn reset(&mut self) {
        self.dimensions = IntSize::ZERO;
    }
}

/// Extent assumed for items along the orientation axis when none can be
/// sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildSize {
    extent: i32,
    explicit: bool,
    default_extent: i32,
}

impl ChildSize {
    pub fn new(default_extent: i32) -> Self {
        Self {
            extent: default_extent,
            explicit: false,
            default_extent,
        }
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Whether the extent was set explicitly rather than defaulted.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Sets an explicit extent. Returns true if the extent changed.
    pub fn set(&mut self, extent: i32) -> bool {
        self.explicit = true;
        let changed = self.extent != extent;
        self.extent = extent;
        changed
    }

    /// Drops the explicit extent and restores the default. Returns true if
    /// the extent changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.set(self.default_extent);
        self.explicit = false;
        changed
    }
}
