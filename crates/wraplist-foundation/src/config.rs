//! Configuration for the wrap-content layout manager.

use crate::error::LayoutManagerError;
use wraplist_layout::{Axis, EdgeInsets};

/// Extent assumed for the first item until it has been measured once.
pub const DEFAULT_CHILD_EXTENT: i32 = 100;

/// Construction-time settings for a [`WrapContentLayoutManager`](crate::WrapContentLayoutManager).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapContentConfig {
    /// Initial orientation.
    pub orientation: Axis,

    /// Whether items are laid out from the end. Forwarded to the strategy.
    pub reverse_layout: bool,

    /// Padding of the list container itself.
    pub padding: EdgeInsets,

    /// Fallback extent along the orientation axis, used when no item can be
    /// sampled and no explicit child size was set.
    pub default_child_extent: i32,
}

impl Default for WrapContentConfig {
    fn default() -> Self {
        Self {
            orientation: Axis::Vertical,
            reverse_layout: false,
            padding: EdgeInsets::ZERO,
            default_child_extent: DEFAULT_CHILD_EXTENT,
        }
    }
}

impl WrapContentConfig {
    pub fn with_orientation(mut self, orientation: Axis) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_default_child_extent(mut self, extent: i32) -> Self {
        self.default_child_extent = extent;
        self
    }

    /// Checks that all values are within their documented ranges.
    pub fn validate(&self) -> Result<(), LayoutManagerError> {
        if self.default_child_extent < 0 {
            return Err(LayoutManagerError::InvalidConfiguration {
                what: "default child extent",
                value: self.default_child_extent,
            });
        }
        let padding = self.padding;
        for value in [padding.left, padding.top, padding.right, padding.bottom] {
            if value < 0 {
                return Err(LayoutManagerError::InvalidConfiguration {
                    what: "padding",
                    value,
                });
            }
        }
        Ok(())
    }
}
