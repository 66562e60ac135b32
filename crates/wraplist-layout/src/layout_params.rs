//! Per-item box model inputs

use crate::{Axis, EdgeInsets};

/// How an item wants to be sized along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequestedSize {
    /// A fixed extent in pixels.
    Fixed(i32),
    /// Take all the space the parent offers.
    Fill,
    /// Size to the item's own content.
    #[default]
    Wrap,
}

/// Layout parameters attached to a list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ItemLayoutParams {
    pub width: RequestedSize,
    pub height: RequestedSize,
    pub margins: EdgeInsets,
}

impl ItemLayoutParams {
    pub fn new(width: RequestedSize, height: RequestedSize) -> Self {
        Self {
            width,
            height,
            margins: EdgeInsets::ZERO,
        }
    }

    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    /// The requested size along `axis`.
    pub fn requested(&self, axis: Axis) -> RequestedSize {
        axis.select(self.width, self.height)
    }
}
