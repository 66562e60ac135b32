//! Integer geometry primitives: sizes and edge insets

use crate::Axis;
use std::ops::Add;

/// A width/height pair in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    /// Returns true if both components are zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns the component along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> i32 {
        axis.select(self.width, self.height)
    }
}

/// Space around each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn uniform(all: i32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn from_components(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical_sum(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Sum of the two insets that lie along `axis`.
    pub fn sum_along(&self, axis: Axis) -> i32 {
        axis.select(self.horizontal_sum(), self.vertical_sum())
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            left: self.left.saturating_add(rhs.left),
            top: self.top.saturating_add(rhs.top),
            right: self.right.saturating_add(rhs.right),
            bottom: self.bottom.saturating_add(rhs.bottom),
        }
    }
}
