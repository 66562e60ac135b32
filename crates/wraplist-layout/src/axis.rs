/// Represents the orientation of a list (the axis it scrolls along).
///
/// A vertical list stacks its items top to bottom and scrolls vertically;
/// a horizontal list stacks them left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items are laid out left to right.
    Horizontal,

    /// Items are laid out top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Picks the component of a `(width, height)` pair that lies along this axis.
    #[inline]
    pub fn select<T>(self, width: T, height: T) -> T {
        match self {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }
}
