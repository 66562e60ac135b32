//! Positioning strategy the layout manager delegates to.

use wraplist_layout::Axis;

/// Scrolling and positioning bookkeeping supplied to the layout manager.
///
/// The manager only overrides measurement; everything about where children
/// go and how the list scrolls belongs to the strategy.
pub trait LayoutStrategy {
    /// Current orientation.
    fn orientation(&self) -> Axis;

    /// Switches orientation.
    fn set_orientation(&mut self, orientation: Axis);

    /// Whether items are laid out from the end towards the start.
    fn reverse_layout(&self) -> bool {
        false
    }
}

/// Linear strategy holding the orientation and layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearStrategy {
    orientation: Axis,
    reverse_layout: bool,
}

impl LinearStrategy {
    pub fn new(orientation: Axis, reverse_layout: bool) -> Self {
        Self {
            orientation,
            reverse_layout,
        }
    }
}

impl LayoutStrategy for LinearStrategy {
    fn orientation(&self) -> Axis {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Axis) {
        if self.orientation != orientation {
            log::trace!("orientation {:?} -> {:?}", self.orientation, orientation);
        }
        self.orientation = orientation;
    }

    fn reverse_layout(&self) -> bool {
        self.reverse_layout
    }
}
