//! Host container contract and over-scroll configuration.

use crate::error::LayoutManagerError;
use wraplist_layout::IntSize;

/// How the host reacts when the user scrolls past either end of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverScrollMode {
    /// Always allow over-scroll effects.
    #[default]
    Always,
    /// Allow over-scroll only if the content is large enough to scroll.
    IfContentScrolls,
    /// Never allow over-scroll effects.
    Never,
}

impl OverScrollMode {
    /// Raw value used by hosts that store the mode as an integer.
    pub fn as_raw(self) -> i32 {
        match self {
            OverScrollMode::Always => 0,
            OverScrollMode::IfContentScrolls => 1,
            OverScrollMode::Never => 2,
        }
    }
}

impl TryFrom<i32> for OverScrollMode {
    type Error = LayoutManagerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OverScrollMode::Always),
            1 => Ok(OverScrollMode::IfContentScrolls),
            2 => Ok(OverScrollMode::Never),
            _ => Err(LayoutManagerError::InvalidConfiguration {
                what: "over-scroll mode",
                value,
            }),
        }
    }
}

/// The container a layout manager is attached to.
///
/// All calls happen on the layout thread; implementations use interior
/// mutability rather than `&mut self`.
pub trait LayoutHost {
    /// Schedules a new layout pass.
    fn request_layout(&self);

    /// Receives the size computed by a measurement pass.
    fn set_measured_dimension(&self, size: IntSize);

    /// The host's current over-scroll mode.
    fn over_scroll_mode(&self) -> OverScrollMode;

    /// Applies a new over-scroll mode.
    fn set_over_scroll_mode(&self, mode: OverScrollMode);
}
