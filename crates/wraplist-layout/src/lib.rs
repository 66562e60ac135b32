//! Layout contracts for wraplist

mod axis;
mod geometry;
mod layout_params;
mod measure_spec;

pub use axis::*;
pub use geometry::*;
pub use layout_params::*;
pub use measure_spec::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::geometry::{EdgeInsets, IntSize};
    pub use crate::layout_params::{ItemLayoutParams, RequestedSize};
    pub use crate::measure_spec::{MeasureMode, MeasureSpec};
}
