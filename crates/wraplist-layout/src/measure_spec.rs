//! Measure specs: one-dimensional layout constraints

use crate::RequestedSize;

/// How the `size` of a [`MeasureSpec`] constrains the measured dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The parent imposes no constraint; `size` is at most a hint.
    #[default]
    Unspecified,
    /// The dimension must be exactly `size`.
    Exactly,
    /// The dimension may be anything up to `size`.
    AtMost,
}

/// Constraint for a single dimension handed to a child during measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MeasureSpec {
    pub size: i32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    /// Creates a spec that forces the dimension to `size`.
    pub const fn exactly(size: i32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exactly,
        }
    }

    /// Creates a spec that caps the dimension at `size`.
    pub const fn at_most(size: i32) -> Self {
        Self {
            size,
            mode: MeasureMode::AtMost,
        }
    }

    /// Creates an unconstrained spec.
    pub const fn unspecified() -> Self {
        Self {
            size: 0,
            mode: MeasureMode::Unspecified,
        }
    }

    /// Resolves a desired dimension against this spec.
    pub fn resolve(&self, desired: i32) -> i32 {
        let desired = desired.max(0);
        match self.mode {
            MeasureMode::Exactly => self.size.max(0),
            MeasureMode::AtMost => desired.min(self.size.max(0)),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Derives the spec for a child along one axis.
    ///
    /// `used` is the space already consumed on that axis by padding, margins
    /// and decorations. Along the axis the list scrolls, the child's extent is
    /// never forced: fixed requests become an upper bound and everything else
    /// is unspecified. Across it, the parent's mode does not matter: a fill
    /// request gets exactly the remaining space and a wrap request is capped
    /// by it.
    pub fn for_child(
        parent: MeasureSpec,
        used: i32,
        requested: RequestedSize,
        scrolls: bool,
    ) -> Self {
        let remaining = parent.size.saturating_sub(used).max(0);
        if scrolls {
            return match requested {
                RequestedSize::Fixed(value) => Self::at_most(value.max(0)),
                RequestedSize::Fill | RequestedSize::Wrap => Self::unspecified(),
            };
        }
        match requested {
            RequestedSize::Fixed(value) => Self::exactly(value.max(0)),
            RequestedSize::Fill => Self::exactly(remaining),
            RequestedSize::Wrap => Self::at_most(remaining),
        }
    }
}

#[cfg(test)]
#[path = "tests/measure_spec_tests.rs"]
mod tests;
