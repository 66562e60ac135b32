//! Wrap-content linear layout manager.
//!
//! A list that sizes itself to its content along its orientation axis by
//! measuring the first item, and fills the container along the other axis.
//! Scrolling and child placement are delegated to a [`LayoutStrategy`].

use std::rc::Rc;

use crate::child_measurer::ChildMeasurer;
use crate::config::WrapContentConfig;
use crate::decoration::DecorationInvalidator;
use crate::dimension_cache::{ChildSize, DimensionCache};
use crate::error::LayoutManagerError;
use crate::host::{LayoutHost, OverScrollMode};
use crate::item_provider::ItemProvider;
use crate::size_probe::SizeProbe;
use crate::strategy::{LayoutStrategy, LinearStrategy};
use wraplist_layout::{Axis, EdgeInsets, IntSize, MeasureSpec};

pub struct WrapContentLayoutManager<S = LinearStrategy> {
    strategy: S,
    host: Option<Rc<dyn LayoutHost>>,
    padding: EdgeInsets,
    invalidator: DecorationInvalidator,
    cache: DimensionCache,
    child_size: ChildSize,
    over_scroll_mode: OverScrollMode,
    measured_size: IntSize,
}

impl WrapContentLayoutManager<LinearStrategy> {
    /// Creates a manager backed by a [`LinearStrategy`].
    pub fn new(config: WrapContentConfig) -> Result<Self, LayoutManagerError> {
        let strategy = LinearStrategy::new(config.orientation, config.reverse_layout);
        Self::with_strategy(config, strategy)
    }
}

impl<S: LayoutStrategy> WrapContentLayoutManager<S> {
    /// Creates a manager delegating positioning to `strategy`.
    ///
    /// The strategy's orientation is aligned with `config.orientation`.
    pub fn with_strategy(
        config: WrapContentConfig,
        mut strategy: S,
    ) -> Result<Self, LayoutManagerError> {
        config.validate()?;
        strategy.set_orientation(config.orientation);
        Ok(Self {
            strategy,
            host: None,
            padding: config.padding,
            invalidator: DecorationInvalidator::new(),
            cache: DimensionCache::new(),
            child_size: ChildSize::new(config.default_child_extent),
            over_scroll_mode: OverScrollMode::default(),
            measured_size: IntSize::ZERO,
        })
    }

    /// Replaces the decoration invalidator, e.g. to isolate its switch.
    pub fn with_invalidator(mut self, invalidator: DecorationInvalidator) -> Self {
        self.invalidator = invalidator;
        self
    }

    /// Attaches the manager to `host`, adopting the host's over-scroll mode.
    pub fn attach(&mut self, host: Rc<dyn LayoutHost>) {
        self.over_scroll_mode = host.over_scroll_mode();
        self.host = Some(host);
    }

    pub fn detach(&mut self) {
        self.host = None;
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn orientation(&self) -> Axis {
        self.strategy.orientation()
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        self.orientation().is_horizontal()
    }

    pub fn can_scroll_vertically(&self) -> bool {
        self.orientation().is_vertical()
    }

    /// Switches orientation. Cached dimensions are dropped first: a size
    /// sampled under one orientation says nothing about the other.
    pub fn set_orientation(&mut self, orientation: Axis) {
        if self.strategy.orientation() != orientation {
            self.cache.reset();
        }
        self.strategy.set_orientation(orientation);
    }

    /// Dimensions of the last successfully measured item, or the seeded
    /// fallback, or zero.
    pub fn child_dimensions(&self) -> IntSize {
        self.cache.dimensions()
    }

    /// The size reported by the last [`on_measure`](Self::on_measure).
    pub fn measured_size(&self) -> IntSize {
        self.measured_size
    }

    pub fn child_size(&self) -> i32 {
        self.child_size.extent()
    }

    pub fn has_child_size(&self) -> bool {
        self.child_size.is_explicit()
    }

    /// Sets the extent assumed for items when the first one cannot be
    /// measured. Requests a layout if the value changed.
    ///
    /// The extent only seeds an empty dimension cache. Once a pass has
    /// filled the cache, the new value takes effect after the next
    /// orientation change resets it.
    pub fn set_child_size(&mut self, child_size: i32) -> Result<(), LayoutManagerError> {
        if child_size < 0 {
            return Err(LayoutManagerError::InvalidConfiguration {
                what: "child size",
                value: child_size,
            });
        }
        if self.child_size.set(child_size) {
            self.request_layout();
        }
        Ok(())
    }

    /// Drops the explicit child size and restores the default extent.
    pub fn clear_child_size(&mut self) {
        if self.child_size.clear() {
            self.request_layout();
        }
    }

    pub fn over_scroll_mode(&self) -> OverScrollMode {
        self.over_scroll_mode
    }

    /// Validates `mode` and forwards it to the attached host.
    pub fn set_over_scroll_mode(&mut self, mode: i32) -> Result<(), LayoutManagerError> {
        let mode = OverScrollMode::try_from(mode)?;
        let host = self
            .host
            .as_ref()
            .ok_or(LayoutManagerError::NotAttached {
                operation: "set_over_scroll_mode",
            })?;
        self.over_scroll_mode = mode;
        host.set_over_scroll_mode(mode);
        Ok(())
    }

    /// Measures the list for the container's specs and reports the result
    /// to the attached host.
    pub fn on_measure<P: ItemProvider>(
        &mut self,
        provider: &mut P,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> IntSize {
        let orientation = self.orientation();
        let measurer = self.child_measurer();
        let size = SizeProbe::new(
            measurer,
            &mut self.cache,
            orientation,
            self.padding,
            self.child_size.extent(),
        )
        .measure(provider, width, height);

        self.measured_size = size;
        if let Some(host) = &self.host {
            host.set_measured_dimension(size);
        }
        size
    }

    /// Measures the item at `index` and remembers its outer size.
    ///
    /// Returns `None` if the item could not be borrowed; the cached
    /// dimensions are left untouched in that case.
    pub fn measure_child<P: ItemProvider>(
        &mut self,
        provider: &mut P,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Option<IntSize> {
        let outer = self.child_measurer().measure(provider, index, width, height)?;
        self.cache.store(outer);
        Some(outer)
    }

    fn child_measurer(&self) -> ChildMeasurer {
        ChildMeasurer::new(self.orientation(), self.padding, self.invalidator)
    }

    fn request_layout(&self) {
        if let Some(host) = &self.host {
            host.request_layout();
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_manager_tests.rs"]
mod tests;
