//! Pooled fake item provider.
//!
//! Items keep their decoration inset cache across borrows, exactly like a
//! real recycler pool, so a measurement that skips invalidation observes
//! stale insets. Every interaction is recorded as a [`ProviderEvent`].

use smallvec::SmallVec;
use wraplist_foundation::{InvalidationUnsupported, ItemProvider, ItemUnavailable};
use wraplist_layout::{EdgeInsets, IntSize, ItemLayoutParams, MeasureSpec};

/// Description of one item in the fake data set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeItem {
    /// Size the item wants when unconstrained.
    pub natural: IntSize,
    pub params: ItemLayoutParams,
    /// Insets the decorations would report if recomputed now.
    pub decorations: EdgeInsets,
}

impl FakeItem {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            natural: IntSize::new(width, height),
            params: ItemLayoutParams::default(),
            decorations: EdgeInsets::ZERO,
        }
    }

    pub fn with_params(mut self, params: ItemLayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.params.margins = margins;
        self
    }

    pub fn with_decorations(mut self, decorations: EdgeInsets) -> Self {
        self.decorations = decorations;
        self
    }
}

/// Something that happened to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    Borrowed(usize),
    Unavailable(usize),
    Invalidated(usize),
    Measured {
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    },
    Recycled(usize),
}

/// A pooled item handed out by [`FakeItemProvider`].
#[derive(Debug)]
pub struct PooledItem {
    index: usize,
    measured: IntSize,
    insets_dirty: bool,
    cached_insets: EdgeInsets,
}

#[derive(Debug, Default)]
pub struct FakeItemProvider {
    items: Vec<FakeItem>,
    pool: Vec<Option<PooledItem>>,
    supports_invalidation: bool,
    failing_borrows: usize,
    outstanding: usize,
    peak_outstanding: usize,
    events: SmallVec<[ProviderEvent; 8]>,
}

impl FakeItemProvider {
    pub fn new(items: Vec<FakeItem>) -> Self {
        let pool = items.iter().map(|_| None).collect();
        Self {
            items,
            pool,
            supports_invalidation: true,
            ..Self::default()
        }
    }

    /// A provider whose decoration caches cannot be invalidated.
    pub fn without_invalidation(mut self) -> Self {
        self.supports_invalidation = false;
        self
    }

    /// Makes the next `count` borrows fail, as during a removal animation.
    pub fn fail_next_borrows(&mut self, count: usize) {
        self.failing_borrows = count;
    }

    /// Changes what the decorations of `index` would report when recomputed.
    pub fn set_decorations(&mut self, index: usize, decorations: EdgeInsets) {
        self.items[index].decorations = decorations;
    }

    pub fn set_natural_size(&mut self, index: usize, size: IntSize) {
        self.items[index].natural = size;
    }

    /// Number of items currently borrowed and not yet recycled.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Highest number of items that were borrowed at the same time.
    pub fn peak_outstanding(&self) -> usize {
        self.peak_outstanding
    }

    pub fn events(&self) -> &[ProviderEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn count_events(&self, predicate: impl Fn(&ProviderEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl ItemProvider for FakeItemProvider {
    type Item = PooledItem;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_for_position(&mut self, index: usize) -> Result<PooledItem, ItemUnavailable> {
        if self.failing_borrows > 0 || index >= self.items.len() {
            self.failing_borrows = self.failing_borrows.saturating_sub(1);
            self.events.push(ProviderEvent::Unavailable(index));
            return Err(ItemUnavailable { index });
        }
        let item = self.pool[index].take().unwrap_or(PooledItem {
            index,
            measured: IntSize::ZERO,
            insets_dirty: true,
            cached_insets: EdgeInsets::ZERO,
        });
        self.outstanding += 1;
        self.peak_outstanding = self.peak_outstanding.max(self.outstanding);
        self.events.push(ProviderEvent::Borrowed(index));
        Ok(item)
    }

    fn measure(&mut self, item: &mut PooledItem, width: MeasureSpec, height: MeasureSpec) {
        let natural = self.items[item.index].natural;
        item.measured = IntSize::new(
            width.resolve(natural.width),
            height.resolve(natural.height),
        );
        self.events.push(ProviderEvent::Measured {
            index: item.index,
            width,
            height,
        });
    }

    fn measured_size(&self, item: &PooledItem) -> IntSize {
        item.measured
    }

    fn layout_params(&self, item: &PooledItem) -> ItemLayoutParams {
        self.items[item.index].params
    }

    fn invalidate_decoration_insets(
        &mut self,
        item: &mut PooledItem,
    ) -> Result<(), InvalidationUnsupported> {
        if !self.supports_invalidation {
            return Err(InvalidationUnsupported);
        }
        item.insets_dirty = true;
        self.events.push(ProviderEvent::Invalidated(item.index));
        Ok(())
    }

    fn decoration_insets(&mut self, item: &mut PooledItem) -> EdgeInsets {
        if item.insets_dirty {
            item.cached_insets = self.items[item.index].decorations;
            item.insets_dirty = false;
        }
        item.cached_insets
    }

    fn recycle(&mut self, item: PooledItem) {
        assert!(self.outstanding > 0, "recycled an item that was never borrowed");
        self.outstanding -= 1;
        self.events.push(ProviderEvent::Recycled(item.index));
        let index = item.index;
        self.pool[index] = Some(item);
    }
}
