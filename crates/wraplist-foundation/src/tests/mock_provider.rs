use crate::error::{InvalidationUnsupported, ItemUnavailable};
use crate::host::{LayoutHost, OverScrollMode};
use crate::item_provider::ItemProvider;
use std::cell::{Cell, RefCell};
use wraplist_layout::{EdgeInsets, IntSize, ItemLayoutParams, MeasureSpec};

pub struct MockItem {
    index: usize,
    measured: IntSize,
    insets_dirty: bool,
    cached_insets: EdgeInsets,
}

pub struct MockProvider {
    natural: Vec<IntSize>,
    pub params: ItemLayoutParams,
    pub decorations: EdgeInsets,
    pub supports_invalidation: bool,
    pub unavailable: bool,
    pub outstanding: usize,
    pub peak_outstanding: usize,
    pub recycled: usize,
    pub last_specs: Option<(MeasureSpec, MeasureSpec)>,
    pool: Vec<Option<MockItem>>,
}

impl MockProvider {
    pub fn new(natural: Vec<IntSize>) -> Self {
        let pool = natural.iter().map(|_| None).collect();
        Self {
            natural,
            params: ItemLayoutParams::default(),
            decorations: EdgeInsets::ZERO,
            supports_invalidation: true,
            unavailable: false,
            outstanding: 0,
            peak_outstanding: 0,
            recycled: 0,
            last_specs: None,
            pool,
        }
    }

    pub fn single(width: i32, height: i32) -> Self {
        Self::new(vec![IntSize::new(width, height)])
    }
}

impl ItemProvider for MockProvider {
    type Item = MockItem;

    fn item_count(&self) -> usize {
        self.natural.len()
    }

    fn item_for_position(&mut self, index: usize) -> Result<MockItem, ItemUnavailable> {
        if self.unavailable || index >= self.natural.len() {
            return Err(ItemUnavailable { index });
        }
        let item = self.pool[index].take().unwrap_or(MockItem {
            index,
            measured: IntSize::ZERO,
            insets_dirty: true,
            cached_insets: EdgeInsets::ZERO,
        });
        self.outstanding += 1;
        self.peak_outstanding = self.peak_outstanding.max(self.outstanding);
        Ok(item)
    }

    fn measure(&mut self, item: &mut MockItem, width: MeasureSpec, height: MeasureSpec) {
        let natural = self.natural[item.index];
        item.measured = IntSize::new(
            width.resolve(natural.width),
            height.resolve(natural.height),
        );
        self.last_specs = Some((width, height));
    }

    fn measured_size(&self, item: &MockItem) -> IntSize {
        item.measured
    }

    fn layout_params(&self, _item: &MockItem) -> ItemLayoutParams {
        self.params
    }

    fn invalidate_decoration_insets(
        &mut self,
        item: &mut MockItem,
    ) -> Result<(), InvalidationUnsupported> {
        if !self.supports_invalidation {
            return Err(InvalidationUnsupported);
        }
        item.insets_dirty = true;
        Ok(())
    }

    fn decoration_insets(&mut self, item: &mut MockItem) -> EdgeInsets {
        if item.insets_dirty {
            item.cached_insets = self.decorations;
            item.insets_dirty = false;
        }
        item.cached_insets
    }

    fn recycle(&mut self, item: MockItem) {
        self.outstanding -= 1;
        self.recycled += 1;
        let index = item.index;
        self.pool[index] = Some(item);
    }
}

#[derive(Default)]
pub struct MockHost {
    pub layout_requests: Cell<usize>,
    pub measured: Cell<Option<IntSize>>,
    pub over_scroll: Cell<OverScrollMode>,
    pub applied_modes: RefCell<Vec<OverScrollMode>>,
}

impl LayoutHost for MockHost {
    fn request_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }

    fn set_measured_dimension(&self, size: IntSize) {
        self.measured.set(Some(size));
    }

    fn over_scroll_mode(&self) -> OverScrollMode {
        self.over_scroll.get()
    }

    fn set_over_scroll_mode(&self, mode: OverScrollMode) {
        self.over_scroll.set(mode);
        self.applied_modes.borrow_mut().push(mode);
    }
}
