//! Host container that records what the layout manager asks of it.

use std::cell::{Cell, RefCell};
use wraplist_foundation::{LayoutHost, OverScrollMode};
use wraplist_layout::IntSize;

#[derive(Debug, Default)]
pub struct RecordingHost {
    layout_requests: Cell<usize>,
    measured: RefCell<Vec<IntSize>>,
    over_scroll_mode: Cell<OverScrollMode>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_over_scroll_mode(mode: OverScrollMode) -> Self {
        let host = Self::default();
        host.over_scroll_mode.set(mode);
        host
    }

    pub fn layout_requests(&self) -> usize {
        self.layout_requests.get()
    }

    /// Sizes reported by each measurement pass, oldest first.
    pub fn measured_sizes(&self) -> Vec<IntSize> {
        self.measured.borrow().clone()
    }

    pub fn last_measured(&self) -> Option<IntSize> {
        self.measured.borrow().last().copied()
    }
}

impl LayoutHost for RecordingHost {
    fn request_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }

    fn set_measured_dimension(&self, size: IntSize) {
        self.measured.borrow_mut().push(size);
    }

    fn over_scroll_mode(&self) -> OverScrollMode {
        self.over_scroll_mode.get()
    }

    fn set_over_scroll_mode(&self, mode: OverScrollMode) {
        self.over_scroll_mode.set(mode);
    }
}
