//! Forced invalidation of cached decoration insets.
//!
//! Item providers cache decoration insets per item and only recompute them
//! when the cache is marked stale. An item that is measured, recycled and
//! borrowed again would otherwise report the insets of its first layout, so
//! the measurer invalidates them right before every read.
//!
//! Some providers cannot drop that cache. The first time one reports so, the
//! [`InvalidationSwitch`] is turned off for good and measurement continues
//! with whatever insets the provider returns.

use crate::item_provider::ItemProvider;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-way switch recording whether inset invalidation is available.
///
/// Starts enabled and can only ever be disabled.
#[derive(Debug)]
pub struct InvalidationSwitch {
    enabled: AtomicBool,
}

impl InvalidationSwitch {
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Disables the switch. Returns true only for the call that flipped it.
    pub fn disable(&self) -> bool {
        self.enabled.swap(false, Ordering::Relaxed)
    }
}

impl Default for InvalidationSwitch {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide switch: an unsupported capability is a property of the
/// runtime, not of a single list.
pub static PROCESS_INVALIDATION_SWITCH: InvalidationSwitch = InvalidationSwitch::new();

/// Best-effort invalidator wrapping [`ItemProvider::invalidate_decoration_insets`].
#[derive(Clone, Copy, Debug)]
pub struct DecorationInvalidator {
    switch: &'static InvalidationSwitch,
}

impl Default for DecorationInvalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationInvalidator {
    /// Invalidator backed by [`PROCESS_INVALIDATION_SWITCH`].
    pub fn new() -> Self {
        Self {
            switch: &PROCESS_INVALIDATION_SWITCH,
        }
    }

    /// Invalidator backed by a caller-owned switch.
    pub fn with_switch(switch: &'static InvalidationSwitch) -> Self {
        Self { switch }
    }

    pub fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }

    /// Marks the decoration insets of `item` as stale, if still supported.
    pub fn invalidate<P: ItemProvider>(&self, provider: &mut P, item: &mut P::Item) {
        if !self.switch.is_enabled() {
            return;
        }
        if let Err(err) = provider.invalidate_decoration_insets(item) {
            if self.switch.disable() {
                log::warn!("{err}; decoration measurements might be incorrect");
            }
        }
    }
}
