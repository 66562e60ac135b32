//! Self-measuring single-axis list layout manager
//!
//! [`WrapContentLayoutManager`] sizes a list to its first item along the
//! orientation axis. The building blocks are exposed for hosts that drive
//! measurement themselves:
//!
//! - [`ChildMeasurer`] borrows, measures and recycles one item.
//! - [`SizeProbe`] sizes the list from item 0, falling back to cached dimensions.
//! - [`DimensionCache`] and [`ChildSize`] hold the fallback dimensions.
//! - [`DecorationInvalidator`] keeps decoration insets fresh, best effort.

mod child_measurer;
mod config;
mod decoration;
mod dimension_cache;
mod error;
mod host;
mod item_provider;
mod layout_manager;
mod size_probe;
mod strategy;

#[cfg(test)]
#[path = "tests/mock_provider.rs"]
mod mock_provider;

pub use child_measurer::ChildMeasurer;
pub use config::{WrapContentConfig, DEFAULT_CHILD_EXTENT};
pub use decoration::{DecorationInvalidator, InvalidationSwitch, PROCESS_INVALIDATION_SWITCH};
pub use dimension_cache::{ChildSize, DimensionCache};
pub use error::{InvalidationUnsupported, ItemUnavailable, LayoutManagerError};
pub use host::{LayoutHost, OverScrollMode};
pub use item_provider::ItemProvider;
pub use layout_manager::WrapContentLayoutManager;
pub use size_probe::SizeProbe;
pub use strategy::{LayoutStrategy, LinearStrategy};

pub use wraplist_layout;

pub mod prelude {
    pub use crate::config::WrapContentConfig;
    pub use crate::host::{LayoutHost, OverScrollMode};
    pub use crate::item_provider::ItemProvider;
    pub use crate::layout_manager::WrapContentLayoutManager;
    pub use wraplist_layout::prelude::*;
}
