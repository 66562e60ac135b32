//! Testing utilities for wraplist

pub mod assertions;
pub mod host;
pub mod provider;

pub use host::RecordingHost;
pub use provider::{FakeItem, FakeItemProvider, ProviderEvent};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::RecordingHost;
    pub use crate::provider::{FakeItem, FakeItemProvider, ProviderEvent};
}
