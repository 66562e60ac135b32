//! Error types raised by the layout manager and its collaborators.

/// The item provider could not resolve an index, typically because the data
/// set changed structurally while a layout pass was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUnavailable {
    pub index: usize,
}

impl std::fmt::Display for ItemUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {} is not available", self.index)
    }
}

impl std::error::Error for ItemUnavailable {}

/// The provider cannot force its decoration insets to be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidationUnsupported;

impl std::fmt::Display for InvalidationUnsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("decoration insets cannot be invalidated on this runtime")
    }
}

impl std::error::Error for InvalidationUnsupported {}

/// Errors returned synchronously by layout manager setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutManagerError {
    /// A configuration value is outside its documented range.
    InvalidConfiguration { what: &'static str, value: i32 },
    /// The operation needs an attached host container.
    NotAttached { operation: &'static str },
}

impl std::fmt::Display for LayoutManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutManagerError::InvalidConfiguration { what, value } => {
                write!(f, "invalid {what}: {value}")
            }
            LayoutManagerError::NotAttached { operation } => {
                write!(f, "{operation} requires an attached host")
            }
        }
    }
}

impl std::error::Error for LayoutManagerError {}
