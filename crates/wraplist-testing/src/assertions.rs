//! Assertion helpers for the item borrowing protocol.

use crate::provider::{FakeItemProvider, ProviderEvent};

/// Assert that every borrowed item was recycled and that no two items were
/// ever out of the pool together.
pub fn assert_pool_balanced(provider: &FakeItemProvider, msg: &str) {
    assert_eq!(
        provider.outstanding(),
        0,
        "{}: items still borrowed, events {:?}",
        msg,
        provider.events()
    );
    assert!(
        provider.peak_outstanding() <= 1,
        "{}: {} items were borrowed at once",
        msg,
        provider.peak_outstanding()
    );
}

/// Assert that each borrow of `index` went through
/// borrow, invalidate, measure, invalidate, recycle, in that order.
pub fn assert_measured_with_fresh_insets(provider: &FakeItemProvider, index: usize, msg: &str) {
    let events: Vec<ProviderEvent> = provider
        .events()
        .iter()
        .copied()
        .filter(|event| event_index(event) == Some(index))
        .collect();
    assert!(!events.is_empty(), "{}: item {} was never touched", msg, index);

    for cycle in events.chunks(5) {
        let kinds: Vec<&str> = cycle.iter().map(event_kind).collect();
        assert_eq!(
            kinds,
            ["borrowed", "invalidated", "measured", "invalidated", "recycled"],
            "{}: unexpected protocol for item {}: {:?}",
            msg,
            index,
            events
        );
    }
}

fn event_index(event: &ProviderEvent) -> Option<usize> {
    match *event {
        ProviderEvent::Borrowed(index)
        | ProviderEvent::Invalidated(index)
        | ProviderEvent::Recycled(index)
        | ProviderEvent::Measured { index, .. } => Some(index),
        ProviderEvent::Unavailable(_) => None,
    }
}

fn event_kind(event: &ProviderEvent) -> &'static str {
    match event {
        ProviderEvent::Borrowed(_) => "borrowed",
        ProviderEvent::Unavailable(_) => "unavailable",
        ProviderEvent::Invalidated(_) => "invalidated",
        ProviderEvent::Measured { .. } => "measured",
        ProviderEvent::Recycled(_) => "recycled",
    }
}
