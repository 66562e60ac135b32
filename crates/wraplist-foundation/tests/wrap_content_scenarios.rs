//! End-to-end measurement scenarios for the wrap-content layout manager.

use std::rc::Rc;

use wraplist_foundation::prelude::*;
use wraplist_foundation::{DecorationInvalidator, InvalidationSwitch, DEFAULT_CHILD_EXTENT};
use wraplist_testing::prelude::*;

fn isolated_manager(config: WrapContentConfig) -> WrapContentLayoutManager {
    let switch: &'static InvalidationSwitch = Box::leak(Box::new(InvalidationSwitch::new()));
    WrapContentLayoutManager::new(config)
        .expect("valid config")
        .with_invalidator(DecorationInvalidator::with_switch(switch))
}

#[test]
fn vertical_list_wraps_first_item_height() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let host = Rc::new(RecordingHost::new());
    manager.attach(host.clone());
    let mut provider = FakeItemProvider::new(vec![FakeItem::new(200, 150), FakeItem::new(200, 90)]);

    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    assert_eq!(size, IntSize::new(300, 150));
    assert_eq!(host.last_measured(), Some(IntSize::new(300, 150)));
    assert_pool_balanced(&provider, "single probe");
    assert_measured_with_fresh_insets(&provider, 0, "single probe");
    assert_eq!(
        provider.count_events(|event| matches!(event, ProviderEvent::Borrowed(1))),
        0
    );
}

#[test]
fn orientation_switch_recomputes_from_scratch() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let mut provider = FakeItemProvider::new(vec![FakeItem::new(80, 150)]);
    manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );
    assert_eq!(manager.child_dimensions(), IntSize::new(80, 150));

    manager.set_orientation(Axis::Horizontal);
    assert_eq!(manager.child_dimensions(), IntSize::ZERO);

    // Sampling fails right after the switch: the fallback must come from the
    // new orientation, not from the stale vertical measurement.
    provider.fail_next_borrows(1);
    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::unspecified(),
        MeasureSpec::exactly(240),
    );
    assert_eq!(size, IntSize::new(DEFAULT_CHILD_EXTENT, 240));

    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::unspecified(),
        MeasureSpec::exactly(240),
    );
    assert_eq!(size, IntSize::new(80, 240));
    assert_pool_balanced(&provider, "after orientation switch");
}

#[test]
fn animation_race_keeps_previous_dimensions() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let mut provider = FakeItemProvider::new(vec![FakeItem::new(120, 64)]);
    manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    provider.set_natural_size(0, IntSize::new(120, 400));
    provider.fail_next_borrows(3);
    for _ in 0..3 {
        let size = manager.on_measure(
            &mut provider,
            MeasureSpec::exactly(300),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size, IntSize::new(300, 64));
    }

    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );
    assert_eq!(size, IntSize::new(300, 400));
    assert_pool_balanced(&provider, "after race");
}

#[test]
fn explicit_child_size_is_the_fallback_for_an_unsampled_list() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let host = Rc::new(RecordingHost::new());
    manager.attach(host.clone());
    manager.set_child_size(56).expect("non-negative child size");
    assert_eq!(host.layout_requests(), 1);

    let mut provider = FakeItemProvider::new(vec![FakeItem::new(120, 64)]);
    provider.fail_next_borrows(1);
    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    assert_eq!(size, IntSize::new(300, 56));
    assert_eq!(host.measured_sizes(), vec![IntSize::new(300, 56)]);
}

#[test]
fn changed_decorations_are_picked_up_on_the_next_pass() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let mut provider = FakeItemProvider::new(vec![
        FakeItem::new(120, 64).with_decorations(EdgeInsets::from_components(0, 0, 0, 1)),
    ]);
    manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    provider.set_decorations(0, EdgeInsets::from_components(0, 8, 0, 8));
    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    assert_eq!(size, IntSize::new(300, 80));
    assert_measured_with_fresh_insets(&provider, 0, "two passes");
}

#[test]
fn unsupported_invalidation_still_measures() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let mut provider = FakeItemProvider::new(vec![
        FakeItem::new(120, 64).with_decorations(EdgeInsets::from_components(0, 0, 0, 1)),
    ])
    .without_invalidation();

    let first = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );
    provider.set_decorations(0, EdgeInsets::from_components(0, 8, 0, 8));
    let second = manager.on_measure(
        &mut provider,
        MeasureSpec::exactly(300),
        MeasureSpec::unspecified(),
    );

    assert_eq!(first, IntSize::new(300, 65));
    // The pooled item keeps its first insets.
    assert_eq!(second, IntSize::new(300, 65));
    assert_pool_balanced(&provider, "without invalidation");
    assert_eq!(
        provider.count_events(|event| matches!(event, ProviderEvent::Invalidated(_))),
        0
    );
}

#[test]
fn padded_horizontal_list_with_margins() {
    let config = WrapContentConfig::default()
        .with_orientation(Axis::Horizontal)
        .with_padding(EdgeInsets::symmetric(6, 10));
    let mut manager = isolated_manager(config);
    let mut provider = FakeItemProvider::new(vec![FakeItem::new(90, 400)
        .with_params(ItemLayoutParams::new(RequestedSize::Wrap, RequestedSize::Fill))
        .with_margins(EdgeInsets::uniform(2))]);

    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::unspecified(),
        MeasureSpec::exactly(200),
    );

    // Width: 90 content + 4 margins + 12 padding. Height fills the container.
    assert_eq!(size, IntSize::new(106, 200));
    // Outer item height: 200 - 20 padding.
    assert_eq!(manager.child_dimensions(), IntSize::new(94, 180));
}

#[test]
fn fill_item_in_bounded_container_takes_all_remaining_width() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    let mut provider = FakeItemProvider::new(vec![FakeItem::new(40, 72)
        .with_params(ItemLayoutParams::new(RequestedSize::Fill, RequestedSize::Wrap))
        .with_margins(EdgeInsets::symmetric(8, 0))]);

    let size = manager.on_measure(
        &mut provider,
        MeasureSpec::at_most(320),
        MeasureSpec::unspecified(),
    );

    assert_eq!(size, IntSize::new(320, 72));
    assert_eq!(manager.child_dimensions(), IntSize::new(320, 72));
    assert!(provider.events().contains(&ProviderEvent::Measured {
        index: 0,
        width: MeasureSpec::exactly(304),
        height: MeasureSpec::unspecified(),
    }));
}

#[test]
fn over_scroll_mode_follows_the_host() {
    let mut manager = isolated_manager(WrapContentConfig::default());
    assert!(matches!(
        manager.set_over_scroll_mode(1),
        Err(wraplist_foundation::LayoutManagerError::NotAttached { .. })
    ));

    let host = Rc::new(RecordingHost::with_over_scroll_mode(OverScrollMode::Never));
    manager.attach(host.clone());
    assert_eq!(manager.over_scroll_mode(), OverScrollMode::Never);

    manager.set_over_scroll_mode(1).expect("valid mode");
    assert_eq!(host.over_scroll_mode(), OverScrollMode::IfContentScrolls);
    assert!(manager.set_over_scroll_mode(9).is_err());
    assert_eq!(host.over_scroll_mode(), OverScrollMode::IfContentScrolls);
}
