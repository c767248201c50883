use ultralist::{
    NavigationContext, SelectionNavigator, ViewportState, WindowBounds, compute_window,
};

const ITEM_HEIGHT: f64 = 20.0;
const BUFFER: usize = 5;

/// Context whose window matches the live scroll position.
fn context(scroll_top: f64, box_height: f64, item_count: usize) -> NavigationContext {
    let window = compute_window(
        ViewportState::new(scroll_top, box_height),
        ITEM_HEIGHT,
        BUFFER,
        item_count,
    );
    NavigationContext {
        scroll_top,
        box_height,
        item_height: ITEM_HEIGHT,
        buffer_size: BUFFER,
        item_count,
        window: window.bounds,
    }
}

fn navigator_at(index: usize, item_count: usize) -> SelectionNavigator {
    let mut nav = SelectionNavigator::new();
    nav.set_selected(index, item_count);
    nav
}

// ============================================================================
// Down
// ============================================================================

#[test]
fn test_down_past_bottom_nudges_one_row() {
    // Nine rows fit, so the last fully visible row is 8
    let cx = context(0.0, 180.0, 1000);
    assert_eq!(cx.current_floor(), 9);

    let mut nav = navigator_at(10, 1000);
    let outcome = nav.step(1, &cx);

    assert_eq!(outcome.selected, 11);
    assert_eq!(outcome.scroll_to, Some(ITEM_HEIGHT));
    assert_eq!(nav.selected(), 11);
}

#[test]
fn test_down_within_viewport_does_not_scroll() {
    let cx = context(0.0, 200.0, 1000);
    let mut nav = navigator_at(3, 1000);

    let outcome = nav.step(1, &cx);

    assert_eq!(outcome.selected, 4);
    assert_eq!(outcome.scroll_to, None);
}

#[test]
fn test_down_onto_first_hidden_row() {
    // Rows 0..=9 visible, moving from 9 to 10 scrolls by one row
    let cx = context(0.0, 200.0, 1000);
    let mut nav = navigator_at(9, 1000);

    let outcome = nav.step(1, &cx);

    assert_eq!(outcome.selected, 10);
    assert_eq!(outcome.scroll_to, Some(20.0));
}

#[test]
fn test_down_far_from_viewport_jumps() {
    // Selection is far below what is materialized; a single row nudge
    // would not reach it
    let cx = context(0.0, 200.0, 1000);
    let mut nav = navigator_at(500, 1000);

    let outcome = nav.step(1, &cx);

    assert_eq!(outcome.selected, 501);
    assert_eq!(outcome.scroll_to, Some(501.0 * ITEM_HEIGHT));
}

#[test]
fn test_down_at_last_row_stays() {
    let cx = context(200.0, 200.0, 20);
    let mut nav = navigator_at(19, 20);

    let outcome = nav.step(1, &cx);

    assert_eq!(outcome.selected, 19);
    assert_eq!(outcome.scroll_to, None);
}

// ============================================================================
// Up
// ============================================================================

#[test]
fn test_up_into_buffer_nudges_one_row() {
    // Row 20 is the top visible row; 19 is already buffered
    let cx = context(400.0, 200.0, 1000);
    assert_eq!(cx.current_ceil(), 20);
    assert!(cx.window.contains(19));

    let mut nav = navigator_at(20, 1000);
    let outcome = nav.step(-1, &cx);

    assert_eq!(outcome.selected, 19);
    assert_eq!(outcome.scroll_to, Some(380.0));
}

#[test]
fn test_up_outside_window_jumps_to_target() {
    let cx = NavigationContext {
        window: WindowBounds { low: 195, high: 215 },
        ..context(4000.0, 200.0, 1000)
    };
    let mut nav = navigator_at(50, 1000);

    let outcome = nav.step(-1, &cx);

    assert_eq!(outcome.selected, 49);
    assert_eq!(outcome.scroll_to, Some(49.0 * ITEM_HEIGHT));
}

#[test]
fn test_up_from_below_viewport_jumps() {
    // Not above the viewport, but nowhere near the materialized rows
    let cx = context(0.0, 200.0, 1000);
    let mut nav = navigator_at(500, 1000);

    let outcome = nav.step(-1, &cx);

    assert_eq!(outcome.selected, 499);
    assert_eq!(outcome.scroll_to, Some(499.0 * ITEM_HEIGHT));
}

#[test]
fn test_up_at_first_row_stays() {
    let cx = context(0.0, 200.0, 1000);
    let mut nav = navigator_at(0, 1000);

    let outcome = nav.step(-1, &cx);

    assert_eq!(outcome.selected, 0);
    assert_eq!(outcome.scroll_to, None);
}

#[test]
fn test_up_within_viewport_does_not_scroll() {
    let cx = context(400.0, 200.0, 1000);
    let mut nav = navigator_at(25, 1000);

    let outcome = nav.step(-1, &cx);

    assert_eq!(outcome.selected, 24);
    assert_eq!(outcome.scroll_to, None);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_list() {
    let cx = context(0.0, 200.0, 0);
    let mut nav = SelectionNavigator::new();

    assert_eq!(nav.step(1, &cx).selected, 0);
    assert_eq!(nav.step(-1, &cx).selected, 0);
    assert_eq!(nav.step(1, &cx).scroll_to, None);
}

#[test]
fn test_clamp_to_shrunk_list() {
    let mut nav = navigator_at(80, 100);
    nav.clamp_to(10);
    assert_eq!(nav.selected(), 9);

    nav.clamp_to(0);
    assert_eq!(nav.selected(), 0);
}

#[test]
fn test_selection_stays_in_range_over_walk() {
    let count = 37;
    let mut nav = SelectionNavigator::new();
    let mut scroll_top = 0.0;

    let steps = [1isize, 1, 1, -1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
    for round in 0..20 {
        for &s in &steps {
            let step = if round % 3 == 2 { -s } else { s };
            let cx = context(scroll_top, 130.0, count);
            let outcome = nav.step(step, &cx);
            assert!(outcome.selected < count);
            if let Some(top) = outcome.scroll_to {
                assert!(top >= 0.0);
                assert!(top <= count as f64 * ITEM_HEIGHT);
                scroll_top = top;
            }
        }
    }
}
