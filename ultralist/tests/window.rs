use ultralist::{ViewportState, WindowBounds, compute_window, visible_items};

fn viewport(offset: f64, height: f64) -> ViewportState {
    ViewportState::new(offset, height)
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_window_at_top() {
    let window = compute_window(viewport(0.0, 200.0), 20.0, 5, 1000);

    assert_eq!(window.bounds, WindowBounds { low: 0, high: 15 });
    assert_eq!(window.placeholders.leading, 0.0);
    assert_eq!(window.placeholders.trailing, 19700.0);
}

#[test]
fn test_window_scrolled() {
    // Rows 25..35 are visible, buffer adds 5 each side
    let window = compute_window(viewport(500.0, 200.0), 20.0, 5, 1000);

    assert_eq!(window.bounds, WindowBounds { low: 20, high: 40 });
    assert_eq!(window.placeholders.leading, 400.0);
    assert_eq!(window.placeholders.trailing, 960.0 * 20.0);
}

#[test]
fn test_window_partial_rows() {
    // Offset 510 starts mid-row 25, bottom edge 710 ends mid-row 35
    let window = compute_window(viewport(510.0, 200.0), 20.0, 0, 1000);

    assert_eq!(window.bounds, WindowBounds { low: 25, high: 36 });
}

#[test]
fn test_window_at_bottom() {
    let window = compute_window(viewport(19800.0, 200.0), 20.0, 5, 1000);

    assert_eq!(window.bounds, WindowBounds { low: 985, high: 1000 });
    assert_eq!(window.placeholders.trailing, 0.0);
}

#[test]
fn test_window_empty_list() {
    let window = compute_window(viewport(0.0, 200.0), 20.0, 5, 0);

    assert_eq!(window.bounds, WindowBounds { low: 0, high: 0 });
    assert!(window.bounds.is_empty());
    assert_eq!(window.placeholders.leading, 0.0);
    assert_eq!(window.placeholders.trailing, 0.0);
}

#[test]
fn test_window_unmeasured_container() {
    // Height 0 leaves only the buffer around the offset
    let window = compute_window(viewport(400.0, 0.0), 20.0, 3, 1000);

    assert_eq!(window.bounds, WindowBounds { low: 17, high: 23 });
    assert!(window.bounds.len() <= 2 * 3);
}

#[test]
fn test_window_fewer_items_than_viewport() {
    let window = compute_window(viewport(0.0, 200.0), 20.0, 5, 4);

    assert_eq!(window.bounds, WindowBounds { low: 0, high: 4 });
    assert_eq!(window.placeholders.trailing, 0.0);
}

#[test]
fn test_window_is_idempotent() {
    let a = compute_window(viewport(1234.5, 321.0), 17.0, 4, 5000);
    let b = compute_window(viewport(1234.5, 321.0), 17.0, 4, 5000);
    assert_eq!(a, b);
}

#[test]
fn test_window_invariants_hold_across_inputs() {
    let heights = [1.0, 7.5, 20.0, 33.0];
    let counts = [0usize, 1, 9, 100, 1000];
    let buffers = [0usize, 1, 5, 50];
    let offsets = [0.0, 3.0, 99.9, 640.0, 20_000.0, 1e9];
    let containers = [0.0, 1.0, 200.0, 5000.0];

    for &h in &heights {
        for &count in &counts {
            for &buffer in &buffers {
                for &offset in &offsets {
                    for &container in &containers {
                        let window = compute_window(viewport(offset, container), h, buffer, count);
                        let WindowBounds { low, high } = window.bounds;
                        assert!(low <= high, "low {low} > high {high}");
                        assert!(high <= count, "high {high} > count {count}");

                        let total = window.placeholders.leading
                            + (high - low) as f64 * h
                            + window.placeholders.trailing;
                        let expected = count as f64 * h;
                        assert!(
                            (total - expected).abs() < 1e-6,
                            "total {total} != {expected} for h={h} count={count} offset={offset}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_window_negative_offset_clamps() {
    let window = compute_window(viewport(-300.0, 200.0), 20.0, 0, 100);
    assert_eq!(window.bounds, WindowBounds { low: 0, high: 10 });
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_visible_items_flags_selected() {
    let items: Vec<u32> = (0..100).collect();
    let rows = visible_items(&items, WindowBounds { low: 10, high: 15 }, 12);

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].data, 10);
    assert_eq!(rows[4].data, 14);
    let selected: Vec<u32> = rows.iter().filter(|r| r.selected).map(|r| r.data).collect();
    assert_eq!(selected, vec![12]);
}

#[test]
fn test_visible_items_selection_outside_window() {
    let items: Vec<u32> = (0..100).collect();
    let rows = visible_items(&items, WindowBounds { low: 10, high: 15 }, 15);

    assert!(rows.iter().all(|r| !r.selected));
}

#[test]
fn test_visible_items_are_copies() {
    #[derive(Debug, Clone, PartialEq)]
    struct Stock {
        code: u32,
        name: String,
    }

    let items = vec![
        Stock {
            code: 1,
            name: "A".into(),
        },
        Stock {
            code: 2,
            name: "B".into(),
        },
    ];
    let mut rows = visible_items(&items, WindowBounds { low: 0, high: 2 }, 0);
    rows[0].data.name.push_str(" edited");

    assert_eq!(items[0].name, "A");
    assert_eq!(rows[1].data, items[1]);
}

#[test]
fn test_visible_items_truncates_stale_bounds() {
    let items = vec!['a', 'b', 'c'];
    let rows = visible_items(&items, WindowBounds { low: 1, high: 10 }, 2);

    let data: Vec<char> = rows.iter().map(|r| r.data).collect();
    assert_eq!(data, vec!['b', 'c']);
    assert!(rows[1].selected);
}
