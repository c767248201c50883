//! Window calculation: which rows to materialize and how much space to
//! reserve around them.

use std::fmt;
use std::ops::Range;

use crate::viewport::ViewportState;

/// Half-open index range `[low, high)` of materialized rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowBounds {
    pub low: usize,
    pub high: usize,
}

impl WindowBounds {
    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.high - self.low
    }

    /// Check if no rows are materialized.
    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    /// Check if `index` is materialized.
    pub fn contains(&self, index: usize) -> bool {
        (self.low..self.high).contains(&index)
    }

    /// Like [`contains`](Self::contains), for an unclamped navigation target.
    pub fn contains_signed(&self, index: isize) -> bool {
        usize::try_from(index).is_ok_and(|i| self.contains(i))
    }

    /// The bounds as a range.
    pub fn range(&self) -> Range<usize> {
        self.low..self.high
    }
}

/// Space reserved before and after the materialized rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placeholders {
    pub leading: f64,
    pub trailing: f64,
}

/// Formats as a CSS padding shorthand: `"{leading}px 0 {trailing}px 0"`.
impl fmt::Display for Placeholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px 0 {}px 0", self.leading, self.trailing)
    }
}

/// The computed window for one set of inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Window {
    pub bounds: WindowBounds,
    pub placeholders: Placeholders,
}

/// Compute the materialized window.
///
/// `low = max(0, floor(offset / h) - buffer)` and
/// `high = min(count, ceil((offset + height) / h) + buffer)`, with `low`
/// additionally capped at `high` so an offset past the end of the content
/// still yields a valid (empty) range. Placeholders plus materialized rows
/// always add up to `item_count * item_height`.
///
/// A non-positive or non-finite `item_height` yields an empty window; that
/// value is rejected by [`ListConfig::validate`](crate::ListConfig::validate)
/// before it can reach here.
pub fn compute_window(
    viewport: ViewportState,
    item_height: f64,
    buffer_size: usize,
    item_count: usize,
) -> Window {
    if !item_height.is_finite() || item_height <= 0.0 {
        return Window::default();
    }

    let offset = viewport.scroll_offset;
    let first = (offset / item_height).floor() as usize;
    let last = ((offset + viewport.container_height) / item_height).ceil() as usize;

    let high = last.saturating_add(buffer_size).min(item_count);
    let low = first.saturating_sub(buffer_size).min(high);

    let window = Window {
        bounds: WindowBounds { low, high },
        placeholders: Placeholders {
            leading: low as f64 * item_height,
            trailing: (item_count - high) as f64 * item_height,
        },
    };
    log::trace!(
        "[window] offset={} height={} -> {}..{} of {}",
        offset,
        viewport.container_height,
        low,
        high,
        item_count
    );
    window
}

/// Number of rows that fit in `container_height`, rounded up.
pub fn visible_length(container_height: f64, item_height: f64) -> usize {
    if !item_height.is_finite() || item_height <= 0.0 {
        return 0;
    }
    (container_height.max(0.0) / item_height).ceil() as usize
}

/// A materialized row handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem<T> {
    /// Copy of the caller's item.
    pub data: T,
    /// Whether this row is the selected one.
    pub selected: bool,
}

/// Project `items[bounds]` into [`VisibleItem`]s, flagging `selected`.
///
/// Items are cloned so the renderer never holds a borrow into the caller's
/// collection. Bounds past the end of `items` are truncated.
pub fn visible_items<T: Clone>(
    items: &[T],
    bounds: WindowBounds,
    selected: usize,
) -> Vec<VisibleItem<T>> {
    let high = bounds.high.min(items.len());
    let low = bounds.low.min(high);
    items[low..high]
        .iter()
        .enumerate()
        .map(|(offset, item)| VisibleItem {
            data: item.clone(),
            selected: low + offset == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(offset: f64, height: f64) -> ViewportState {
        ViewportState::new(offset, height)
    }

    #[test]
    fn invalid_height_gives_empty_window() {
        assert_eq!(compute_window(viewport(0.0, 100.0), 0.0, 5, 10), Window::default());
        assert_eq!(
            compute_window(viewport(0.0, 100.0), f64::NAN, 5, 10),
            Window::default()
        );
    }

    #[test]
    fn offset_past_end_is_empty() {
        let window = compute_window(viewport(10_000.0, 100.0), 10.0, 2, 50);
        assert_eq!(window.bounds, WindowBounds { low: 50, high: 50 });
        assert_eq!(window.placeholders.leading, 500.0);
        assert_eq!(window.placeholders.trailing, 0.0);
    }

    #[test]
    fn contains_signed_rejects_negative() {
        let bounds = WindowBounds { low: 0, high: 3 };
        assert!(!bounds.contains_signed(-1));
        assert!(bounds.contains_signed(0));
        assert!(!bounds.contains_signed(3));
    }

    #[test]
    fn visible_length_rounds_up() {
        assert_eq!(visible_length(200.0, 20.0), 10);
        assert_eq!(visible_length(201.0, 20.0), 11);
        assert_eq!(visible_length(0.0, 20.0), 0);
    }

    #[test]
    fn padding_shorthand() {
        let placeholders = Placeholders {
            leading: 40.0,
            trailing: 19700.0,
        };
        assert_eq!(placeholders.to_string(), "40px 0 19700px 0");
    }
}
