//! Viewport tracking.
//!
//! The list does not own a scrollbar itself. It measures whatever element it
//! is mounted in through [`ScrollContainer`], and falls back to the
//! surrounding page's scroll offset through [`PageScroll`] when the container
//! is not the element that scrolls.

/// Geometry and scroll access for the element the list renders into.
///
/// Implementations wrap a host-owned element, so every method takes `&self`
/// and setters rely on the host's interior mutability.
pub trait ScrollContainer: Send + Sync {
    /// Height of the element's rendered box.
    fn offset_height(&self) -> f64;

    /// Height of the element's content, including overflow.
    fn scroll_height(&self) -> f64;

    /// Current scroll offset of the element.
    fn scroll_top(&self) -> f64;

    /// Scroll the element to `top`.
    ///
    /// Called while the list is updating its own state; any scroll event
    /// this causes must be delivered later, not from inside this call.
    fn set_scroll_top(&self, top: f64);
}

/// Scroll offset of the page that hosts the container.
pub trait PageScroll: Send + Sync {
    fn scroll_top(&self) -> f64;
}

/// Observed scroll offset and container height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub container_height: f64,
}

impl ViewportState {
    /// Create a state, clamping both values to finite non-negative numbers.
    pub fn new(scroll_offset: f64, container_height: f64) -> Self {
        Self {
            scroll_offset: non_negative(scroll_offset),
            container_height: non_negative(container_height),
        }
    }
}

/// Tracks the viewport of a mounted list.
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    state: ViewportState,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last measured state.
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Re-measure from the container (and page, if the container does not
    /// scroll on its own). Returns `true` if the state changed.
    pub fn measure(&mut self, container: &dyn ScrollContainer, page: Option<&dyn PageScroll>) -> bool {
        let box_height = container.offset_height();
        let scroll_offset = if container.scroll_height() > box_height {
            container.scroll_top()
        } else {
            page.map(|p| p.scroll_top()).unwrap_or(0.0)
        };

        let next = ViewportState::new(scroll_offset, box_height);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_garbage_geometry() {
        let state = ViewportState::new(-12.0, f64::NAN);
        assert_eq!(state, ViewportState::new(0.0, 0.0));
    }
}
