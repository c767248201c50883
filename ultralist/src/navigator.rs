//! Keyboard selection movement.
//!
//! Moving the selection may scroll the container so the selected row stays
//! in view. The policy is asymmetric: moving up past the top of the viewport
//! jumps straight to the target when it is not materialized yet, while moving
//! down past the bottom always scrolls by a single row. In both directions a
//! target that would still be outside the materialized window after that
//! adjustment gets a direct jump.

use crate::viewport::ViewportState;
use crate::window::{WindowBounds, compute_window};

/// Inputs for one navigation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationContext {
    /// Live scroll offset of the container.
    pub scroll_top: f64,
    /// Live box height of the container.
    pub box_height: f64,
    pub item_height: f64,
    pub buffer_size: usize,
    pub item_count: usize,
    /// The currently materialized window.
    pub window: WindowBounds,
}

impl NavigationContext {
    /// Index of the first fully visible row.
    pub fn current_ceil(&self) -> usize {
        (self.scroll_top.max(0.0) / self.item_height).ceil() as usize
    }

    /// One past the last fully visible row.
    pub fn current_floor(&self) -> usize {
        self.current_ceil() + (self.box_height.max(0.0) / self.item_height).floor() as usize
    }

    fn max_scroll(&self) -> f64 {
        (self.item_count as f64 * self.item_height - self.box_height).max(0.0)
    }

    fn clamp_scroll(&self, top: f64) -> f64 {
        top.clamp(0.0, self.max_scroll())
    }
}

/// Result of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationOutcome {
    /// Selected index after the step.
    pub selected: usize,
    /// New container scroll offset, if it has to change.
    pub scroll_to: Option<f64>,
}

/// Owns the selected index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionNavigator {
    selected: usize,
}

impl SelectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set the selection, clamped to the last row.
    pub fn set_selected(&mut self, index: usize, item_count: usize) {
        self.selected = clamp_selection(index as isize, item_count);
    }

    /// Re-clamp after the item count changed.
    pub fn clamp_to(&mut self, item_count: usize) {
        self.selected = self.selected.min(item_count.saturating_sub(1));
    }

    /// Move the selection by `step` rows and decide the scroll change that
    /// keeps it visible.
    pub fn step(&mut self, step: isize, cx: &NavigationContext) -> NavigationOutcome {
        let target = self.selected as isize + step;
        let h = cx.item_height;
        let current_ceil = cx.current_ceil() as isize;
        let current_floor = cx.current_floor() as isize;

        let mut scroll_top = cx.scroll_top;
        if step < 0 && target < current_ceil {
            if cx.window.contains_signed(target) {
                scroll_top += step as f64 * h;
                log::debug!("[navigator] up to {}: nudge to {}", target, scroll_top);
            } else {
                scroll_top = target as f64 * h;
                log::debug!("[navigator] up to {}: jump to {}", target, scroll_top);
            }
        } else if step > 0 && target > current_floor - 1 {
            scroll_top += step as f64 * h;
            log::debug!("[navigator] down to {}: nudge to {}", target, scroll_top);
        }
        scroll_top = cx.clamp_scroll(scroll_top);

        let after = compute_window(
            ViewportState::new(scroll_top, cx.box_height),
            h,
            cx.buffer_size,
            cx.item_count,
        );
        if !after.bounds.contains_signed(target) {
            scroll_top = cx.clamp_scroll(target as f64 * h);
            log::debug!(
                "[navigator] {} outside {:?}, jump to {}",
                target,
                after.bounds.range(),
                scroll_top
            );
        }

        self.selected = clamp_selection(target, cx.item_count);

        NavigationOutcome {
            selected: self.selected,
            scroll_to: (scroll_top != cx.scroll_top).then_some(scroll_top),
        }
    }
}

/// Clamp a target to `[0, item_count - 1]`; an empty list selects 0.
fn clamp_selection(target: isize, item_count: usize) -> usize {
    let last = item_count.saturating_sub(1);
    usize::try_from(target).unwrap_or(0).min(last)
}
