//! Terminal region the list scrolls in.

use std::sync::Mutex;

use ultralist::ScrollContainer;

/// A block of terminal rows with its own scroll offset.
///
/// One row of height is one terminal line.
#[derive(Debug)]
pub struct TermContainer {
    geometry: Mutex<Geometry>,
}

#[derive(Debug, Clone, Copy)]
struct Geometry {
    box_height: f64,
    content_height: f64,
    scroll_top: f64,
}

impl Geometry {
    fn max_scroll(&self) -> f64 {
        (self.content_height - self.box_height).max(0.0)
    }
}

impl TermContainer {
    pub fn new(box_height: u16, content_height: f64) -> Self {
        Self {
            geometry: Mutex::new(Geometry {
                box_height: box_height as f64,
                content_height,
                scroll_top: 0.0,
            }),
        }
    }

    /// Resize the box, keeping the offset in range.
    pub fn resize(&self, box_height: u16) {
        if let Ok(mut g) = self.geometry.lock() {
            g.box_height = box_height as f64;
            g.scroll_top = g.scroll_top.min(g.max_scroll());
        }
    }

    /// Scroll by `delta` lines, as a mouse wheel does.
    pub fn scroll_by(&self, delta: f64) {
        let top = self.scroll_top() + delta;
        self.set_scroll_top(top);
    }
}

impl ScrollContainer for TermContainer {
    fn offset_height(&self) -> f64 {
        self.geometry.lock().map(|g| g.box_height).unwrap_or(0.0)
    }

    fn scroll_height(&self) -> f64 {
        self.geometry.lock().map(|g| g.content_height).unwrap_or(0.0)
    }

    fn scroll_top(&self) -> f64 {
        self.geometry.lock().map(|g| g.scroll_top).unwrap_or(0.0)
    }

    fn set_scroll_top(&self, top: f64) {
        if let Ok(mut g) = self.geometry.lock() {
            g.scroll_top = top.clamp(0.0, g.max_scroll());
        }
    }
}
