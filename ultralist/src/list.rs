//! The virtualized list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::config::ListConfig;
use crate::error::ListError;
use crate::event::{EventResult, Key, SelectionChangeEvent};
use crate::navigator::{NavigationContext, SelectionNavigator};
use crate::throttle::Throttle;
use crate::viewport::{PageScroll, ScrollContainer, ViewportState, ViewportTracker};
use crate::window::{self, Placeholders, VisibleItem, Window, WindowBounds};

type ChangeListener = Arc<dyn Fn(SelectionChangeEvent) + Send + Sync>;

/// Internal state for the list.
struct ListInner<T> {
    items: Vec<T>,
    config: ListConfig,
    tracker: ViewportTracker,
    navigator: SelectionNavigator,
    /// Set between `mount` and `unmount`.
    container: Option<Arc<dyn ScrollContainer>>,
    page: Option<Arc<dyn PageScroll>>,
    /// Whether key input is currently routed to this list.
    active: bool,
    /// Rows that fit in the container, computed on mount.
    visible_length: usize,
    on_change: Option<ChangeListener>,
}

impl<T> ListInner<T> {
    fn window(&self) -> Window {
        window::compute_window(
            self.tracker.state(),
            self.config.item_height,
            self.config.buffer_size,
            self.items.len(),
        )
    }

    fn measure(&mut self) -> Result<bool, ListError> {
        let container = self.container.as_deref().ok_or(ListError::NotMounted)?;
        Ok(self.tracker.measure(container, self.page.as_deref()))
    }
}

/// A virtualized list with keyboard selection.
///
/// `UltraList<T>` holds the caller's rows and derives, on demand, the
/// window of rows to render, the space to reserve around them, and which
/// materialized row is selected:
/// - Scroll events go through a throttle before the viewport is re-measured
/// - Up/Down move the selection and scroll the container to keep it visible
/// - The host re-renders when [`is_dirty`](Self::is_dirty) is set
///
/// Clones share state, so a clone can be handed to the host's event loop.
///
/// # Example
///
/// ```ignore
/// let list = UltraList::new(rows, ListConfig::new(20.0))?;
/// list.mount(container, Some(page));
///
/// // scroll listener
/// list.on_scroll();
///
/// // render
/// let window = list.window();
/// for row in list.visible_items() {
///     draw(row.data, row.selected);
/// }
/// ```
pub struct UltraList<T> {
    inner: Arc<RwLock<ListInner<T>>>,
    dirty: Arc<AtomicBool>,
    scroll_gate: Throttle<()>,
}

impl<T: Clone + Send + Sync + 'static> UltraList<T> {
    /// Create a list, rejecting an invalid config.
    pub fn new(items: Vec<T>, config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;

        let interval = config.scroll_throttle;
        let inner = Arc::new(RwLock::new(ListInner {
            items,
            config,
            tracker: ViewportTracker::new(),
            navigator: SelectionNavigator::new(),
            container: None,
            page: None,
            active: false,
            visible_length: 0,
            on_change: None,
        }));
        let dirty = Arc::new(AtomicBool::new(false));

        let weak: Weak<RwLock<ListInner<T>>> = Arc::downgrade(&inner);
        let gate_dirty = Arc::clone(&dirty);
        let scroll_gate = Throttle::new(interval, move |()| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if let Ok(mut guard) = inner.write()
                && let Ok(true) = guard.measure()
            {
                gate_dirty.store(true, Ordering::SeqCst);
            }
        });

        Ok(Self {
            inner,
            dirty,
            scroll_gate,
        })
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach to a container, measure it, and start accepting scroll and key
    /// input.
    ///
    /// `page` is consulted for the scroll offset when the container's content
    /// does not overflow it.
    pub fn mount(&self, container: Arc<dyn ScrollContainer>, page: Option<Arc<dyn PageScroll>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.container = Some(container);
            guard.page = page;
            let _ = guard.measure();
            guard.visible_length = window::visible_length(
                guard.tracker.state().container_height,
                guard.config.item_height,
            );
            guard.active = true;
            log::debug!(
                "[ultralist] mounted: {:?}, {} rows visible",
                guard.tracker.state(),
                guard.visible_length
            );
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Detach from the container. Pending scroll work is cancelled and input
    /// is ignored until the next [`mount`](Self::mount).
    pub fn unmount(&self) {
        self.scroll_gate.cancel();
        if let Ok(mut guard) = self.inner.write() {
            guard.container = None;
            guard.page = None;
            guard.active = false;
            log::debug!("[ultralist] unmounted");
        }
    }

    /// Check if the list is mounted.
    pub fn is_mounted(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.container.is_some())
            .unwrap_or(false)
    }

    /// Route key input to this list. Has no effect while unmounted.
    pub fn activate(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.container.is_some()
        {
            guard.active = true;
        }
    }

    /// Stop routing key input to this list.
    pub fn deactivate(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.active = false;
        }
    }

    /// Check if key input is routed to this list.
    pub fn is_active(&self) -> bool {
        self.inner.read().map(|g| g.active).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Scroll listener. Re-measures the viewport through the scroll throttle.
    pub fn on_scroll(&self) {
        if self.is_mounted() {
            self.scroll_gate.invoke(());
        }
    }

    /// Resize listener. Re-measures immediately.
    pub fn on_resize(&self) -> Result<(), ListError> {
        self.check_viewport().map(|_| ())
    }

    /// Re-measure the viewport now. Returns `true` if it changed.
    pub fn check_viewport(&self) -> Result<bool, ListError> {
        let changed = match self.inner.write() {
            Ok(mut guard) => guard.measure()?,
            Err(_) => false,
        };
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(changed)
    }

    /// Handle keyboard input.
    ///
    /// Up and Down move the selection, scroll the container if needed and
    /// notify the change listener. Other keys, and all keys while the list
    /// is inactive, are ignored.
    pub fn handle_key(&self, key: Key) -> (EventResult, Option<SelectionChangeEvent>) {
        let Some(step) = key.step() else {
            return (EventResult::Ignored, None);
        };

        let (event, listener) = {
            let Ok(mut guard) = self.inner.write() else {
                return (EventResult::Ignored, None);
            };
            if !guard.active {
                return (EventResult::Ignored, None);
            }
            let Some(container) = guard.container.clone() else {
                return (EventResult::Ignored, None);
            };

            let live = ViewportState::new(container.scroll_top(), container.offset_height());
            let cx = NavigationContext {
                scroll_top: live.scroll_offset,
                box_height: live.container_height,
                item_height: guard.config.item_height,
                buffer_size: guard.config.buffer_size,
                item_count: guard.items.len(),
                window: guard.window().bounds,
            };
            let outcome = guard.navigator.step(step, &cx);
            if let Some(top) = outcome.scroll_to {
                container.set_scroll_top(top);
            }
            // The scroll above was programmatic, so no scroll event will
            // re-measure for us.
            let _ = guard.measure();
            self.dirty.store(true, Ordering::SeqCst);

            (
                SelectionChangeEvent {
                    index: outcome.selected,
                },
                guard.on_change.clone(),
            )
        };

        if let Some(listener) = listener {
            listener(event);
        }
        (EventResult::Consumed, Some(event))
    }

    /// Register the selection change listener, replacing any previous one.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(SelectionChangeEvent) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(listener));
        }
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.items.len()).unwrap_or(0)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.items.get(index).cloned())
    }

    /// Replace all items. The selection is clamped to the new length.
    pub fn set_items(&self, items: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items;
            let count = guard.items.len();
            guard.navigator.clamp_to(count);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selected index.
    pub fn selected(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.navigator.selected())
            .unwrap_or(0)
    }

    /// Select `index`, clamped to the last row. Does not scroll.
    pub fn set_selected(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let count = guard.items.len();
            guard.navigator.set_selected(index, count);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Get the configuration.
    pub fn config(&self) -> ListConfig {
        match self.inner.read() {
            Ok(guard) => guard.config.clone(),
            Err(poisoned) => poisoned.into_inner().config.clone(),
        }
    }

    /// Get the last measured viewport.
    pub fn viewport(&self) -> ViewportState {
        self.inner
            .read()
            .map(|g| g.tracker.state())
            .unwrap_or_default()
    }

    /// Compute the current window.
    pub fn window(&self) -> Window {
        self.inner.read().map(|g| g.window()).unwrap_or_default()
    }

    /// Get the materialized index range.
    pub fn bounds(&self) -> WindowBounds {
        self.window().bounds
    }

    /// Get the space to reserve around the materialized rows.
    pub fn placeholders(&self) -> Placeholders {
        self.window().placeholders
    }

    /// Get copies of the materialized rows with their selection flags.
    pub fn visible_items(&self) -> Vec<VisibleItem<T>> {
        self.inner
            .read()
            .map(|g| window::visible_items(&g.items, g.window().bounds, g.navigator.selected()))
            .unwrap_or_default()
    }

    /// Rows that fit in the container, as measured on mount.
    pub fn visible_length(&self) -> usize {
        self.inner.read().map(|g| g.visible_length).unwrap_or(0)
    }

    /// Total scrollable height of all rows.
    pub fn total_height(&self) -> f64 {
        self.inner
            .read()
            .map(|g| g.items.len() as f64 * g.config.item_height)
            .unwrap_or(0.0)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the list has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for UltraList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            scroll_gate: self.scroll_gate.clone(),
        }
    }
}

impl<T> std::fmt::Debug for UltraList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("UltraList");
        if let Ok(guard) = self.inner.read() {
            s.field("len", &guard.items.len())
                .field("selected", &guard.navigator.selected())
                .field("viewport", &guard.tracker.state())
                .field("active", &guard.active);
        }
        s.field("dirty", &self.dirty.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
