//! Virtualized list engine.
//!
//! Renders only the rows of a large, fixed-row-height list that are in or
//! near the viewport, and moves a single selection with the keyboard while
//! keeping it on screen.
//!
//! - [`window`]: which rows to materialize and the space around them
//! - [`viewport`]: measuring the container the list is mounted in
//! - [`navigator`]: Up/Down selection and the scrolling it triggers
//! - [`throttle`]: rate limiting for scroll events
//! - [`UltraList`]: all of the above behind one handle

pub mod config;
pub mod error;
pub mod event;
pub mod list;
pub mod navigator;
pub mod throttle;
pub mod viewport;
pub mod window;

pub use config::{DEFAULT_BUFFER_SIZE, DEFAULT_SCROLL_THROTTLE, ListConfig};
pub use error::{ConfigError, ListError};
pub use event::{EventResult, Key, SelectionChangeEvent};
pub use list::UltraList;
pub use navigator::{NavigationContext, NavigationOutcome, SelectionNavigator};
pub use throttle::Throttle;
pub use viewport::{PageScroll, ScrollContainer, ViewportState, ViewportTracker};
pub use window::{Placeholders, VisibleItem, Window, WindowBounds, compute_window, visible_items};
