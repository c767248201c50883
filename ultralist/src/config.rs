//! List configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Rows materialized beyond each edge of the viewport when not configured.
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Minimum spacing between immediate scroll recomputations.
pub const DEFAULT_SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Configuration for an [`UltraList`](crate::UltraList).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ultralist::ListConfig;
///
/// let config = ListConfig::new(20.0)
///     .buffer_size(8)
///     .scroll_throttle(Duration::from_millis(50));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    /// Height of every row, in the container's units.
    pub item_height: f64,

    /// Extra rows materialized above and below the visible range.
    pub buffer_size: usize,

    /// Interval for the scroll throttle.
    pub scroll_throttle: Duration,
}

impl ListConfig {
    /// Create a config with the given row height and default buffer/throttle.
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            buffer_size: DEFAULT_BUFFER_SIZE,
            scroll_throttle: DEFAULT_SCROLL_THROTTLE,
        }
    }

    /// Set the buffer size.
    pub fn buffer_size(mut self, rows: usize) -> Self {
        self.buffer_size = rows;
        self
    }

    /// Set the scroll throttle interval.
    pub fn scroll_throttle(mut self, interval: Duration) -> Self {
        self.scroll_throttle = interval;
        self
    }

    /// Check the config, logging the reason for any rejection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            log::error!("[ultralist] rejecting item height {}", self.item_height);
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        if self.scroll_throttle.is_zero() {
            log::error!("[ultralist] rejecting zero scroll throttle interval");
            return Err(ConfigError::ZeroThrottleInterval);
        }
        Ok(())
    }
}
