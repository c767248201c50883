//! Error types.

use thiserror::Error;

/// Rejected list configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Item height must be a finite number greater than zero.
    #[error("item height must be finite and greater than zero, got {0}")]
    InvalidItemHeight(f64),

    /// The scroll throttle needs a non-zero interval.
    #[error("scroll throttle interval must be greater than zero")]
    ZeroThrottleInterval,
}

/// Errors returned by [`UltraList`](crate::UltraList) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The operation needs a container, but the list has not been mounted.
    #[error("list is not mounted")]
    NotMounted,
}
