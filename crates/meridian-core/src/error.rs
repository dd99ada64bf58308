// File: crates/meridian-core/src/error.rs
// Summary: Setup error taxonomy; every variant recovers to a silent no-op at the public boundary.

use thiserror::Error;

/// Configuration errors detected during chart setup. `LiveChart::create`
/// logs these and returns `None`; nothing propagates to the caller.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("container #{0} not found")]
    ContainerNotFound(String),

    #[error("container #{id} has unusable inline size {value:?}")]
    InvalidSize { id: String, value: String },
}
