//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so a distance failure surfaces unmodified.

use thiserror::Error;

/// Errors produced by `og-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Shorthand result type for `og-core`.
pub type CoreResult<T> = Result<T, CoreError>;
