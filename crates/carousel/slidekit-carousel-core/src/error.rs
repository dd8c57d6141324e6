//! Error types for the carousel controller.

use thiserror::Error;

/// Failures surfaced by the carousel controller.
///
/// A layout that cannot be measured yet is not an error; see
/// [`Carousel::compute_offset`](crate::Carousel::compute_offset).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The controller cannot be built from this configuration and must not render.
    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(String),
    /// An index outside `[0, len)` was passed to a public navigation API.
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
