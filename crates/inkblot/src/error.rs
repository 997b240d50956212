//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected render parameters, non-finite noise coordinates and image encoding.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("non-finite noise coordinate ({x}, {y}, {z})")]
    NonFiniteCoordinate { x: f64, y: f64, z: f64 },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
