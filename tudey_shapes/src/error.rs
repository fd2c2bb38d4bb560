//! Error types for fallible construction and validation.
use thiserror::Error;

/// Errors from packing grid coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// A coordinate component does not fit in 16 signed bits.
    #[error("coordinate ({x}, {y}) is outside the packable range -32768..=32767")]
    OutOfRange { x: i32, y: i32 },
}

/// Errors from turning a [ShapeConfig](crate::config::ShapeConfig) into a shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ShapeConfigError {
    #[error("polygon requires at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("radius must not be negative")]
    NegativeRadius,
    #[error("length must not be negative")]
    NegativeLength,
    #[error("rectangle width and height must not be negative")]
    NegativeDimensions,
}
