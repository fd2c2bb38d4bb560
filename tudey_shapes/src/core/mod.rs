//! Core module has the numeric traits and 2D math primitives the shapes are built on.
pub mod math;
pub mod traits;
