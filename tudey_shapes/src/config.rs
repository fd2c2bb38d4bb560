//! Declarative shape descriptions.
//!
//! A [ShapeConfig] describes a shape in its own local space the way it would be authored (a
//! circle by its radius, a rectangle by its size, a compound by its placed parts). It is
//! validated and turned into a [Shape] by [ShapeConfig::shape].
use crate::{
    core::{
        math::{signed_area, Transform2D, Vector2},
        traits::Real,
    },
    error::ShapeConfigError,
    shape::{Capsule, Circle, Compound, Point, Polygon, Segment, Shape},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local space description of a shape.
///
/// Segments and capsules lie along the x axis centered on the origin, rectangles are centered on
/// the origin.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::config::*;
/// # use tudey_shapes::core::math::*;
/// # use tudey_shapes::shape::*;
/// let config = ShapeConfig::Rectangle {
///     width: 4.0,
///     height: 2.0,
/// };
/// let shape = config.shape().unwrap();
/// assert_eq!(shape.kind(), ShapeKind::Polygon);
/// assert_eq!(shape.bounds().max_x, 2.0);
/// assert!(ShapeConfig::Circle { radius: -1.0 }.shape().is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", tag = "type")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeConfig<T = f64> {
    /// A single point at the origin.
    Point,
    Segment {
        length: T,
    },
    Circle {
        radius: T,
    },
    Capsule {
        radius: T,
        length: T,
    },
    Rectangle {
        width: T,
        height: T,
    },
    /// Convex polygon; clockwise vertex lists are reversed.
    Polygon {
        vertices: Vec<Vector2<T>>,
    },
    Compound {
        shapes: Vec<TransformedShapeConfig<T>>,
    },
}

/// A shape config placed within a compound.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedShapeConfig<T = f64> {
    pub shape: ShapeConfig<T>,
    pub transform: Transform2D<T>,
}

impl<T> TransformedShapeConfig<T>
where
    T: Real,
{
    pub fn new(shape: ShapeConfig<T>, transform: Transform2D<T>) -> Self {
        Self { shape, transform }
    }
}

fn check_non_negative<T>(value: T, err: ShapeConfigError) -> Result<T, ShapeConfigError>
where
    T: Real,
{
    // NaN fails the comparison and is rejected too
    if value >= T::zero() {
        Ok(value)
    } else {
        Err(err)
    }
}

impl<T> ShapeConfig<T>
where
    T: Real,
{
    /// Builds the shape in local space.
    pub fn shape(&self) -> Result<Shape<T>, ShapeConfigError> {
        let result: Shape<T> = match self {
            ShapeConfig::Point => Point::new(Vector2::zero()).into(),
            ShapeConfig::Segment { length } => {
                let length = check_non_negative(*length, ShapeConfigError::NegativeLength)?;
                let half = length / T::two();
                Segment::new(Vector2::new(-half, T::zero()), Vector2::new(half, T::zero())).into()
            }
            ShapeConfig::Circle { radius } => {
                let radius = check_non_negative(*radius, ShapeConfigError::NegativeRadius)?;
                Circle::new(Vector2::zero(), radius).into()
            }
            ShapeConfig::Capsule { radius, length } => {
                let radius = check_non_negative(*radius, ShapeConfigError::NegativeRadius)?;
                let length = check_non_negative(*length, ShapeConfigError::NegativeLength)?;
                let half = length / T::two();
                Capsule::new(
                    Vector2::new(-half, T::zero()),
                    Vector2::new(half, T::zero()),
                    radius,
                )
                .into()
            }
            ShapeConfig::Rectangle { width, height } => {
                let width = check_non_negative(*width, ShapeConfigError::NegativeDimensions)?;
                let height = check_non_negative(*height, ShapeConfigError::NegativeDimensions)?;
                let (hw, hh) = (width / T::two(), height / T::two());
                Polygon::new(vec![
                    Vector2::new(-hw, -hh),
                    Vector2::new(hw, -hh),
                    Vector2::new(hw, hh),
                    Vector2::new(-hw, hh),
                ])
                .into()
            }
            ShapeConfig::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(ShapeConfigError::TooFewVertices {
                        count: vertices.len(),
                    });
                }
                let mut vertices = vertices.clone();
                if signed_area(&vertices) < T::zero() {
                    vertices.reverse();
                }
                Polygon::new(vertices).into()
            }
            ShapeConfig::Compound { shapes } => {
                let children = shapes
                    .iter()
                    .map(|child| Ok(child.shape.shape()?.transform(&child.transform)))
                    .collect::<Result<Vec<_>, ShapeConfigError>>()?;
                Compound::new(children).into()
            }
        };

        Ok(result)
    }
}
