use super::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid 2D transform with an optional uniform scale.
///
/// Points are scaled, then rotated counter clockwise by `rotation` radians, then translated.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// use std::f64::consts::FRAC_PI_2;
/// let t = Transform2D::new(Vector2::new(10.0, 0.0), FRAC_PI_2);
/// assert!(t.transform_point(Vector2::new(1.0, 0.0)).fuzzy_eq(Vector2::new(10.0, 1.0)));
/// let back = t.invert().transform_point(Vector2::new(10.0, 1.0));
/// assert!(back.fuzzy_eq(Vector2::new(1.0, 0.0)));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D<T = f64> {
    /// Translation applied last.
    pub translation: Vector2<T>,
    /// Counter clockwise rotation in radians.
    pub rotation: T,
    /// Uniform scale applied first.
    pub scale: T,
}

impl<T> Default for Transform2D<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Transform2D<T>
where
    T: Real,
{
    /// Transform that leaves every point where it is.
    #[inline]
    pub fn identity() -> Self {
        Self {
            translation: Vector2::zero(),
            rotation: T::zero(),
            scale: T::one(),
        }
    }

    /// Rigid transform (rotation then translation, no scale).
    #[inline]
    pub fn new(translation: Vector2<T>, rotation: T) -> Self {
        Self {
            translation,
            rotation,
            scale: T::one(),
        }
    }

    /// Pure translation.
    #[inline]
    pub fn from_translation(translation: Vector2<T>) -> Self {
        Self::new(translation, T::zero())
    }

    /// Returns a copy of this transform with the uniform `scale` given.
    #[inline]
    pub fn with_scale(mut self, scale: T) -> Self {
        self.scale = scale;
        self
    }

    /// Transforms a position.
    #[inline]
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        self.transform_vector(point) + self.translation
    }

    /// Transforms a direction/offset (scale and rotation only).
    #[inline]
    pub fn transform_vector(&self, vector: Vector2<T>) -> Vector2<T> {
        vector.scale(self.scale).rotate(self.rotation)
    }

    /// Returns the transform equivalent to applying `other` first and then `self`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            translation: self.transform_point(other.translation),
            rotation: self.rotation + other.rotation,
            scale: self.scale * other.scale,
        }
    }

    /// Returns the inverse transform. The scale must be non zero.
    #[inline]
    pub fn invert(&self) -> Self {
        debug_assert!(!self.scale.fuzzy_eq_zero(), "cannot invert a zero scale transform");
        let scale = T::one() / self.scale;
        Self {
            translation: (-self.translation).rotate(-self.rotation).scale(scale),
            rotation: -self.rotation,
            scale,
        }
    }
}
