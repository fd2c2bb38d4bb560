use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Segments are parallel and not collinear, or are disjoint collinear/degenerate segments.
    NoIntersect,
    /// The segments cross or touch at one point.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments are collinear and share a stretch of the second segment.
    Overlapping {
        /// Parametric value for start of coincidence along second segment.
        seg2_t0: T,
        /// Parametric value for end of coincidence along second segment.
        seg2_t1: T,
    },
    /// The infinite lines cross but at least one segment would have to be extended.
    ///
    /// Rays use this case: a hit with `seg1_t >= 0` and `seg2_t` in `[0, 1]` is a ray hit.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between the line segments `v1 -> v2` and `u1 -> u2`.
///
/// Results are parametric using `P(t) = p0 + t * (p1 - p0)` for each segment. `epsilon` is
/// applied at length scale (parametric values are multiplied by segment length before fuzzy
/// comparing).
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(2.0, 0.0);
/// let u1 = Vector2::new(1.0, -1.0);
/// let u2 = Vector2::new(1.0, 1.0);
/// match line_line_intr(v1, v2, u1, u2, 1e-8) {
///     LineLineIntr::TrueIntersect { seg1_t, seg2_t } => {
///         assert_eq!(seg1_t, 0.5);
///         assert_eq!(seg2_t, 0.5);
///     }
///     r => panic!("unexpected result: {:?}", r),
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // works on the segments in parametric form using perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    // http://mathworld.wolfram.com/PerpDotProduct.html
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;
    let eps = epsilon;

    // parametric values are multiplied by segment length before fuzzy comparing so epsilon
    // applies at position scale, a difference in t of 0.1 is a far larger distance on a segment
    // of length 1,000,000 than on one of length 0.01
    let seg1_length = v.length();
    let seg2_length = u.length();

    // threshold check so almost parallel lines do not give a very distant intersect
    if !v_pdot_u.fuzzy_eq_zero_eps(eps) {
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }
        return TrueIntersect { seg1_t, seg2_t };
    }

    // parallel, almost parallel lines are treated as parallel
    if !v.perp_dot(w).fuzzy_eq_zero_eps(eps) || !u.perp_dot(w).fuzzy_eq_zero_eps(eps) {
        return NoIntersect;
    }

    // collinear or degenerate (single point segments)
    let v_is_point = v1.fuzzy_eq_eps(v2, eps);
    let u_is_point = u1.fuzzy_eq_eps(u2, eps);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    if v_is_point {
        let seg2_t = collinear_parametric(u1, u, v1);
        if (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }
        return NoIntersect;
    }

    if u_is_point {
        let seg1_t = collinear_parametric(v1, v, u1);
        if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps) {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    // collinear, find the span of v along u
    let mut seg2_t0 = collinear_parametric(u1, u, v1);
    let mut seg2_t1 = collinear_parametric(u1, u, v2);
    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    // fuzzy compare so near touches count as an intersect
    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, eps)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), eps)
    {
        return NoIntersect;
    }

    seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(eps) {
        // end to end touch
        let seg1_t = if v1.fuzzy_eq_eps(u1, eps) || v1.fuzzy_eq_eps(u2, eps) {
            T::zero()
        } else {
            T::one()
        };
        return TrueIntersect {
            seg1_t,
            seg2_t: seg2_t0,
        };
    }

    Overlapping { seg2_t0, seg2_t1 }
}

/// Parametric value of `point` along the line `start + t * dir`, `point` assumed on the line.
#[inline]
fn collinear_parametric<T>(start: Vector2<T>, dir: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (point - start).dot(dir) / dir.length_squared()
}
