use super::{nearest_hit, shapes_intersect, IntersectionType, Shape};
use crate::core::{
    math::{
        aabb_center, aabb_is_empty, aabb_overlaps, aabb_union, empty_aabb, Ray2, Transform2D,
        Vector2,
    },
    traits::Real,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// A shape made of child shapes; it covers whatever any child covers.
///
/// A spatial index of the child bounds is rebuilt with the bounds and used to skip children that
/// cannot touch a query.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::math::*;
/// # use tudey_shapes::shape::*;
/// let dumbbell = Compound::new(vec![
///     Circle::new(Vector2::new(-2.0, 0.0), 1.0).into(),
///     Segment::new(Vector2::new(-2.0, 0.0), Vector2::new(2.0, 0.0)).into(),
///     Circle::new(Vector2::new(2.0, 0.0), 1.0).into(),
/// ]);
/// assert_eq!(dumbbell.len(), 3);
/// let point: Shape = Point::new(Vector2::new(2.5, 0.5)).into();
/// assert!(dumbbell.intersects_shape(&point));
/// ```
#[derive(Debug, Clone)]
pub struct Compound<T = f64>
where
    T: Real,
{
    shapes: Vec<Shape<T>>,
    bounds: AABB<T>,
    /// Index over the bounds of children with non empty bounds, `None` if there are none (or
    /// the index could not be built).
    index: Option<ChildIndex<T>>,
}

#[derive(Debug, Clone)]
struct ChildIndex<T>
where
    T: Real,
{
    spatial_index: StaticAABB2DIndex<T>,
    /// Maps index item positions to child positions.
    child_positions: Vec<usize>,
}

impl<T> Compound<T>
where
    T: Real,
{
    pub fn new(shapes: Vec<Shape<T>>) -> Self {
        let mut result = Compound {
            shapes,
            bounds: empty_aabb(),
            index: None,
        };
        result.refresh_bounds();
        result
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    /// Mutable access to the children, call [Compound::update_bounds] after changing them.
    #[inline]
    pub fn shapes_mut(&mut self) -> &mut Vec<Shape<T>> {
        &mut self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    /// Recomputes the bounds of every child, then the compound bounds and child index.
    pub fn update_bounds(&mut self) {
        for shape in self.shapes.iter_mut() {
            shape.update_bounds();
        }
        self.refresh_bounds();
    }

    /// Recomputes the compound bounds and child index from the children's cached bounds.
    fn refresh_bounds(&mut self) {
        self.bounds = self
            .shapes
            .iter()
            .fold(empty_aabb(), |acc, s| aabb_union(&acc, s.bounds()));
        self.index = build_child_index(&self.shapes);
    }

    /// Center of the bounds (origin for an empty compound).
    pub fn center(&self) -> Vector2<T> {
        if aabb_is_empty(&self.bounds) {
            return Vector2::zero();
        }
        aabb_center(&self.bounds)
    }

    pub fn transform(&self, transform: &Transform2D<T>) -> Self {
        Compound::new(self.shapes.iter().map(|s| s.transform(transform)).collect())
    }

    /// Transforms each child into the matching child of `result`, adding or dropping children
    /// of `result` so the counts match.
    pub fn transform_into(&self, transform: &Transform2D<T>, result: &mut Compound<T>) {
        result.shapes.truncate(self.shapes.len());
        for (i, shape) in self.shapes.iter().enumerate() {
            match result.shapes.get_mut(i) {
                Some(target) => shape.transform_into(transform, target),
                None => result.shapes.push(shape.transform(transform)),
            }
        }
        result.refresh_bounds();
    }

    pub fn transform_local(&mut self, transform: &Transform2D<T>) {
        for shape in self.shapes.iter_mut() {
            shape.transform_local(transform);
        }
        self.refresh_bounds();
    }

    /// Positions of the children whose bounds overlap `rect`.
    pub fn query_children(&self, rect: &AABB<T>) -> Vec<usize> {
        match &self.index {
            Some(index) => index
                .spatial_index
                .query(rect.min_x, rect.min_y, rect.max_x, rect.max_y)
                .into_iter()
                .map(|i| index.child_positions[i])
                .collect(),
            None => self
                .shapes
                .iter()
                .enumerate()
                .filter(|(_, s)| aabb_overlaps(s.bounds(), rect))
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Nearest hit among all children.
    pub fn intersection(&self, ray: &Ray2<T>) -> Option<Vector2<T>> {
        nearest_hit(ray.origin, self.shapes.iter().map(|s| s.intersection(ray)))
    }

    /// `Contains` if some child contains `rect`, else `Intersects` if some child touches it.
    pub fn intersection_type(&self, rect: &AABB<T>) -> IntersectionType {
        let mut result = IntersectionType::None;
        for i in self.query_children(rect) {
            match self.shapes[i].intersection_type(rect) {
                IntersectionType::Contains => return IntersectionType::Contains,
                IntersectionType::Intersects => result = IntersectionType::Intersects,
                IntersectionType::None => {}
            }
        }
        result
    }

    /// Returns true if any child intersects `other`.
    pub fn intersects_shape(&self, other: &Shape<T>) -> bool {
        let other_bounds = other.bounds();
        if aabb_is_empty(other_bounds) {
            return false;
        }

        // widen the query so fuzzy point/segment touches are not culled
        let eps = T::fuzzy_epsilon();
        let query = AABB::new(
            other_bounds.min_x - eps,
            other_bounds.min_y - eps,
            other_bounds.max_x + eps,
            other_bounds.max_y + eps,
        );
        self.query_children(&query)
            .into_iter()
            .any(|i| shapes_intersect(&self.shapes[i], other))
    }
}

fn build_child_index<T>(shapes: &[Shape<T>]) -> Option<ChildIndex<T>>
where
    T: Real,
{
    let child_positions: Vec<usize> = shapes
        .iter()
        .enumerate()
        .filter(|(_, s)| !aabb_is_empty(s.bounds()))
        .map(|(i, _)| i)
        .collect();
    if child_positions.is_empty() {
        return None;
    }

    let mut builder = StaticAABB2DIndexBuilder::new(child_positions.len());
    for &i in child_positions.iter() {
        let b = shapes[i].bounds();
        builder.add(b.min_x, b.min_y, b.max_x, b.max_y);
    }

    match builder.build() {
        Ok(spatial_index) => {
            log::trace!("built compound child index over {} shapes", child_positions.len());
            Some(ChildIndex {
                spatial_index,
                child_positions,
            })
        }
        Err(e) => {
            // non finite bounds, fall back to scanning children
            log::warn!("failed to build compound child index: {e}");
            None
        }
    }
}
