use super::{Coord, Direction, Region};
use crate::error::CoordError;
use rand::{seq::SliceRandom, Rng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of grid coordinates.
///
/// Coordinates are stored as packed keys (see [Coord::encode]) in a vector sorted by the key
/// read as a signed integer, so membership is a binary search and [CoordSet::get] is positional.
/// Iteration follows key order (ascending `x` first), which changes as coordinates are added or
/// removed.
///
/// Adding a coordinate outside the `i16` range panics (use [CoordSet::try_add] to handle it),
/// while queries for such coordinates simply report them as absent.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::coord::*;
/// let mut set = CoordSet::from_region(Region::new(0, 0, 3, 2));
/// assert_eq!(set.len(), 6);
/// assert!(set.contains(2, 1));
/// assert!(set.remove(2, 1));
/// assert!(!set.contains_all(0, 0, 3, 2));
/// assert_eq!(set.largest_region(), Region::new(0, 0, 2, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct CoordSet {
    keys: Vec<i32>,
}

impl CoordSet {
    #[inline]
    pub fn new() -> Self {
        CoordSet { keys: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        CoordSet {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Set holding every cell of `region`.
    pub fn from_region(region: Region) -> Self {
        let mut result = CoordSet::with_capacity(region.area() as usize);
        result.add_region(region);
        result
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Adds `(x, y)`, returning true if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the packable range.
    #[inline]
    pub fn add(&mut self, x: i32, y: i32) -> bool {
        self.insert_key(Coord::encode(x, y) as i32)
    }

    /// Same as [CoordSet::add] but returns an error for out of range coordinates.
    #[inline]
    pub fn try_add(&mut self, x: i32, y: i32) -> Result<bool, CoordError> {
        Ok(self.insert_key(Coord::try_encode(x, y)? as i32))
    }

    /// Removes `(x, y)`, returning true if it was present.
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        let Ok(key) = Coord::try_encode(x, y) else {
            return false;
        };
        match self.keys.binary_search(&(key as i32)) {
            Ok(i) => {
                self.keys.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Coord::try_encode(x, y).map_or(false, |key| self.keys.binary_search(&(key as i32)).is_ok())
    }

    #[inline]
    pub fn add_coord(&mut self, coord: Coord) -> bool {
        self.add(coord.x, coord.y)
    }

    #[inline]
    pub fn remove_coord(&mut self, coord: Coord) -> bool {
        self.remove(coord.x, coord.y)
    }

    #[inline]
    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.contains(coord.x, coord.y)
    }

    /// Adds every cell of the `width` by `height` region at `(x, y)`, returning true if any
    /// were new.
    ///
    /// # Panics
    ///
    /// Panics if any cell is outside the packable range.
    pub fn add_all(&mut self, x: i32, y: i32, width: i32, height: i32) -> bool {
        let region = Region::new(x, y, width, height);
        self.extend_keys(region.coords().map(|c| c.key() as i32))
    }

    /// Removes every cell of the region, returning true if any were present.
    pub fn remove_all(&mut self, x: i32, y: i32, width: i32, height: i32) -> bool {
        let region = Region::new(x, y, width, height);
        let before = self.keys.len();
        self.keys.retain(|&key| {
            let c = Coord::decode(key as u32);
            !region.contains(c.x, c.y)
        });
        self.keys.len() != before
    }

    /// Returns true if every cell of the region is present (vacuously true for an empty region).
    pub fn contains_all(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        Region::new(x, y, width, height)
            .coords()
            .all(|c| self.contains(c.x, c.y))
    }

    #[inline]
    pub fn add_region(&mut self, region: Region) -> bool {
        self.add_all(region.x, region.y, region.width, region.height)
    }

    #[inline]
    pub fn remove_region(&mut self, region: Region) -> bool {
        self.remove_all(region.x, region.y, region.width, region.height)
    }

    #[inline]
    pub fn contains_region(&self, region: Region) -> bool {
        self.contains_all(region.x, region.y, region.width, region.height)
    }

    /// Coordinate at `index` in iteration order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Coord> {
        self.keys.get(index).map(|&key| Coord::decode(key as u32))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.keys.iter(),
        }
    }

    /// Uniformly random member, `None` if the set is empty.
    pub fn pick_random<R>(&self, rng: &mut R) -> Option<Coord>
    where
        R: Rng + ?Sized,
    {
        if self.keys.is_empty() {
            return None;
        }
        self.get(rng.gen_range(0..self.keys.len()))
    }

    /// Uniformly random origin of a `width` by `height` region lying entirely in the set, `None`
    /// if there is no such region.
    pub fn pick_random_region<R>(&self, width: i32, height: i32, rng: &mut R) -> Option<Coord>
    where
        R: Rng + ?Sized,
    {
        if width == 1 && height == 1 {
            return self.pick_random(rng);
        }

        let origins: Vec<Coord> = self
            .iter()
            .filter(|c| self.contains_all(c.x, c.y, width, height))
            .collect();
        origins.choose(rng).copied()
    }

    /// Finds a large fully covered region.
    ///
    /// For each member taken as the lower left corner, rows are grown upward while the column
    /// above the corner stays covered; each row is as wide as the covered run starting at the
    /// corner column, capped by the width of the row below. The largest area seen wins, ties
    /// going to the earliest. This is a heuristic and can miss the true largest rectangle when
    /// a wider block sits above a narrow row. Empty sets give an empty region at the origin.
    pub fn largest_region(&self) -> Region {
        let mut result = Region::default();
        let mut result_area = 0i64;
        for coord in self.iter() {
            let mut max_width = i32::MAX;
            let mut yy = coord.y;
            while self.contains(coord.x, yy) {
                let height = yy - coord.y + 1;
                let mut width = 1;
                while width < max_width && self.contains(coord.x + width, yy) {
                    width += 1;
                }
                max_width = width;
                let area = width as i64 * height as i64;
                if area > result_area {
                    result = Region::new(coord.x, coord.y, width, height);
                    result_area = area;
                }
                yy += 1;
            }
        }
        result
    }

    /// Coordinates adjacent (in all eight directions) to a member but not members themselves.
    pub fn border(&self) -> CoordSet {
        let mut result = CoordSet::new();
        self.border_into(&mut result);
        result
    }

    /// Adds the coordinates of [CoordSet::border] to `result`.
    pub fn border_into(&self, result: &mut CoordSet) {
        self.add_border(&Direction::ALL, result);
    }

    /// Coordinates adjacent in a cardinal direction to a member but not members themselves.
    pub fn cardinal_border(&self) -> CoordSet {
        let mut result = CoordSet::new();
        self.cardinal_border_into(&mut result);
        result
    }

    /// Adds the coordinates of [CoordSet::cardinal_border] to `result`.
    pub fn cardinal_border_into(&self, result: &mut CoordSet) {
        self.add_border(&Direction::CARDINAL, result);
    }

    fn add_border(&self, directions: &[Direction], result: &mut CoordSet) {
        let mut dropped = 0usize;
        let mut keys = Vec::new();
        for coord in self.iter() {
            for &dir in directions {
                let n = coord.step(dir);
                if self.contains(n.x, n.y) {
                    continue;
                }
                match Coord::try_encode(n.x, n.y) {
                    Ok(key) => keys.push(key as i32),
                    Err(_) => dropped += 1,
                }
            }
        }

        if dropped > 0 {
            log::warn!("dropped {dropped} border coordinates outside the packable range");
        }
        result.extend_keys(keys);
    }

    fn insert_key(&mut self, key: i32) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(i) => {
                self.keys.insert(i, key);
                true
            }
        }
    }

    /// Merges `keys` in, returning true if the set grew.
    fn extend_keys<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = i32>,
    {
        let before = self.keys.len();
        self.keys.extend(keys);
        if self.keys.len() == before {
            return false;
        }
        self.keys.sort_unstable();
        self.keys.dedup();
        self.keys.len() != before
    }
}

/// Iterator over the coordinates of a [CoordSet].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, i32>,
}

impl Iterator for Iter<'_> {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|&key| Coord::decode(key as u32))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back().map(|&key| Coord::decode(key as u32))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CoordSet {
    type Item = Coord;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Coord> for CoordSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.extend_keys(iter.into_iter().map(|c| c.key() as i32));
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut result = CoordSet::new();
        result.extend(iter);
        result
    }
}

impl TryFrom<Vec<Coord>> for CoordSet {
    type Error = CoordError;

    /// Builds a set from `coords`, failing on the first coordinate outside the packable range.
    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        let keys = coords
            .iter()
            .map(|c| Coord::try_encode(c.x, c.y).map(|key| key as i32))
            .collect::<Result<Vec<_>, CoordError>>()?;
        let mut result = CoordSet::with_capacity(keys.len());
        result.extend_keys(keys);
        Ok(result)
    }
}

impl From<CoordSet> for Vec<Coord> {
    fn from(set: CoordSet) -> Self {
        set.iter().collect()
    }
}
