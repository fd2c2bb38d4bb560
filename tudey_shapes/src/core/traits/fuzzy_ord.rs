use super::FuzzyEq;

/// Ordering comparisons that treat values within epsilon as equal (so both `fuzzy_lt` and
/// `fuzzy_gt` hold for nearly equal values).
pub trait FuzzyOrd: FuzzyEq {
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy greater than.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy less than.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` lies in `[min, max]`, inclusive by `fuzzy_epsilon` at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tudey_shapes::core::traits::*;
    /// // parametric values just outside a segment still count as on it
    /// assert!((-1e-9f64).fuzzy_in_range_eps(0.0, 1.0, 1e-8));
    /// assert!(1.0f64.fuzzy_in_range_eps(0.0, 1.0, 1e-8));
    /// assert!(!1.1f64.fuzzy_in_range_eps(0.0, 1.0, 1e-8));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
