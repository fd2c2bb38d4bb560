/// Equality with a tolerance, for the few places where shapes compare positions directly.
///
/// Half-plane tests in this crate are exact, but tests such as "does this point lie on that
/// segment" have no useful exact answer in floating point and use this trait instead.
///
/// # Examples
///
/// ```
/// # use tudey_shapes::core::traits::*;
/// let offset = 0.1 + 0.2;
/// assert_ne!(offset, 0.3);
/// assert!(offset.fuzzy_eq(0.3));
/// assert!((offset - 0.3).fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default tolerance used by [FuzzyEq::fuzzy_eq] and [FuzzyEq::fuzzy_eq_zero].
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if the magnitude of `self` is less than `fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-6);
impl_fuzzy_eq!(f64, 1.0e-8);
