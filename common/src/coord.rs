use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Scalar usable as a quadtree coordinate.
///
/// Only addition, subtraction, halving and ordering are required. Comparisons
/// are exact; there is no epsilon handling for floating point types.
pub trait Coord:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Default + Debug + 'static
{
    const ZERO: Self;

    fn half(self) -> Self;

    /// Integer types clamp at their limits instead of overflowing.
    fn saturating_add(self, rhs: Self) -> Self;

    fn saturating_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_coord_int {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn half(self) -> Self {
                    self / 2
                }

                #[inline(always)]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }

                #[inline(always)]
                fn saturating_sub(self, rhs: Self) -> Self {
                    <$t>::saturating_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_coord_float {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn half(self) -> Self {
                    self * 0.5
                }

                #[inline(always)]
                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn saturating_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_coord_int!(i32, i64);
impl_coord_float!(f32, f64);
