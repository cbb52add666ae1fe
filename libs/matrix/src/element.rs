//! Matrix element kinds.

use rand::Rng;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A numeric type a [`Matrix`](crate::Matrix) can hold.
///
/// The set is closed: `i32`, `f32` and `f64`. Using any other type as a matrix element is
/// rejected at compile time.
pub trait Element: sealed::Sealed + Copy + Debug + Display + PartialEq + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Draws a value uniformly from `[-1, 1)`.
    ///
    /// For integers this is one of `-1` or `0`.
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Addition, wrapping on integer overflow.
    fn sum(self, rhs: Self) -> Self;

    /// Multiplication, wrapping on integer overflow.
    fn product(self, rhs: Self) -> Self;
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen_range(-1.0..1.0)
                }

                #[inline(always)]
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn product(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen_range(-1..1)
                }

                #[inline(always)]
                fn sum(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn product(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

impl_element_float!(f32, f64);
impl_element_int!(i32);
