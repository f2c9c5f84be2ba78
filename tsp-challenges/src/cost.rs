use std::{
    fmt::{Debug, Display},
    ops::Add,
};

/// Numeric domain a cost matrix can be expressed in.
pub trait Cost:
    Copy + PartialOrd + Add<Output = Self> + Debug + Display + Send + Sync + 'static
{
    const ZERO: Self;
    /// Larger than any tour cost; infinity for floating point domains.
    const MAX: Self;

    /// Non-negative, and finite for floating point domains.
    fn is_valid(&self) -> bool;

    /// `None` if the sum leaves the domain, or is no longer finite.
    fn checked_add(self, other: Self) -> Option<Self>;

    fn to_f64(self) -> f64;
}

macro_rules! impl_unsigned_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                fn is_valid(&self) -> bool {
                    true
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_signed_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                fn is_valid(&self) -> bool {
                    *self >= 0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;
                const MAX: Self = <$t>::INFINITY;

                fn is_valid(&self) -> bool {
                    self.is_finite() && *self >= 0.0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other).filter(|sum| sum.is_finite())
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_unsigned_cost!(u32, u64);
impl_signed_cost!(i32, i64);
impl_float_cost!(f32, f64);
