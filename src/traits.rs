//! Scalar traits that bound the element types of the vector and matrix
//! types.
//!
//! Each trait captures one capability the C-style per-kind function families
//! would otherwise duplicate: integers get arithmetic and ordering, floats
//! additionally get square roots, exponentials and trigonometry.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:expr, $one:expr; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

/// Types that support a `min` and `max` operation.
///
/// Built-in integer types implement this in terms of [`Ord::min`] and
/// [`Ord::max`]. [`f32`] and [`f64`] implement it in terms of [`f32::min`]
/// and [`f32::max`] ([`f64::min`]/[`f64::max`] respectively), which ignore
/// NaN operands rather than propagating them.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}
float_min_max!(f32, f64);

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support exponential functions.
pub trait Exp {
    /// Computes *e* raised to the power `self`.
    fn exp(self) -> Self;
    /// Raises `self` to the power `exp`.
    fn powf(self, exp: Self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

macro_rules! float_fns {
    ($($types:ty),+) => {
        $(
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    self.exp()
                }

                fn powf(self, exp: Self) -> Self {
                    self.powf(exp)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }
            }
        )+
    };
}
float_fns!(f32, f64);

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike some libraries, this deliberately does not require [`Neg`], so
/// that unsigned element types can use operations like
/// [`dot`][crate::Vector::dot] and [`length2`][crate::Vector::length2].
///
/// [`Neg`]: ops::Neg
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_ignores_nan() {
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
        assert_eq!(MinMax::max(f32::NAN, 1.0), 1.0);
        assert_eq!(MinMax::min(1.0, f32::NAN), 1.0);
        assert_eq!(MinMax::max(1.0, f32::NAN), 1.0);
    }

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(5, 0, 3), 3);
        assert_eq!(MinMax::clamp(-5, 0, 3), 0);
        assert_eq!(MinMax::clamp(2.0f64, 0.0, 3.0), 2.0);
    }

    #[test]
    fn identities() {
        assert_eq!(u32::ZERO + u32::ONE, 1);
        assert_eq!(f64::ONE * 7.5, 7.5);
    }
}
