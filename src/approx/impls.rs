use super::ApproxEq;

macro_rules! float_approx {
    ($float:ty, $bits:ty) => {
        impl ApproxEq for $float {
            type Tolerance = $float;

            fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
                if !self.is_finite() || !other.is_finite() {
                    // Subtracting infinities yields NaN, so compare exactly.
                    return self == other;
                }
                (self - other).abs() <= abs_tolerance
            }

            fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
                if !self.is_finite() || !other.is_finite() {
                    return self == other;
                }
                let max = self.abs().max(other.abs());
                (self - other).abs() <= max * rel_tolerance
            }

            fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                if self.is_sign_positive() != other.is_sign_positive() {
                    // `-0.0` and `+0.0` compare equal, any other sign
                    // difference will not.
                    return self == other;
                }

                let a = self.to_bits() as $bits;
                let b = other.to_bits() as $bits;
                (a - b).unsigned_abs() <= ulps_tolerance.into()
            }
        }
    };
}

float_approx!(f32, i32);
float_approx!(f64, i64);

impl<'a, T: ApproxEq<U>, U> ApproxEq<&'a U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &&'a U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &&'a U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &&'a U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        <[T] as ApproxEq<[U]>>::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        <[T] as ApproxEq<[U]>>::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        <[T] as ApproxEq<[U]>>::ulps_diff_eq(self, other, ulps_tolerance)
    }
}
