//! Implementations of `std::ops`.
//!
//! Unlike [`Vector`][crate::Vector], a [`DVec`] is not `Copy`, so the
//! arithmetic operators are implemented on references (with owned-value
//! forwarding impls for convenience).

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::approx::ApproxEq;

use super::DVec;

impl<T> Index<usize> for DVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T> ApproxEq for DVec<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len() && self.data.abs_diff_eq(&other.data, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len() && self.data.rel_diff_eq(&other.data, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.len() == other.len() && self.data.ulps_diff_eq(&other.data, ulps_tolerance)
    }
}

fn zip_with<T, F>(lhs: &DVec<T>, rhs: &DVec<T>, op: &'static str, mut f: F) -> DVec<T>
where
    F: FnMut(&T, &T) -> T,
{
    assert_eq!(
        lhs.len(),
        rhs.len(),
        "element-wise {op} of vectors with different lengths"
    );
    lhs.data.iter().zip(rhs.data.iter()).map(|(a, b)| f(a, b)).collect()
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the lengths differ.
impl<T> Add for &DVec<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn add(self, rhs: Self) -> Self::Output {
        zip_with(self, rhs, "addition", |&a, &b| a + b)
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the lengths differ.
impl<T> Sub for &DVec<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        zip_with(self, rhs, "subtraction", |&a, &b| a - b)
    }
}

/// Element-wise multiplication.
///
/// # Panics
///
/// Panics if the lengths differ.
impl<T> Mul for &DVec<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        zip_with(self, rhs, "multiplication", |&a, &b| a * b)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T> Mul<T> for &DVec<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.data.iter().map(|&elem| elem * rhs).collect()
    }
}

impl<T> Add for DVec<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T> Sub for DVec<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T> Mul for DVec<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T> Mul<T> for DVec<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = DVec<T>;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
