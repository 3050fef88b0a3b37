//! Implementations of `std::ops`.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::{approx::ApproxEq, traits::Number, DVec};

use super::DMat;

impl<T> Index<(usize, usize)> for DMat<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DMat<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T> ApproxEq for DMat<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.data.abs_diff_eq(&other.data, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.data.rel_diff_eq(&other.data, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.shape() == other.shape() && self.data.ulps_diff_eq(&other.data, ulps_tolerance)
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the shapes differ.
impl<T> Add for &DMat<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = DMat<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, "addition", |a, b| a + b)
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the shapes differ.
impl<T> Sub for &DMat<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = DMat<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, "subtraction", |a, b| a - b)
    }
}

/// Matrix * Matrix (the matrix product).
///
/// The inner accumulation runs over the shared dimension, so the result of
/// multiplying an `m×n` matrix with an `n×p` matrix is `m×p`.
///
/// # Panics
///
/// Panics unless `self.cols() == rhs.rows()`.
impl<T> Mul for &DMat<T>
where
    T: Number,
{
    type Output = DMat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.cols(),
            rhs.rows(),
            "matrix product requires lhs columns to equal rhs rows"
        );
        DMat::from_fn(self.rows(), rhs.cols(), |i, j| {
            (0..self.cols()).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)])
        })
    }
}

/// Matrix * Column Vector.
///
/// # Panics
///
/// Panics unless `self.cols() == rhs.len()`.
impl<T> Mul<&DVec<T>> for &DMat<T>
where
    T: Number,
{
    type Output = DVec<T>;

    fn mul(self, rhs: &DVec<T>) -> Self::Output {
        assert_eq!(
            self.cols(),
            rhs.len(),
            "matrix product requires lhs columns to equal rhs length"
        );
        DVec::from_fn(self.rows(), |row| {
            (0..self.cols()).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col])
        })
    }
}

/// Matrix * Scalar.
impl<T> Mul<T> for &DMat<T>
where
    T: Number,
{
    type Output = DMat<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|&elem| elem * rhs)
    }
}

impl<T> Add for DMat<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = DMat<T>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T> Sub for DMat<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = DMat<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T> Mul for DMat<T>
where
    T: Number,
{
    type Output = DMat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T> Mul<DVec<T>> for DMat<T>
where
    T: Number,
{
    type Output = DVec<T>;

    fn mul(self, rhs: DVec<T>) -> Self::Output {
        &self * &rhs
    }
}

impl<T> Mul<T> for DMat<T>
where
    T: Number,
{
    type Output = DMat<T>;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
