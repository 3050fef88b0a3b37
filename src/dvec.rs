use std::fmt;

use rand::{distributions::Standard, prelude::Distribution, Rng};

use crate::{traits::Number, Zero};

mod ops;

/// A dynamically-sized vector with [`f32`] elements.
pub type DVecf = DVec<f32>;
/// A dynamically-sized vector with [`f64`] elements.
pub type DVecd = DVec<f64>;

/// A dynamically-sized, heap-allocated vector.
///
/// Unlike [`Vector`][crate::Vector], whose dimension is a compile-time
/// constant, a [`DVec`]'s length is chosen at runtime. The storage is a
/// single owned allocation whose size always equals the length exactly;
/// there is no spare capacity, and the buffer is released when the value is
/// dropped.
///
/// # Construction
///
/// - [`DVec::zeros`] creates a zero-filled vector of a given length.
/// - [`DVec::from_fn`] invokes a closure with the index of each element.
/// - [`DVec::random`] samples each element from an explicitly passed random
///   number generator.
/// - The [`From`] impls convert from a [`Vec`], boxed slice, or borrowed
///   slice.
///
/// # Arithmetic
///
/// The `+`, `-` and `*` operators apply elementwise and require operands of
/// equal length; mismatched lengths are a programming error and panic.
/// Division is provided by [`DVec::component_div`], which deliberately does
/// *not* follow IEEE-754 — see its documentation.
#[derive(Clone, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DVec<T> {
    data: Box<[T]>,
}

impl<T> DVec<T> {
    /// Creates a zero-filled vector holding `len` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = DVecf::zeros(3);
    /// assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self {
            data: vec![T::ZERO; len].into_boxed_slice(),
        }
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = DVec::from_fn(4, |i| i as f32 * 0.5);
    /// assert_eq!(v.as_slice(), &[0.0, 0.5, 1.0, 1.5]);
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            data: (0..len).map(cb).collect(),
        }
    }

    /// Creates a vector of length `len` by sampling each element from `rng`.
    ///
    /// For float element types the elements are uniformly distributed in
    /// `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
    {
        Self::from_fn(len, |_| rng.gen())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = DVec::from(vec![1.0f32, 4.0, 9.0]).map(|e| e.sqrt());
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn map<F, U>(&self, f: F) -> DVec<U>
    where
        F: FnMut(&T) -> U,
    {
        DVec {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = DVec::from(vec![1.0f32, 3.0, -5.0]);
    /// let b = DVec::from(vec![4.0f32, -2.0, -1.0]);
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    pub fn dot(&self, other: &Self) -> T
    where
        T: Number,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "dot product of vectors with different lengths"
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Element-wise division of `self` by `divisor`.
    ///
    /// Output positions whose divisor element is exactly zero are left at
    /// zero instead of producing an infinity or NaN. This mirrors the
    /// behavior MVLA has always had for dynamically-sized data and is the
    /// documented, deliberate asymmetry with [`Vector`][crate::Vector]
    /// division, which follows IEEE-754.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = DVec::from(vec![8.0f32, 5.0, 6.0]);
    /// let b = DVec::from(vec![2.0f32, 0.0, 3.0]);
    /// assert_eq!(a.component_div(&b).as_slice(), &[4.0, 0.0, 2.0]);
    /// ```
    pub fn component_div(&self, divisor: &Self) -> Self
    where
        T: Number,
    {
        assert_eq!(
            self.len(),
            divisor.len(),
            "element-wise division of vectors with different lengths"
        );
        Self::from_fn(self.len(), |i| {
            if divisor.data[i] == T::ZERO {
                T::ZERO
            } else {
                self.data[i] / divisor.data[i]
            }
        })
    }

    /// Returns a vector of length `new_len` with the contents of `self`.
    ///
    /// Elements up to the smaller of the old and new length are preserved;
    /// any newly added tail is zero-filled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = DVec::from(vec![1.0f32, 2.0]).resize(4);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 0.0, 0.0]);
    /// assert_eq!(v.resize(1).as_slice(), &[1.0]);
    /// ```
    pub fn resize(&self, new_len: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(new_len, |i| if i < self.len() { self.data[i] } else { T::ZERO })
    }
}

impl<T> From<Vec<T>> for DVec<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            data: value.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for DVec<T> {
    fn from(value: Box<[T]>) -> Self {
        Self { data: value }
    }
}

impl<T: Clone> From<&[T]> for DVec<T> {
    fn from(value: &[T]) -> Self {
        Self { data: value.into() }
    }
}

impl<T> From<DVec<T>> for Vec<T> {
    fn from(value: DVec<T>) -> Self {
        value.data.into_vec()
    }
}

impl<T> FromIterator<T> for DVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in self.data.iter() {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn zeros() {
        let v = DVecf::zeros(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&e| e == 0.0));
        assert!(DVecf::zeros(0).is_empty());
    }

    #[test]
    fn arithmetic() {
        let a = DVec::from(vec![1.0f32, 2.0, 3.0]);
        let b = DVec::from(vec![10.0f32, 20.0, 30.0]);

        assert_eq!((&a + &b).as_slice(), &[11.0, 22.0, 33.0]);
        assert_eq!((&b - &a).as_slice(), &[9.0, 18.0, 27.0]);
        assert_eq!((&a * &b).as_slice(), &[10.0, 40.0, 90.0]);

        // `a` and `b` stay usable; operands are borrowed.
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);

        assert_approx_eq!((&(&a + &b) - &b), a);
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn length_mismatch() {
        let _ = &DVecf::zeros(2) + &DVecf::zeros(3);
    }

    #[test]
    fn division_skips_zero_divisors() {
        let a = DVec::from(vec![8.0f32, 5.0, -6.0]);
        let b = DVec::from(vec![2.0f32, 0.0, 3.0]);
        let q = a.component_div(&b);
        assert_eq!(q.as_slice(), &[4.0, 0.0, -2.0]);
    }

    #[test]
    fn dot() {
        let a = DVec::from(vec![1.0f64, 3.0, -5.0]);
        let b = DVec::from(vec![4.0f64, -2.0, -1.0]);
        assert_eq!(a.dot(&b), 3.0);
        assert_eq!(DVecf::zeros(0).dot(&DVecf::zeros(0)), 0.0);
    }

    #[test]
    fn map() {
        let v = DVec::from(vec![1, 2, 3]).map(|&e| e * 2);
        assert_eq!(v.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn resize() {
        let v = DVec::from(vec![1.0f32, 2.0, 3.0]);

        let grown = v.resize(5);
        assert_eq!(grown.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0]);

        let shrunk = v.resize(2);
        assert_eq!(shrunk.as_slice(), &[1.0, 2.0]);

        assert!(v.resize(0).is_empty());
    }

    #[test]
    fn random() {
        let mut rng = SmallRng::seed_from_u64(42);
        let v = DVecf::random(64, &mut rng);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|e| (0.0..1.0).contains(e)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let v = DVec::from(vec![1.0f32, -2.5, 0.0]);
        let json = serde_json::to_string(&v).unwrap();
        let back: DVecf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn fmt() {
        let v = DVec::from(vec![1.5f32, -2.0]);
        assert_eq!(format!("{v}"), "(1.5, -2)");
        assert_eq!(format!("{v:?}"), "[1.5, -2.0]");
    }
}
