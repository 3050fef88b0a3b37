use std::fmt;

use rand::{distributions::Standard, prelude::Distribution, Rng};

use crate::{traits::Number, DVec, One, Zero};

mod ops;

/// A dynamically-sized matrix with [`f32`] elements.
pub type DMatf = DMat<f32>;
/// A dynamically-sized matrix with [`f64`] elements.
pub type DMatd = DMat<f64>;

/// A dynamically-sized, heap-allocated matrix.
///
/// Elements are stored in a single row-major allocation of exactly
/// `rows * cols` elements, released when the value is dropped.
///
/// # Construction
///
/// - [`DMat::zeros`] creates a zero-filled matrix of a given shape.
/// - [`DMat::identity`] creates a square matrix with 1 on its diagonal.
/// - [`DMat::from_fn`] invokes a closure with the row and column of each
///   element.
/// - [`DMat::from_vec`] wraps an existing row-major buffer.
/// - [`DMat::random`] samples each element from an explicitly passed random
///   number generator.
///
/// # Element Access
///
/// [`DMat`] implements [`Index`] and [`IndexMut`] for `(usize, usize)`
/// tuples; the first element is the *row*, the second the *column*, both
/// 0-based. Indexing out of bounds panics; [`DMat::get`] and
/// [`DMat::get_mut`] return [`Option`]s instead.
///
/// # Arithmetic
///
/// `+` and `-` apply elementwise and require equal shapes (panic on
/// mismatch). The `*` operator is the *matrix product* (matrix times matrix
/// or matrix times [`DVec`]); elementwise multiplication and division are
/// provided by [`DMat::component_mul`] and [`DMat::component_div`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DMat<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T> DMat<T> {
    /// Creates a zero-filled matrix with `rows` rows and `cols` columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMatf::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self {
            data: vec![T::ZERO; rows * cols].into_boxed_slice(),
            rows,
            cols,
        }
    }

    /// Creates a square identity matrix of dimension `dim`.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else;
    /// multiplying with it returns the other operand unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let i = DMatf::identity(2);
    /// assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn identity(dim: usize) -> Self
    where
        T: Zero + One + Copy,
    {
        let mut mat = Self::zeros(dim, dim);
        for i in 0..dim {
            mat[(i, i)] = T::ONE;
        }
        mat
    }

    /// Creates a matrix by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_fn(2, 3, |row, col| row * 10 + col);
    /// assert_eq!(m.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: (0..rows * cols).map(|i| cb(i / cols, i % cols)).collect(),
            rows,
            cols,
        }
    }

    /// Creates a matrix from a row-major buffer of `rows * cols` elements.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "matrix buffer length must equal rows * cols"
        );
        Self {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }

    /// Creates a matrix of the given shape by sampling each element from
    /// `rng`.
    ///
    /// For float element types the elements are uniformly distributed in
    /// `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
    {
        Self::from_fn(rows, cols, |_, _| rng.gen())
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the underlying row-major buffer as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if
    /// out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_vec(1, 2, vec![7, 8]);
    /// assert_eq!(m.get(0, 1), Some(&8));
    /// assert_eq!(m.get(1, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns row `row` as a [`DVec`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> DVec<T>
    where
        T: Copy,
    {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        DVec::from(&self.data[start..start + self.cols])
    }

    /// Returns column `col` as a [`DVec`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> DVec<T>
    where
        T: Copy,
    {
        assert!(col < self.cols, "column index out of bounds");
        DVec::from_fn(self.rows, |row| self.data[row * self.cols + col])
    }

    /// Applies a closure to each element, returning a new matrix of the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_vec(2, 2, vec![1, 2, 3, 4]).map(|&e| e * 2);
    /// assert_eq!(m.as_slice(), &[2, 4, 6, 8]);
    /// ```
    pub fn map<F, U>(&self, f: F) -> DMat<U>
    where
        F: FnMut(&T) -> U,
    {
        DMat {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// Transposing twice returns the original matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_vec(2, 3, vec![
    ///     0, 1, 2,
    ///     3, 4, 5,
    /// ]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[0, 3, 1, 4, 2, 5]);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)])
    }

    /// Element-wise multiplication of `self` and `other`.
    ///
    /// Not to be confused with the matrix product, which is provided by the
    /// `*` operator.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = DMat::from_vec(2, 2, vec![1.0f32, 2.0, 3.0, 4.0]);
    /// let b = DMat::from_vec(2, 2, vec![10.0f32, 10.0, 10.0, 10.0]);
    /// assert_eq!(a.component_mul(&b).as_slice(), &[10.0, 20.0, 30.0, 40.0]);
    /// ```
    pub fn component_mul(&self, other: &Self) -> Self
    where
        T: Number,
    {
        self.zip_with(other, "multiplication", |a, b| a * b)
    }

    /// Element-wise division of `self` by `divisor`.
    ///
    /// Output positions whose divisor element is exactly zero are left at
    /// zero instead of producing an infinity or NaN, matching
    /// [`DVec::component_div`]. See there for why this deviates from
    /// IEEE-754.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = DMat::from_vec(1, 3, vec![8.0f32, 5.0, 6.0]);
    /// let b = DMat::from_vec(1, 3, vec![2.0f32, 0.0, 3.0]);
    /// assert_eq!(a.component_div(&b).as_slice(), &[4.0, 0.0, 2.0]);
    /// ```
    pub fn component_div(&self, divisor: &Self) -> Self
    where
        T: Number,
    {
        self.zip_with(divisor, "division", |a, b| {
            if b == T::ZERO {
                T::ZERO
            } else {
                a / b
            }
        })
    }

    /// Returns a matrix with the contents of `self`, but a potentially
    /// different shape.
    ///
    /// Elements inside the overlap of the old and new shape are preserved;
    /// elements outside of it are zero-filled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let m = DMat::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// let grown = m.resize(3, 3);
    /// assert_eq!(grown.as_slice(), &[
    ///     1, 2, 0,
    ///     3, 4, 0,
    ///     0, 0, 0,
    /// ]);
    /// assert_eq!(m.resize(1, 2).as_slice(), &[1, 2]);
    /// ```
    pub fn resize(&self, rows: usize, cols: usize) -> Self
    where
        T: Zero + Copy,
    {
        DMat::from_fn(rows, cols, |row, col| {
            if row < self.rows && col < self.cols {
                self[(row, col)]
            } else {
                T::ZERO
            }
        })
    }

    fn zip_with<F>(&self, other: &Self, op: &'static str, mut f: F) -> Self
    where
        T: Copy,
        F: FnMut(T, T) -> T,
    {
        assert_eq!(
            self.shape(),
            other.shape(),
            "element-wise {op} of matrices with different shapes"
        );
        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: fmt::Display> fmt::Display for DMat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Display>(&'a DMat<T>, usize);
        impl<'a, T: fmt::Display> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..self.0.cols {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for DMat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a DMat<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..self.0.cols {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn zeros_and_identity() {
        let z = DMatf::zeros(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&e| e == 0.0));

        let i = DMatf::identity(3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(i[(row, col)], if row == col { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn indexing() {
        let mut m = DMat::from_fn(2, 3, |row, col| row * 10 + col);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.get(1, 2), Some(&12));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);

        m[(0, 1)] = 99;
        assert_eq!(m.row(0).as_slice(), &[0, 99, 2]);
        assert_eq!(m.column(1).as_slice(), &[99, 11]);
    }

    #[test]
    fn elementwise() {
        let a = DMat::from_vec(2, 2, vec![1.0f32, 2.0, 3.0, 4.0]);
        let b = DMat::from_vec(2, 2, vec![0.5f32, 0.5, 0.5, 0.5]);

        assert_eq!((&a + &b).as_slice(), &[1.5, 2.5, 3.5, 4.5]);
        assert_eq!((&a - &b).as_slice(), &[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(a.component_mul(&b).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        assert_eq!(a.component_div(&b).as_slice(), &[2.0, 4.0, 6.0, 8.0]);

        // Inputs are unaffected.
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn division_skips_zero_divisors() {
        let a = DMat::from_vec(2, 2, vec![8.0f32, 5.0, -6.0, 1.0]);
        let b = DMat::from_vec(2, 2, vec![2.0f32, 0.0, 3.0, 0.0]);
        assert_eq!(a.component_div(&b).as_slice(), &[4.0, 0.0, -2.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "different shapes")]
    fn shape_mismatch() {
        let _ = &DMatf::zeros(2, 3) + &DMatf::zeros(3, 2);
    }

    #[test]
    fn matrix_product() {
        let a = DMat::from_vec(4, 2, vec![
            1, 2, //
            3, 4, //
            5, 6, //
            7, 8,
        ]);
        let b = DMat::from_vec(2, 3, vec![
            9, 10, 11, //
            12, 13, 14,
        ]);
        let c = &a * &b;
        assert_eq!(c.shape(), (4, 3));
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn product_handles_wide_rhs() {
        // The inner accumulation runs over the shared dimension, so a
        // right-hand side with more columns than rows works fine.
        let a = DMat::from_vec(1, 2, vec![1.0f32, 2.0]);
        let b = DMat::from_vec(2, 4, vec![
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0,
        ]);
        let c = &a * &b;
        assert_eq!(c.shape(), (1, 4));
        assert_eq!(c.as_slice(), &[11.0, 14.0, 17.0, 20.0]);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = SmallRng::seed_from_u64(7);
        let m = DMatf::random(4, 4, &mut rng);
        let i = DMatf::identity(4);
        assert_eq!(&i * &m, m);
        assert_eq!(&m * &i, m);
    }

    #[test]
    #[should_panic(expected = "matrix product")]
    fn product_shape_mismatch() {
        let _ = &DMatf::zeros(2, 3) * &DMatf::zeros(2, 3);
    }

    #[test]
    fn matrix_vector_product() {
        let m = DMat::from_vec(2, 2, vec![0, 1, 2, 3]);
        let v = DVec::from(vec![4, 5]);
        let out = &m * &v;
        assert_eq!(out.as_slice(), &[4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn transpose_involutive() {
        let mut rng = SmallRng::seed_from_u64(3);
        let m = DMatf::random(3, 5, &mut rng);
        assert_eq!(m.transpose().shape(), (5, 3));
        assert_eq!(m.transpose().transpose(), m);

        let m = DMat::from_vec(2, 3, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(m.transpose().as_slice(), &[0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn resize() {
        let m = DMat::from_vec(2, 2, vec![1, 2, 3, 4]);

        let larger = m.resize(3, 3);
        assert_eq!(larger.as_slice(), &[1, 2, 0, 3, 4, 0, 0, 0, 0]);

        let smaller = m.resize(1, 2);
        assert_eq!(smaller.as_slice(), &[1, 2]);
    }

    #[test]
    fn approx() {
        let a = DMat::from_vec(1, 2, vec![1.0f32, 2.0]);
        let b = DMat::from_vec(1, 2, vec![1.0f32 + f32::EPSILON, 2.0]);
        assert_approx_eq!(a, b);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let m = DMat::from_vec(2, 3, vec![0.5f64, 1.0, -2.0, 3.0, 4.5, 6.0]);
        let json = serde_json::to_string(&m).unwrap();
        let back: DMatd = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape(), (2, 3));
        assert_eq!(back, m);
    }

    #[test]
    fn fmt() {
        let m = DMat::from_vec(2, 2, vec![0, 1, 2, 3]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{m:?}"), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row on its own line.
        assert_eq!(
            format!("{m:#?}"),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        // `Display` formats rows the same way, but the elements print
        // without `Debug` decoration.
        let m = DMat::from_vec(2, 2, vec![0.5f32, 1.0, -2.0, 3.0]);
        assert_eq!(format!("{m}"), "[[0.5, 1], [-2, 3]]");
    }
}
