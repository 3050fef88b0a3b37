use std::{array, fmt};

use rand::{distributions::Standard, prelude::Distribution, Rng};

use crate::{
    traits::{Number, Sqrt},
    Exp, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;

/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;

/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::random`] fills a vector from an explicitly passed random
///   number generator.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`,
///   `Vector::Y`, `Vector::Z` and `Vector::W` are the axis unit vectors.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w` (up to the
///   vector's dimension).
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   (plus `mut` variants and the [`AsRef`]/[`AsMut`] impls) expose the
///   underlying storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this.
///
/// # Arithmetic
///
/// All binary operators take their operands by value and return a new
/// vector; no operation mutates its inputs. `+`, `-`, `*` and `/` between
/// two vectors apply elementwise; `*` and `/` with a scalar scale every
/// element. Integer division by a vector with a zero element panics, float
/// division follows IEEE-754 and produces infinities or NaN.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(Vec2i::splat(5), vec2(5, 5));
    /// assert_eq!(vec2(3, 4) + Vector::splat(5), vec2(8, 9));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = Vector::from_fn(|i| i as i32 * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector by sampling each element from `rng`.
    ///
    /// For float element types the elements are uniformly distributed in
    /// `[0, 1)`. The generator is passed explicitly; this crate holds no
    /// global random state.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let mut rng = rand::thread_rng();
    /// let v = Vec3f::random(&mut rng);
    /// assert!(v.as_slice().iter().all(|e| (0.0..1.0).contains(e)));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
    {
        Self::from_fn(|_| rng.gen())
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    ///
    /// This is the pairing primitive the elementwise arithmetic is built on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = vec2(1, 2);
    /// let b = vec2("one", "two");
    /// assert_eq!(a.zip(b), vec2((1, "one"), (2, "two")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this
    /// method is often shorter and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This is cheaper to compute than [`length`][Self::length] and is
    /// available for every element kind, including integers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// assert_eq!(vec2(3u32, 4).length2(), 25);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec3(3.0, 4.0, 12.0).length(), 13.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, Vec3f::Z);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// Uses [`MinMax::min`], so NaN elements are ignored in favor of the
    /// other operand where possible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(3, 4).max(vec2(5, 1)), vec2(5, 4));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and
    /// `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// let v = vec3(-7, 3, 12).clamp(Vector::splat(0), Vector::splat(10));
    /// assert_eq!(v, vec3(0, 3, 10));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Computes the square root of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(4.0, 9.0).sqrt(), vec2(2.0, 3.0));
    /// ```
    pub fn sqrt(self) -> Self
    where
        T: Sqrt,
    {
        self.map(T::sqrt)
    }

    /// Computes *e* raised to each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(Vec2f::ZERO.exp(), vec2(1.0, 1.0));
    /// ```
    pub fn exp(self) -> Self
    where
        T: Exp,
    {
        self.map(T::exp)
    }

    /// Raises each element to the power `exp`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(2.0, 3.0).powf(2.0), vec2(4.0, 9.0));
    /// ```
    pub fn powf(self, exp: T) -> Self
    where
        T: Exp + Copy,
    {
        self.map(|elem| elem.powf(exp))
    }

    /// Raises each element to the power of the matching element of `exp`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(2.0, 2.0).pow(vec2(3.0, 4.0)), vec2(8.0, 16.0));
    /// ```
    pub fn pow(self, exp: Self) -> Self
    where
        T: Exp,
    {
        self.zip(exp).map(|(elem, exp)| elem.powf(exp))
    }

    /// Computes the sine of each element (interpreted as radians).
    pub fn sin(self) -> Self
    where
        T: Trig,
    {
        self.map(T::sin)
    }

    /// Computes the cosine of each element (interpreted as radians).
    pub fn cos(self) -> Self
    where
        T: Trig,
    {
        self.map(T::cos)
    }

    /// Computes the tangent of each element (interpreted as radians).
    pub fn tan(self) -> Self
    where
        T: Trig,
    {
        self.map(T::tan)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Swapping the arguments inverts the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mvla::*;
    /// assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

// Serialized as a plain sequence of `N` elements, the same shape a derive
// would produce for the inner array. `Deserialize` needs a manual visitor
// because serde provides no array impl for an arbitrary `N`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tup = serializer.serialize_tuple(N)?;
        for elem in &self.0 {
            tup.serialize_element(elem)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use std::marker::PhantomData;

        struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T: serde::Deserialize<'de>, const N: usize> serde::de::Visitor<'de>
            for ArrayVisitor<T, N>
        {
            type Value = Vector<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} elements")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut elems = Vec::with_capacity(N);
                for i in 0..N {
                    match seq.next_element()? {
                        Some(elem) => elems.push(elem),
                        None => return Err(serde::de::Error::invalid_length(i, &self)),
                    }
                }
                match <[T; N]>::try_from(elems) {
                    Ok(array) => Ok(Vector(array)),
                    Err(_) => unreachable!(),
                }
            }
        }

        deserializer.deserialize_tuple(N, ArrayVisitor(PhantomData))
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);

        v.y = 777;
        assert_eq!(v, vec3(1, 777, 3));
        assert_eq!(v[1], 777);

        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W.x, 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = vec2(3, 4);
        let b = Vector::splat(5);
        assert_eq!(a + b, vec2(8, 9));
        assert_eq!(a - b, vec2(-2, -1));
        assert_eq!(a * b, vec2(15, 20));
        assert_eq!(a / vec2(1, 2), vec2(3, 2));

        // Inputs are unaffected by any of the above.
        assert_eq!(a, vec2(3, 4));

        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn add_sub_inverse_float() {
        let a = vec4(0.25f32, -3.5, 16.75, 0.125);
        let b = vec4(1.5f32, 2.25, -8.0, 0.5);
        assert_approx_eq!((a + b) - b, a);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn int_division_by_zero() {
        let _ = vec2(1, 2) / vec2(1, 0);
    }

    #[test]
    fn float_division_is_ieee() {
        let v = vec2(1.0f32, -1.0) / vec2(0.0, 0.0);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
    }

    #[test]
    fn length() {
        assert_eq!(vec3(3.0f32, 4.0, 12.0).length(), 13.0);
        assert_eq!(vec2(3.0f64, 4.0).length(), 5.0);

        let v = vec4(0.3f32, -1.7, 2.2, 0.9);
        assert_approx_eq!(v.length() * v.length(), v.length2()).abs(1e-5);
    }

    #[test]
    fn min_max_nan() {
        let a = vec3(-1.0, 2.0, f32::NAN);
        let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), b.min(a));
        assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
        assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    }

    #[test]
    fn float_maps() {
        assert_eq!(vec2(16.0, 25.0).sqrt(), vec2(4.0, 5.0));
        assert_eq!(vec2(2.0, 10.0).powf(3.0), vec2(8.0, 1000.0));
        assert_approx_eq!(vec2(1.0f64, 0.0).exp(), vec2(std::f64::consts::E, 1.0));
        assert_approx_eq!(Vec2f::ZERO.sin(), Vec2f::ZERO);
        assert_approx_eq!(Vec2f::ZERO.cos(), vec2(1.0, 1.0));
        assert_approx_eq!(Vec2f::ZERO.tan(), Vec2f::ZERO);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec2(3u32, 4).dot(vec2(1, 2)), 11);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(3, 4)), "(3, 4)");
    }

    #[test]
    fn random_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(0xfeed);
        for _ in 0..100 {
            let v = Vec4d::random(&mut rng);
            assert!(v.as_slice().iter().all(|e| (0.0..1.0).contains(e)));
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let v = vec3(1.5f32, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");
        assert_eq!(serde_json::from_str::<Vec3f>(&json).unwrap(), v);

        // The sequence length has to match the dimension exactly.
        assert!(serde_json::from_str::<Vec3f>("[1.0,2.0]").is_err());
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }
}
