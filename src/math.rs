//! Freestanding scalar helpers.

use crate::Number;

/// Linearly interpolates between `a` and `b`.
///
/// `t` is the interpolation factor: 0 yields `a`, 1 yields `b`. Values
/// outside of `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// # use mvla::*;
/// assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
/// assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
/// ```
pub fn lerp<T: Number>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(lerp(-3.0, 4.0, 0.0), -3.0);
        assert_eq!(lerp(-3.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn midpoint() {
        assert_approx_eq!(lerp(0.0f32, 1.0, 0.25), 0.25);
        assert_approx_eq!(lerp(1.0f64, 3.0, 0.5), 2.0);
    }

    #[test]
    fn extrapolates() {
        assert_eq!(lerp(0.0, 2.0, 2.0), 4.0);
        assert_eq!(lerp(0.0, 2.0, -1.0), -2.0);
    }
}
