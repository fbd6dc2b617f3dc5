use approx::relative_eq;

/// The single tolerance used for every approximate floating-point comparison
/// in the workspace, both in library code (velocity clamping) and in tests.
pub const EPSILON: f64 = 1e-10;

/// Checks whether two floats are equal up to [`EPSILON`].
///
/// `EPSILON` is applied both as an absolute floor (for values near zero) and
/// as a relative bound. `NaN` is never fuzzy-equal to anything, including
/// itself; equal infinities compare equal.
///
/// # Examples
///
/// ```
/// use planar::fuzzy_equals;
///
/// assert!(fuzzy_equals(100.0, 100.0 + 1e-12));
/// assert!(!fuzzy_equals(100.0, 100.1));
/// assert!(!fuzzy_equals(f64::NAN, f64::NAN));
/// ```
pub fn fuzzy_equals(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = EPSILON, max_relative = EPSILON)
}

/// Checks whether `a <= b`, treating values within [`EPSILON`] of each other
/// as equal.
///
/// # Examples
///
/// ```
/// use planar::fuzzy_less_than_or_equal_to;
///
/// assert!(fuzzy_less_than_or_equal_to(1.0, 2.0));
/// assert!(fuzzy_less_than_or_equal_to(2.0 + 1e-12, 2.0));
/// assert!(!fuzzy_less_than_or_equal_to(2.1, 2.0));
/// ```
pub fn fuzzy_less_than_or_equal_to(a: f64, b: f64) -> bool {
    a <= b || fuzzy_equals(a, b)
}
