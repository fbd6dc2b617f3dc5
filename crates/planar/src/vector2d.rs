use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::fuzzy::{fuzzy_equals, EPSILON};

/// An immutable 2D geometric vector using f64 precision.
///
/// `Vector2D` is a plain value: it accepts any pair of floats, including NaN
/// and infinities, and never rejects its own inputs. Validity (finiteness,
/// NaN-freeness) is the responsibility of the consumer, which can probe it
/// through [`contains_nan`](Vector2D::contains_nan) and
/// [`is_finite`](Vector2D::is_finite).
///
/// # Examples
///
/// ```
/// use planar::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// let w = Vector2D::new(1.0, -2.0);
///
/// assert_eq!(v + w, Vector2D::new(4.0, 2.0));
/// assert_eq!(v - w, Vector2D::new(2.0, 6.0));
/// assert_eq!(v * 2.0, Vector2D::new(6.0, 8.0));
/// assert_eq!(v.dot(w), -5.0);
/// assert_eq!(v.norm(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Creates a new vector from its x and y components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the zero vector.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns the dot product of this vector and `other`.
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2-norm `sqrt(x² + y²)`.
    ///
    /// Always non-negative; NaN if a component is NaN.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the unit vector with the same angle as this vector.
    ///
    /// The direction is normalized through the angle (`atan2` followed by
    /// cosine/sine) rather than by dividing by the norm, so it is defined for
    /// every vector: the zero vector has angle `atan2(0, 0) == 0` and thus
    /// direction `(1, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use planar::Vector2D;
    ///
    /// let d = Vector2D::new(3.0, 4.0).direction();
    /// assert_relative_eq!(d, Vector2D::new(0.6, 0.8));
    ///
    /// assert_eq!(Vector2D::zero().direction(), Vector2D::new(1.0, 0.0));
    /// ```
    pub fn direction(self) -> Vector2D {
        let angle = self.y.atan2(self.x);
        Vector2D::new(angle.cos(), angle.sin())
    }

    /// Checks whether either component is NaN.
    pub fn contains_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Checks whether both components are finite (neither NaN nor infinite).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks whether this vector and `other` are equal within
    /// [`EPSILON`](crate::EPSILON), applied independently to each component.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::Vector2D;
    ///
    /// let v = Vector2D::new(50.0, 100.0);
    /// assert!(v.approx_eq(Vector2D::new(50.0 + 1e-15, 100.0 + 1e-13)));
    /// assert!(!v.approx_eq(Vector2D::new(50.0, 100.1)));
    /// ```
    pub fn approx_eq(self, other: Vector2D) -> bool {
        fuzzy_equals(self.x, other.x) && fuzzy_equals(self.y, other.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

/// Scales the vector by a factor. The factor may be negative, zero, NaN, or
/// infinite; the result simply propagates IEEE-754 semantics.
impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }
}

/// Allow f64 * Vector2D (commutative scaling)
impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

/// Renders the vector as `"(x,y)"` using each component's default `f64`
/// formatting.
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}
