use log::debug;
use planar::{fuzzy_less_than_or_equal_to, Vector2D};

use crate::error::ElementError;

/// Speed of light in km/s, the hard cap on any element's maximum speed.
pub const SPEED_LIMIT: f64 = 300_000.0;

/// Exclusive lower bound on an element's radius, in km.
pub const MIN_RADIUS: f64 = 0.0;

/// A circular physical body moving at constant velocity between time steps.
///
/// An element carries a position and velocity (both [`Vector2D`], in km and
/// km/s), a radius and mass fixed at construction, and a per-instance maximum
/// speed capped at [`SPEED_LIMIT`]. The speed cap is enforced on every
/// velocity write by clamping the magnitude while preserving the heading.
///
/// Elements have identity: the pairwise queries ([`separation`],
/// [`overlaps`], and the prediction functions in [`collisions`]) treat two
/// references to the same object as the same body, regardless of field
/// values.
///
/// # Examples
///
/// ```
/// use planar::Vector2D;
/// use kinematics::Element;
///
/// let mut probe = Element::with_speed_of_light(
///     Vector2D::new(100.0, 0.0),
///     10.0,
///     Vector2D::new(-10.0, 0.0),
///     1.0,
/// )
/// .unwrap();
///
/// probe.advance(1.0).unwrap();
/// assert_eq!(probe.position(), Vector2D::new(90.0, 0.0));
/// ```
///
/// [`separation`]: Element::separation
/// [`overlaps`]: Element::overlaps
/// [`collisions`]: crate::collisions
#[derive(Debug, Clone)]
pub struct Element {
    position: Vector2D,
    velocity: Vector2D,
    radius: f64,
    max_speed: f64,
    mass: f64,
}

/// Checks whether `radius` is a number in `(min_radius, f64::MAX]`.
pub fn is_valid_radius(radius: f64, min_radius: f64) -> bool {
    !radius.is_nan() && min_radius < radius && radius <= f64::MAX
}

/// Checks whether `mass` is strictly positive.
pub fn is_valid_mass(mass: f64) -> bool {
    mass > 0.0
}

/// Checks whether `position` is a storable position (finite, non-NaN
/// components).
pub fn is_valid_position(position: Vector2D) -> bool {
    position.is_finite()
}

/// Checks whether `delta_t` is a non-NaN, non-negative time step.
pub fn is_valid_time_step(delta_t: f64) -> bool {
    !delta_t.is_nan() && delta_t >= 0.0
}

fn resolve_max_speed(max_speed: f64) -> f64 {
    if max_speed.is_nan() || max_speed <= 0.0 || max_speed > SPEED_LIMIT {
        debug!("max speed {max_speed} out of (0, {SPEED_LIMIT}], using {SPEED_LIMIT}");
        SPEED_LIMIT
    } else {
        max_speed
    }
}

impl Element {
    /// Creates a new element with the given position, radius, velocity,
    /// maximum speed, and mass.
    ///
    /// A max speed that is NaN, non-positive, or above [`SPEED_LIMIT`]
    /// silently resolves to [`SPEED_LIMIT`]. A velocity with a NaN component
    /// silently resolves to the zero vector, and a velocity faster than the
    /// resolved max speed is clamped to that speed with its heading
    /// preserved; construction never fails because of velocity.
    ///
    /// # Errors
    ///
    /// * [`ElementError::InvalidRadius`] if `radius` is NaN or not in
    ///   `(MIN_RADIUS, f64::MAX]`
    /// * [`ElementError::InvalidMass`] if `mass` is not strictly positive
    /// * [`ElementError::InvalidPosition`] if `position` has a NaN or
    ///   infinite component
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::Vector2D;
    /// use kinematics::{Element, SPEED_LIMIT};
    ///
    /// let element = Element::new(
    ///     Vector2D::new(50.0, 100.0),
    ///     15.0,
    ///     Vector2D::new(2_000.0, 10_000.0),
    ///     f64::NAN, // resolves to the speed limit
    ///     1.0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(element.max_speed(), SPEED_LIMIT);
    /// assert_eq!(element.velocity(), Vector2D::new(2_000.0, 10_000.0));
    ///
    /// assert!(Element::new(Vector2D::zero(), f64::NAN, Vector2D::zero(), 100.0, 1.0).is_err());
    /// ```
    pub fn new(
        position: Vector2D,
        radius: f64,
        velocity: Vector2D,
        max_speed: f64,
        mass: f64,
    ) -> Result<Self, ElementError> {
        if !is_valid_radius(radius, MIN_RADIUS) {
            return Err(ElementError::InvalidRadius(radius));
        }
        if !is_valid_mass(mass) {
            return Err(ElementError::InvalidMass(mass));
        }

        let mut element = Self {
            position: Vector2D::zero(),
            velocity: Vector2D::zero(),
            radius,
            max_speed: resolve_max_speed(max_speed),
            mass,
        };
        element.set_position(position)?;
        element.set_velocity(velocity);
        Ok(element)
    }

    /// Creates a new element whose maximum speed is [`SPEED_LIMIT`].
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn with_speed_of_light(
        position: Vector2D,
        radius: f64,
        velocity: Vector2D,
        mass: f64,
    ) -> Result<Self, ElementError> {
        Self::new(position, radius, velocity, SPEED_LIMIT, mass)
    }

    /// Returns the position of this element, in km.
    pub fn position(&self) -> Vector2D {
        self.position
    }

    /// Returns the velocity of this element, in km/s.
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Returns the radius of this element, in km.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the maximum speed of this element, in km/s.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Returns the mass of this element, in kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Stores `position` verbatim after validating it; positions are never
    /// clamped.
    pub(crate) fn set_position(&mut self, position: Vector2D) -> Result<(), ElementError> {
        if !is_valid_position(position) {
            return Err(ElementError::InvalidPosition(position));
        }
        self.position = position;
        Ok(())
    }

    /// Stores `velocity`, defaulting a NaN-bearing candidate to the zero
    /// vector and clamping any candidate faster than the max speed to the
    /// max speed along the same heading. Never fails.
    ///
    /// The speed check is fuzzy: a candidate over the limit by no more than
    /// `EPSILON` (relative) is stored unchanged, which avoids renormalizing
    /// velocities that only exceed the limit through rounding error.
    pub(crate) fn set_velocity(&mut self, velocity: Vector2D) {
        if velocity.contains_nan() {
            debug!("velocity {velocity} contains NaN, storing zero velocity");
            self.velocity = Vector2D::zero();
        } else if fuzzy_less_than_or_equal_to(velocity.norm(), self.max_speed) {
            self.velocity = velocity;
        } else {
            debug!("clamping velocity {velocity} to max speed {}", self.max_speed);
            self.velocity = velocity.direction() * self.max_speed;
        }
    }

    /// Advances this element `delta_t` seconds along its current velocity.
    ///
    /// An infinite `delta_t` is not rejected up front; it produces a
    /// non-finite candidate position, which the position write then rejects.
    /// On any error the element is left unchanged.
    ///
    /// # Errors
    ///
    /// * [`ElementError::InvalidTimeStep`] if `delta_t` is NaN or negative
    /// * [`ElementError::InvalidPosition`] if the new position would have a
    ///   NaN or infinite component
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::Vector2D;
    /// use kinematics::Element;
    ///
    /// let mut element = Element::with_speed_of_light(
    ///     Vector2D::new(100.0, 0.0),
    ///     10.0,
    ///     Vector2D::new(-10.0, 0.0),
    ///     1.0,
    /// )
    /// .unwrap();
    ///
    /// element.advance(1.0).unwrap();
    /// assert_eq!(element.position(), Vector2D::new(90.0, 0.0));
    ///
    /// assert!(element.advance(-1.0).is_err());
    /// assert!(element.advance(f64::NAN).is_err());
    /// ```
    pub fn advance(&mut self, delta_t: f64) -> Result<(), ElementError> {
        if !is_valid_time_step(delta_t) {
            return Err(ElementError::InvalidTimeStep(delta_t));
        }
        self.set_position(self.position + self.velocity * delta_t)
    }

    /// Returns the signed gap between this element and `other`: the distance
    /// between centers minus the sum of radii.
    ///
    /// Negative means the disks overlap, zero means exactly touching,
    /// positive is the separation distance. The gap between an element and
    /// itself is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::Vector2D;
    /// use kinematics::Element;
    ///
    /// let a = Element::with_speed_of_light(
    ///     Vector2D::new(100.0, 0.0),
    ///     10.0,
    ///     Vector2D::zero(),
    ///     1.0,
    /// )
    /// .unwrap();
    /// let b = Element::with_speed_of_light(Vector2D::zero(), 10.0, Vector2D::zero(), 1.0).unwrap();
    ///
    /// assert_eq!(a.separation(&b), 80.0);
    /// assert_eq!(a.separation(&a), 0.0);
    /// ```
    pub fn separation(&self, other: &Element) -> f64 {
        if std::ptr::eq(self, other) {
            return 0.0;
        }
        (self.position - other.position).norm() - (self.radius + other.radius)
    }

    /// Checks whether this element and `other` overlap.
    ///
    /// An element always overlaps itself; two distinct elements overlap when
    /// their signed gap is negative.
    pub fn overlaps(&self, other: &Element) -> bool {
        std::ptr::eq(self, other) || self.separation(other) < 0.0
    }
}

impl Default for Element {
    /// An element at the origin with the minimum legal radius, zero
    /// velocity, the speed of light as max speed, and unit mass.
    fn default() -> Self {
        Self {
            position: Vector2D::zero(),
            velocity: Vector2D::zero(),
            radius: f64::MIN_POSITIVE,
            max_speed: SPEED_LIMIT,
            mass: 1.0,
        }
    }
}
