use planar::Vector2D;

use crate::element::Element;

/// A predicted first contact between two elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Seconds from now until the boundaries first touch
    pub time: f64,
    /// Contact point at that instant, in km
    pub point: Vector2D,
}

/// Returns the time until the boundaries of `a` and `b` first touch, in
/// seconds, assuming both keep their current velocity.
///
/// Returns `+∞` when the elements never touch: when `a` and `b` are the same
/// object (a body cannot collide with itself), when the centers are not
/// closing, or when the closest approach only grazes the contact distance
/// tangentially. Otherwise the result is the smaller root of the quadratic
/// contact equation, the earliest instant at which the gap between centers
/// closes to the sum of radii.
///
/// Symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use planar::Vector2D;
/// use kinematics::{time_to_collision, Element};
///
/// let a = Element::with_speed_of_light(
///     Vector2D::new(100.0, 0.0),
///     10.0,
///     Vector2D::new(-10.0, 0.0),
///     1.0,
/// )
/// .unwrap();
/// let b = Element::with_speed_of_light(Vector2D::zero(), 10.0, Vector2D::zero(), 1.0).unwrap();
///
/// assert_relative_eq!(time_to_collision(&a, &b), 8.0);
/// assert_eq!(time_to_collision(&a, &a), f64::INFINITY);
/// ```
pub fn time_to_collision(a: &Element, b: &Element) -> f64 {
    if std::ptr::eq(a, b) {
        return f64::INFINITY;
    }

    let dr = a.position() - b.position();
    let dv = a.velocity() - b.velocity();
    let drdr = dr.dot(dr);
    let dvdv = dv.dot(dv);
    let dvdr = dr.dot(dv);
    let contact_distance = a.radius() + b.radius();
    let discriminant = dvdr * dvdr - dvdv * (drdr - contact_distance * contact_distance);

    // dvdr >= 0: the centers are separating or not closing.
    // discriminant <= 0: no real root, or a tangential graze that never
    // crosses the contact distance.
    if dvdr >= 0.0 || discriminant <= 0.0 {
        return f64::INFINITY;
    }
    // Identical velocities imply dvdr == 0 and are caught above; this guard
    // keeps the degenerate input from dividing by zero regardless.
    if dvdv == 0.0 {
        return f64::INFINITY;
    }

    -(dvdr + discriminant.sqrt()) / dvdv
}

/// Predicts the first contact between `a` and `b`, or `None` if they never
/// touch on their current trajectories.
///
/// The contact point is evaluated algebraically from the hypothetical
/// centers `position + velocity * t`; neither element is mutated. It lies on
/// `a`'s boundary at distance `a.radius()` from `a`'s hypothetical center
/// toward `b`'s, which at the contact instant is also the nearest point on
/// `b`'s boundary.
///
/// # Examples
///
/// ```
/// use planar::Vector2D;
/// use kinematics::{next_contact, Element};
///
/// let a = Element::with_speed_of_light(
///     Vector2D::new(100.0, 0.0),
///     10.0,
///     Vector2D::new(-10.0, 0.0),
///     1.0,
/// )
/// .unwrap();
/// let b = Element::with_speed_of_light(Vector2D::zero(), 10.0, Vector2D::zero(), 1.0).unwrap();
///
/// let contact = next_contact(&a, &b).unwrap();
/// assert_eq!(contact.time, 8.0);
/// assert!(contact.point.approx_eq(Vector2D::new(10.0, 0.0)));
/// ```
pub fn next_contact(a: &Element, b: &Element) -> Option<Contact> {
    let time = time_to_collision(a, b);
    if time.is_infinite() {
        return None;
    }

    let future_a = a.position() + a.velocity() * time;
    let future_b = b.position() + b.velocity() * time;
    let point = future_a + (future_b - future_a).direction() * a.radius();

    Some(Contact { time, point })
}

/// Returns the point where the boundaries of `a` and `b` will first touch,
/// or `None` if [`time_to_collision`] is `+∞`.
///
/// The two results are correlated: this returns `None` exactly when
/// [`time_to_collision`] reports no future collision.
pub fn collision_position(a: &Element, b: &Element) -> Option<Vector2D> {
    next_contact(a, b).map(|contact| contact.point)
}
