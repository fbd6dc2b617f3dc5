use approx::assert_relative_eq;

use crate::vector2d::Vector2D;

#[test]
fn test_new_components() {
    let v = Vector2D::new(1.0, 2.0);

    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
}

#[test]
fn test_zero() {
    let v = Vector2D::zero();

    assert_eq!(v, Vector2D::new(0.0, 0.0));
}

#[test]
fn test_add() {
    let sum = Vector2D::new(50.0, 100.0) + Vector2D::new(10.0, 3.0);

    assert_eq!(sum, Vector2D::new(60.0, 103.0));
}

#[test]
fn test_sub() {
    let difference = Vector2D::new(50.0, 100.0) - Vector2D::new(10.0, 3.0);

    assert_eq!(difference, Vector2D::new(40.0, 97.0));
}

#[test]
fn test_neg() {
    let v = -Vector2D::new(3.0, -4.0);

    assert_eq!(v, Vector2D::new(-3.0, 4.0));
}

#[test]
fn test_scale() {
    let scaled = Vector2D::new(50.0, 100.0) * 2.0;

    assert_eq!(scaled, Vector2D::new(100.0, 200.0));
}

#[test]
fn test_scale_commutative() {
    let v = Vector2D::new(50.0, 100.0);

    assert_eq!(2.0 * v, v * 2.0);
}

#[test]
fn test_scale_propagates_nan() {
    let scaled = Vector2D::new(1.0, 2.0) * f64::NAN;

    assert!(scaled.contains_nan());
}

#[test]
fn test_scale_zero_times_infinite_component() {
    // IEEE-754: 0 * inf is NaN, and the vector simply carries it
    let scaled = Vector2D::new(f64::INFINITY, 0.0) * 0.0;

    assert!(scaled.contains_nan());
}

#[test]
fn test_dot() {
    let product = Vector2D::new(50.0, 100.0).dot(Vector2D::new(10.0, 3.0));

    assert_eq!(product, 800.0);
}

#[test]
fn test_norm() {
    let norm = Vector2D::new(10.0, 3.0).norm();

    assert_relative_eq!(norm, 109.0_f64.sqrt());
}

#[test]
fn test_norm_zero_vector() {
    assert_eq!(Vector2D::zero().norm(), 0.0);
}

#[test]
fn test_norm_nan_component() {
    assert!(Vector2D::new(f64::NAN, 3.0).norm().is_nan());
}

#[test]
fn test_direction_matches_norm_division() {
    let v = Vector2D::new(50.0, 100.0);

    let direction = v.direction();
    let normalized = v * (1.0 / v.norm());

    assert_relative_eq!(direction, normalized);
}

#[test]
fn test_direction_is_unit_length() {
    let vectors = [
        Vector2D::new(3.0, 4.0),
        Vector2D::new(-20.0, 0.0),
        Vector2D::new(1e-8, -1e-8),
        Vector2D::new(300_000.0, 300_000.0),
    ];

    for v in vectors {
        assert_relative_eq!(v.direction().norm(), 1.0);
    }
}

#[test]
fn test_direction_of_zero_vector() {
    // atan2(0, 0) == 0, so the zero vector has a defined direction
    assert_eq!(Vector2D::zero().direction(), Vector2D::new(1.0, 0.0));
}

#[test]
fn test_direction_negative_x_axis() {
    let direction = Vector2D::new(-20.0, 0.0).direction();

    assert_relative_eq!(direction, Vector2D::new(-1.0, 0.0));
}

#[test]
fn test_contains_nan() {
    assert!(Vector2D::new(f64::NAN, 10.0).contains_nan());
    assert!(Vector2D::new(10.0, f64::NAN).contains_nan());
    assert!(!Vector2D::new(10.0, 3.0).contains_nan());
}

#[test]
fn test_is_finite() {
    assert!(Vector2D::new(10.0, 3.0).is_finite());
    assert!(!Vector2D::new(f64::INFINITY, 3.0).is_finite());
    assert!(!Vector2D::new(10.0, f64::NEG_INFINITY).is_finite());
    assert!(!Vector2D::new(f64::NAN, 3.0).is_finite());
}

#[test]
fn test_approx_eq_true_case() {
    let v = Vector2D::new(50.0, 100.0);

    assert!(v.approx_eq(v));
    assert!(v.approx_eq(Vector2D::new(50.0 + 1e-15, 100.0 + 1e-13)));
}

#[test]
fn test_approx_eq_false_case() {
    let v = Vector2D::new(50.0, 100.0);

    assert!(!v.approx_eq(Vector2D::new(10.0, 3.0)));
    assert!(!v.approx_eq(Vector2D::new(50.0, 100.1)));
}

#[test]
fn test_approx_eq_nan_never_equal() {
    let v = Vector2D::new(f64::NAN, 0.0);

    assert!(!v.approx_eq(v));
}

#[test]
fn test_display() {
    assert_eq!(Vector2D::new(50.0, 100.0).to_string(), "(50,100)");
    assert_eq!(Vector2D::new(0.5, -1.25).to_string(), "(0.5,-1.25)");
}
