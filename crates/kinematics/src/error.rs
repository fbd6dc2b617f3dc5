use planar::Vector2D;
use thiserror::Error;

/// Errors raised when a structural precondition on an [`Element`] value is
/// violated.
///
/// Every variant is local, synchronous, and deterministic. Designed defaults
/// (max-speed resolution, velocity defaulting and clamping) are not errors
/// and never appear here.
///
/// [`Element`]: crate::Element
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ElementError {
    /// The radius is NaN or outside the legal open-ended range.
    #[error("radius {0} is NaN or not in (MIN_RADIUS, f64::MAX]")]
    InvalidRadius(f64),

    /// The mass is not strictly positive.
    #[error("mass {0} is not strictly positive")]
    InvalidMass(f64),

    /// The position has a NaN or infinite component.
    #[error("position {0} has a non-finite component")]
    InvalidPosition(Vector2D),

    /// The time step passed to `advance` is NaN or negative.
    #[error("time step {0} is NaN or negative")]
    InvalidTimeStep(f64),
}
