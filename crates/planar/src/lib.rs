pub mod fuzzy;
pub mod vector2d;

#[cfg(test)]
mod vector2d_test;

pub use fuzzy::{fuzzy_equals, fuzzy_less_than_or_equal_to, EPSILON};
pub use vector2d::Vector2D;
