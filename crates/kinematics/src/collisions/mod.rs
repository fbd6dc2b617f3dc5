//! Continuous collision prediction for constant-velocity elements
//!
//! Unlike step-sampled detection, these functions solve the contact
//! condition in closed form: the instant at which the distance between two
//! centers equals the sum of the radii, assuming both elements keep their
//! current velocity.

pub mod prediction;


pub use prediction::{collision_position, next_contact, time_to_collision, Contact};
