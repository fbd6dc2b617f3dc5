pub mod collisions;
pub mod element;
pub mod error;


pub use collisions::{collision_position, next_contact, time_to_collision, Contact};
pub use element::{Element, MIN_RADIUS, SPEED_LIMIT};
pub use error::ElementError;
