//! Continuous collision prediction example
//!
//! Builds two elements on a collision course, predicts the contact instant
//! and point in closed form, then advances both elements to that instant and
//! shows the boundaries touching.
//!
//! Run with: cargo run --package kinematics --example collision_demo

use kinematics::{next_contact, time_to_collision, Element};
use planar::Vector2D;

fn main() {
    println!("Continuous Collision Prediction Demo\n");
    println!("{}", "=".repeat(60));

    let mut probe = Element::with_speed_of_light(
        Vector2D::new(100.0, 0.0),
        10.0,
        Vector2D::new(-10.0, 0.0),
        1.0,
    )
    .unwrap();
    let mut target =
        Element::with_speed_of_light(Vector2D::zero(), 10.0, Vector2D::zero(), 1.0).unwrap();

    println!("\nInitial state:");
    println!(
        "  Probe:  position={}, velocity={} km/s, radius={} km",
        probe.position(),
        probe.velocity(),
        probe.radius()
    );
    println!(
        "  Target: position={}, velocity={} km/s, radius={} km",
        target.position(),
        target.velocity(),
        target.radius()
    );
    println!("  Gap: {} km", probe.separation(&target));

    let contact = next_contact(&probe, &target).expect("the pair is on a collision course");

    println!("\nPrediction:");
    println!("  First contact in {} s at {}", contact.time, contact.point);

    // Advance world time to the predicted instant
    probe.advance(contact.time).unwrap();
    target.advance(contact.time).unwrap();

    println!("\nAfter advancing both elements by {} s:", contact.time);
    println!("  Probe:  position={}", probe.position());
    println!("  Target: position={}", target.position());
    println!("  Gap: {} km (boundaries touching)", probe.separation(&target));
    println!("  Overlapping: {}", probe.overlaps(&target));

    // A stationary bystander never meets the target
    let bystander =
        Element::with_speed_of_light(Vector2D::new(0.0, 500.0), 10.0, Vector2D::zero(), 1.0)
            .unwrap();

    println!("\nBystander at {}:", bystander.position());
    println!(
        "  time_to_collision with target: {}",
        time_to_collision(&bystander, &target)
    );
    println!(
        "  next_contact with target: {:?}",
        next_contact(&bystander, &target)
    );

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
}
