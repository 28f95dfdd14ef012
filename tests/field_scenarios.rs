//! End-to-end scenarios through the public API, without a window.

use driftfield::{Field, Mode, Vec2};

#[test]
fn test_fresh_field_80_particles_one_step() {
    // initialize(800, 600, 80), one step with no pointer: velocities keep
    // their direction and positions advance by exactly one velocity.
    let mut field = Field::new(800.0, 600.0, 80, Mode::RisingSmoke, 4242);
    assert_eq!(field.len(), 80);

    let before: Vec<_> = field.particles().to_vec();
    field.step(None);

    assert_eq!(field.len(), 80);
    for (old, new) in before.iter().zip(field.particles()) {
        assert_eq!(new.velocity, old.velocity);
        let mut expected = old.position + old.velocity;
        if expected.x < 0.0 {
            expected.x = 800.0;
        } else if expected.x > 800.0 {
            expected.x = 0.0;
        }
        assert_eq!(new.position, expected);
    }
}

#[test]
fn test_long_run_keeps_all_invariants() {
    let mut field = Field::new(1280.0, 720.0, 100, Mode::RisingSmoke, 7);
    let pointer = Some(Vec2::new(640.0, 360.0));
    for frame in 0..10_000 {
        field.step(if frame % 2 == 0 { pointer } else { None });
    }
    assert_eq!(field.len(), 100);
    for p in field.particles() {
        assert!((0.0..=1.0).contains(&p.opacity));
        assert!(p.position.x >= 0.0 && p.position.x <= 1280.0);
        assert!(p.radius > 0.0);
    }
}

#[test]
fn test_pointer_carves_a_hole_in_the_haze() {
    // Holding the pointer still should keep drifting particles pushed out
    // of its immediate neighborhood.
    let mut field = Field::new(800.0, 600.0, 100, Mode::DriftingHaze, 11);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..600 {
        field.step(Some(pointer));
    }
    let crowded = field
        .particles()
        .iter()
        .filter(|p| (p.position - pointer).length() < 30.0)
        .count();
    assert!(crowded <= 2, "{} particles still next to the pointer", crowded);
}

#[test]
fn test_resize_then_step_wraps_against_new_bounds() {
    let mut field = Field::new(800.0, 600.0, 50, Mode::DriftingHaze, 3);
    field.set_bounds(400.0, 300.0);
    for _ in 0..2000 {
        field.step(None);
    }
    // Old positions beyond the new right/bottom edge wrap to the opposite
    // side as soon as they move.
    for p in field.particles() {
        assert!(p.position.x <= 400.0 + 0.5);
        assert!(p.position.y <= 300.0 + 0.5);
    }
}
