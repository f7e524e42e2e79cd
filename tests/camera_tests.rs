use glam::Vec3;
use menger_kifs::camera::{Axis, Camera, PITCH_LIMIT};

const EPS: f32 = 1e-4;

#[test]
fn translate_from_origin_advances_along_initial_forward() {
    // Camera at origin, yaw=0, pitch=0, speed 0.1: one forward step of
    // delta 1.0 must advance exactly 0.1 along the initial forward vector.
    let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0, 0.1, 0.025);
    let fwd = camera.forward();

    camera.translate(Axis::Forward, true, 1.0);

    assert!((camera.position - fwd * 0.1).length() < EPS);
    assert!((camera.position.length() - 0.1).abs() < EPS);
}

#[test]
fn translate_sequence_sums_signed_unit_steps() {
    let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 0.7, 0.2, 0.25, 0.025);
    let start = camera.position;
    let delta = 0.5;
    let step = camera.movement_speed * delta;

    // Orientation never changes, so each step uses the same basis
    let expected = start + camera.forward() * step + camera.forward() * step
        - camera.right() * step
        + camera.up() * step;

    camera.translate(Axis::Forward, true, delta);
    camera.translate(Axis::Forward, true, delta);
    camera.translate(Axis::Right, false, delta);
    camera.translate(Axis::Up, true, delta);

    assert!((camera.position - expected).length() < EPS);
}

#[test]
fn rotation_accumulates_additively() {
    let mut split = Camera::new(Vec3::ZERO, 0.3, 0.1, 0.1, 0.025);
    let mut joined = split.clone();

    split.update_rotation(1.0, 2.0);
    split.update_rotation(3.0, -1.0);
    joined.update_rotation(4.0, 1.0);

    assert!((split.yaw() - joined.yaw()).abs() < EPS);
    assert!((split.pitch() - joined.pitch()).abs() < EPS);
}

#[test]
fn basis_stays_orthonormal_over_yaw_and_pitch_sweep() {
    for yaw_step in 0..36 {
        for pitch_step in -8..=8 {
            let yaw = yaw_step as f32 * std::f32::consts::TAU / 36.0;
            let pitch = pitch_step as f32 * 0.19; // stays inside +/- 89.9 deg
            let camera = Camera::new(Vec3::ZERO, yaw, pitch, 0.1, 0.025);

            let f = camera.forward();
            let r = camera.right();
            let u = camera.up();

            assert!((f.length() - 1.0).abs() < EPS, "yaw {yaw} pitch {pitch}");
            assert!((r.length() - 1.0).abs() < EPS, "yaw {yaw} pitch {pitch}");
            assert!((u.length() - 1.0).abs() < EPS, "yaw {yaw} pitch {pitch}");
            assert!(f.dot(r).abs() < EPS, "yaw {yaw} pitch {pitch}");
            assert!(f.dot(u).abs() < EPS, "yaw {yaw} pitch {pitch}");
            assert!(r.dot(u).abs() < EPS, "yaw {yaw} pitch {pitch}");
        }
    }
}

#[test]
fn pitch_never_leaves_the_clamp_range() {
    let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0, 0.1, 1.0);
    for _ in 0..100 {
        camera.update_rotation(10.0, 0.0);
    }
    assert!(camera.pitch() <= PITCH_LIMIT + EPS);

    for _ in 0..200 {
        camera.update_rotation(-10.0, 0.0);
    }
    assert!(camera.pitch() >= -PITCH_LIMIT - EPS);
}

#[test]
fn yaw_wraps_freely_without_breaking_the_basis() {
    let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0, 0.1, 1.0);
    camera.update_rotation(0.0, 100.0);

    let f = camera.forward();
    assert!(f.is_finite());
    assert!((f.length() - 1.0).abs() < EPS);
}
