use glam::Vec3;

use crate::input::{InputState, Key};

pub const DEFAULT_MOVEMENT_SPEED: f32 = 0.1;
pub const DEFAULT_ROTATION_SPEED: f32 = 0.025;

/// Pitch stops just short of the poles so the derived basis never degenerates.
pub const PITCH_LIMIT: f32 = 89.9 * std::f32::consts::PI / 180.0;

/// Local camera axis for translation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Forward,
    Right,
    Up,
}

/// First-person fly camera. Position and orientation are mutated in place
/// each frame; basis vectors are derived on demand from yaw/pitch.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub rotation_speed: f32,
}

impl Camera {
    pub fn new(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        movement_speed: f32,
        rotation_speed: f32,
    ) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed,
            rotation_speed,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Move along one local axis by `movement_speed * delta_time`, signed.
    pub fn translate(&mut self, axis: Axis, positive: bool, delta_time: f32) {
        let dir = match axis {
            Axis::Forward => self.forward(),
            Axis::Right => self.right(),
            Axis::Up => self.up(),
        };
        let sign = if positive { 1.0 } else { -1.0 };
        self.position += dir * sign * self.movement_speed * delta_time;
    }

    /// Accumulate rotation deltas scaled by `rotation_speed`. Additive while
    /// pitch stays inside the clamp range.
    pub fn update_rotation(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.yaw += delta_yaw * self.rotation_speed;
        self.pitch =
            (self.pitch + delta_pitch * self.rotation_speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            0.0,
            0.0,
            DEFAULT_MOVEMENT_SPEED,
            DEFAULT_ROTATION_SPEED,
        )
    }
}

/// The one input-to-camera policy: held keys translate/rotate every frame.
/// No debouncing, no acceleration curve, no diagonal normalization.
pub fn walk_input(camera: &mut Camera, input: &InputState, delta_time: f32) {
    if input.is_down(Key::W) {
        camera.translate(Axis::Forward, true, delta_time);
    }
    if input.is_down(Key::S) {
        camera.translate(Axis::Forward, false, delta_time);
    }
    if input.is_down(Key::D) {
        camera.translate(Axis::Right, true, delta_time);
    }
    if input.is_down(Key::A) {
        camera.translate(Axis::Right, false, delta_time);
    }
    if input.is_down(Key::E) {
        camera.translate(Axis::Up, true, delta_time);
    }
    if input.is_down(Key::Q) {
        camera.translate(Axis::Up, false, delta_time);
    }
    if input.is_down(Key::ArrowUp) {
        camera.update_rotation(1.0, 0.0);
    }
    if input.is_down(Key::ArrowDown) {
        camera.update_rotation(-1.0, 0.0);
    }
    if input.is_down(Key::ArrowLeft) {
        camera.update_rotation(0.0, 1.0);
    }
    if input.is_down(Key::ArrowRight) {
        camera.update_rotation(0.0, -1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_camera_looks_along_positive_z() {
        let camera = Camera::default();
        let fwd = camera.forward();
        assert!((fwd - Vec3::Z).length() < EPS, "forward was {:?}", fwd);
    }

    #[test]
    fn translate_forward_advances_by_speed_times_delta() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0, 0.1, 0.025);
        let fwd = camera.forward();

        camera.translate(Axis::Forward, true, 1.0);

        assert!((camera.position - fwd * 0.1).length() < EPS);
    }

    #[test]
    fn translate_negative_mirrors_positive() {
        let mut a = Camera::new(Vec3::ZERO, 1.2, 0.3, 0.5, 0.025);
        let mut b = a.clone();

        a.translate(Axis::Right, true, 0.25);
        b.translate(Axis::Right, false, 0.25);

        assert!((a.position + b.position).length() < EPS);
    }

    #[test]
    fn pitch_clamps_at_poles() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0, 0.1, 1.0);
        camera.update_rotation(100.0, 0.0);
        assert!(camera.pitch() <= PITCH_LIMIT);

        camera.update_rotation(-200.0, 0.0);
        assert!(camera.pitch() >= -PITCH_LIMIT);

        // Basis stays finite and orthogonal even at the clamp
        let f = camera.forward();
        let r = camera.right();
        assert!(f.is_finite() && r.is_finite());
        assert!(f.dot(r).abs() < 1e-3);
    }

    #[test]
    fn walk_input_with_nothing_held_is_a_no_op() {
        let mut camera = Camera::default();
        let start = camera.position;
        let input = InputState::new();

        walk_input(&mut camera, &input, 1.0);

        assert_eq!(camera.position, start);
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 0.0);
    }
}
