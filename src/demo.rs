use glam::Vec2;

use crate::callbacks::FrameCallbacks;
use crate::camera::{self, Camera};
use crate::input::InputState;
use crate::params::{RenderParams, AO_RANGE, HIT_DIST_RANGE, TIME_RANGE};
use crate::uniforms::UniformSink;

/// The Menger-sponge viewer state: a fly camera plus the tunable shader
/// parameters. Implements the per-frame hooks consumed by the render loop.
pub struct MengerDemo {
    pub camera: Camera,
    pub params: RenderParams,
    show_ui: bool,
}

impl MengerDemo {
    pub fn new(camera: Camera, params: RenderParams, show_ui: bool) -> Self {
        Self {
            camera,
            params,
            show_ui,
        }
    }
}

impl FrameCallbacks for MengerDemo {
    fn on_input(&mut self, input: &InputState, delta_time: f32) {
        camera::walk_input(&mut self.camera, input, delta_time);
        if self.params.animate_time {
            self.params.time = (self.params.time + delta_time) % *TIME_RANGE.end();
        }
    }

    fn on_gui(&mut self, ctx: &egui::Context) {
        if !self.show_ui {
            return;
        }
        egui::Window::new("Shader").show(ctx, |ui| {
            ui.add(egui::Slider::new(&mut self.params.time, TIME_RANGE).text("iTime"));
            ui.checkbox(&mut self.params.animate_time, "animate");
            ui.add(egui::Slider::new(&mut self.params.ao, AO_RANGE).text("AO"));
            ui.add(
                egui::Slider::new(&mut self.params.march_hit_dist, HIT_DIST_RANGE)
                    .logarithmic(true)
                    .text("MARCH_HIT_DIST"),
            );
            ui.label(format!(
                "pitch: {:.2}, yaw: {:.2}",
                self.camera.pitch().to_degrees(),
                self.camera.yaw().to_degrees()
            ));
        });
    }

    fn on_uniforms(&mut self, sink: &mut dyn UniformSink, resolution: (u32, u32)) {
        sink.set_vec2(
            "iResolution",
            Vec2::new(resolution.0 as f32, resolution.1 as f32),
        );
        // Camera basis
        sink.set_vec3("eye", self.camera.position);
        sink.set_vec3("forward", self.camera.forward());
        sink.set_vec3("up", self.camera.up());
        sink.set_vec3("right", self.camera.right());
        // Shader params
        sink.set_f32("GLOBAL_AO", self.params.ao);
        sink.set_f32("MARCH_HIT_DIST", self.params.march_hit_dist);
        sink.set_f32("iTime", self.params.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use glam::Vec3;

    fn demo() -> MengerDemo {
        MengerDemo::new(Camera::default(), RenderParams::default(), true)
    }

    #[test]
    fn input_moves_the_camera() {
        let mut demo = demo();
        let mut input = InputState::new();
        input.press(Key::W);

        demo.on_input(&input, 1.0);

        let expected = Camera::default().forward() * demo.camera.movement_speed;
        assert!((demo.camera.position - expected).length() < 1e-5);
    }

    #[test]
    fn animate_advances_time_by_delta() {
        let mut demo = demo();
        demo.params.animate_time = true;
        let input = InputState::new();

        demo.on_input(&input, 0.5);
        demo.on_input(&input, 0.25);

        assert!((demo.params.time - 0.75).abs() < 1e-6);
    }

    #[test]
    fn time_is_frozen_without_animate() {
        let mut demo = demo();
        demo.params.time = 3.0;
        let input = InputState::new();

        demo.on_input(&input, 1.0);

        assert_eq!(demo.params.time, 3.0);
    }

    #[test]
    fn uniforms_fill_the_block() {
        let mut demo = demo();
        let mut block = crate::uniforms::UniformBlock::new();

        demo.on_uniforms(&mut block, (400, 300));

        let input = block.input();
        assert_eq!(input.resolution, [400.0, 300.0]);
        assert_eq!(input.ao, 0.8);
        assert_eq!(input.march_hit_dist, 0.01);
        assert_eq!(Vec3::from_array(input.eye), demo.camera.position);
    }
}
