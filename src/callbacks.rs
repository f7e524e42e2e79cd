use crate::input::InputState;
use crate::uniforms::UniformSink;

/// Per-frame hooks injected into the render loop. Replaces subclass
/// overrides with an explicit seam: the renderer borrows the callbacks
/// object for one frame and never owns the state behind it.
///
/// Call order within a frame is fixed: `on_input`, then `on_gui`, then
/// `on_uniforms` after the pipeline is bound and before the draw call.
pub trait FrameCallbacks {
    /// Process held-key input against app state (camera movement)
    fn on_input(&mut self, input: &InputState, delta_time: f32);

    /// Declare GUI widgets for this frame
    fn on_gui(&mut self, ctx: &egui::Context);

    /// Push every shader uniform for this frame
    fn on_uniforms(&mut self, sink: &mut dyn UniformSink, resolution: (u32, u32));
}
