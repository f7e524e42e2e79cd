use glam::{Vec2, Vec3};

/// Typed, name-addressed uniform setters. The render loop pushes every
/// declared uniform through this seam once per frame, which keeps the set of
/// pushed names observable in tests via a recording implementation.
pub trait UniformSink {
    fn set_f32(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_vec3(&mut self, name: &str, value: Vec3);
}

/// Host-side mirror of the WGSL uniform block in `shaders/kifs.wgsl`.
/// Field order and padding match WGSL uniform layout rules (vec3 aligns to 16).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShaderInput {
    pub resolution: [f32; 2],
    pub time: f32,
    pub ao: f32,
    pub eye: [f32; 3],
    pub march_hit_dist: f32,
    pub forward: [f32; 3],
    _pad0: f32,
    pub up: [f32; 3],
    _pad1: f32,
    pub right: [f32; 3],
    _pad2: f32,
}

/// Stages name-addressed uniform writes into a [`ShaderInput`] block. The
/// renderer uploads the staged block with one `write_buffer` per frame.
/// An unknown name stages nothing; the mismatch is logged rather than left
/// unchecked.
#[derive(Debug, Default)]
pub struct UniformBlock {
    input: ShaderInput,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ShaderInput {
        &self.input
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.input)
    }
}

impl UniformSink for UniformBlock {
    fn set_f32(&mut self, name: &str, value: f32) {
        match name {
            "iTime" => self.input.time = value,
            "GLOBAL_AO" => self.input.ao = value,
            "MARCH_HIT_DIST" => self.input.march_hit_dist = value,
            _ => log::warn!("unknown f32 uniform '{}'", name),
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        match name {
            "iResolution" => self.input.resolution = value.to_array(),
            _ => log::warn!("unknown vec2 uniform '{}'", name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        match name {
            "eye" => self.input.eye = value.to_array(),
            "forward" => self.input.forward = value.to_array(),
            "up" => self.input.up = value.to_array(),
            "right" => self.input.right = value.to_array(),
            _ => log::warn!("unknown vec3 uniform '{}'", name),
        }
    }
}
