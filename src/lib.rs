pub mod app;
pub mod callbacks;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod demo;
pub mod input;
pub mod params;
pub mod renderer;
pub mod uniforms;
