use clap::Parser;
use glam::Vec3;
use winit::event_loop::EventLoop;

use menger_kifs::app::App;
use menger_kifs::camera::{Camera, DEFAULT_MOVEMENT_SPEED, DEFAULT_ROTATION_SPEED};
use menger_kifs::cli::Cli;
use menger_kifs::demo::MengerDemo;
use menger_kifs::params::RenderParams;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let params = match &cli.settings {
        Some(path) => RenderParams::from_file(path)?,
        None => RenderParams::default(),
    };

    let camera = Camera::new(
        Vec3::ZERO,
        0.0,
        0.0,
        DEFAULT_MOVEMENT_SPEED,
        DEFAULT_ROTATION_SPEED,
    );
    let demo = MengerDemo::new(camera, params, !cli.no_ui);

    log::info!("controls: W/A/S/D/Q/E move, arrows look, ESC quits");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, demo);
    event_loop.run_app(&mut app)?;

    if app.init_failed() {
        anyhow::bail!("initialization failed");
    }
    Ok(())
}
