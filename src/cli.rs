// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "menger-kifs")]
#[command(about = "KIFS Menger-sponge raymarching viewer", long_about = None)]
pub struct Cli {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Path to the WGSL raymarching shader
    #[arg(long, default_value = "shaders/kifs.wgsl")]
    pub shader: PathBuf,

    /// Optional JSON file with initial render parameters
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Disable the debug GUI panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
