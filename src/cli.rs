//! Command-line argument parsing.

use clap::Parser;

use crate::params::{JitterConfig, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavedrift")]
#[command(about = "Flowing noise-wave background animation", long_about = None)]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,

    /// Noise seed; the same seed replays the same wave shapes
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u32,

    /// Frame-rate cap in frames per second
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Disable the sub-pixel amplitude jitter
    #[arg(long)]
    pub no_jitter: bool,

    /// Seed for the amplitude jitter (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub jitter_seed: Option<u64>,

    /// Start with the settings panel hidden
    #[arg(long)]
    pub no_panel: bool,
}

impl Args {
    /// Build the window and frame-pacing configuration
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.window_width = self.width.max(1);
        config.window_height = self.height.max(1);
        config.fps_cap = self.fps.max(1);
        config
    }

    /// Build the jitter configuration
    pub fn jitter_config(&self) -> JitterConfig {
        JitterConfig {
            enabled: !self.no_jitter,
            seed: self.jitter_seed,
        }
    }
}
