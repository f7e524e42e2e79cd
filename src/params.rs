use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const AO_RANGE: std::ops::RangeInclusive<f32> = 0.0..=5.0;
pub const HIT_DIST_RANGE: std::ops::RangeInclusive<f32> = 0.00001..=0.1;
pub const TIME_RANGE: std::ops::RangeInclusive<f32> = 0.0..=20.0;

/// Tunable shader parameters mirrored by the GUI sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Ambient-occlusion strength (`GLOBAL_AO`)
    pub ao: f32,
    /// Ray-march hit-distance epsilon (`MARCH_HIT_DIST`)
    pub march_hit_dist: f32,
    /// Elapsed shader time (`iTime`), slider-bound
    pub time: f32,
    /// Advance `time` by delta each frame instead of leaving it to the slider
    pub animate_time: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            ao: 0.8,
            march_hit_dist: 0.01,
            time: 0.0,
            animate_time: false,
        }
    }
}

impl RenderParams {
    /// Load parameters from a JSON settings file. A malformed file is a
    /// startup error; absent keys fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let params: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(params)
    }
}
