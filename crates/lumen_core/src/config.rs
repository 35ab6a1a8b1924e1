//! Render settings.

use std::path::Path;

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Immutable render settings.
///
/// Loaded once before rendering and passed by reference through the whole
/// call chain; nothing in the render core mutates it, so sharing it across
/// row tasks needs no synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sky gradient color for rays pointing straight up.
    pub sky_color_top: Vec3,
    /// Sky gradient color for rays pointing straight down.
    pub sky_color_bottom: Vec3,
    /// Bounce depth past which paths stop gathering light.
    pub max_bounces: u32,
    /// Scatter rays averaged per bounce.
    pub rays_per_bounce: u32,
    /// Jittered primary samples per pixel.
    pub antialias_samples: u32,
    /// Shadow samples per light per shading point.
    pub light_rays: u32,
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Fixed seed for reproducible frames; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sky_color_top: Vec3::new(0.157, 0.412, 0.820),
            sky_color_bottom: Vec3::new(1.0, 0.937, 0.541),
            max_bounces: 4,
            rays_per_bounce: 2,
            antialias_samples: 4,
            light_rays: 4,
            width: 800,
            height: 450,
            seed: None,
        }
    }
}

impl Config {
    /// Load settings from a JSON file. Omitted fields take their defaults;
    /// unknown fields are rejected.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> LoadResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Image aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    fn validate(&self) -> LoadResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoadError::InvalidConfig(
                "image dimensions must be non-zero".to_string(),
            ));
        }
        if self.rays_per_bounce == 0 || self.antialias_samples == 0 || self.light_rays == 0 {
            return Err(LoadError::InvalidConfig(
                "sample counts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
