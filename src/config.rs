//! Engine defaults, loadable from TOML.
//!
//! ```toml
//! reversed_probability = 0.35
//! default_spread = 10
//! assets_dir = "assets/cards"
//! image_ext = "webp"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tarot_engine::{
    draw::check_reversed_probability,
    error::{DrawError, DrawResult},
    models::{DrawRequest, DEFAULT_REVERSED_PROBABILITY},
    spreads::get_spread,
};

/// Image formats the presentation layer knows how to show.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "webp"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Reversed probability for requests that do not set one.
    pub reversed_probability: f64,
    /// Spread size for requests that do not set one.
    pub default_spread: usize,
    /// Directory holding `{slug}.{image_ext}` card images.
    pub assets_dir: PathBuf,
    pub image_ext: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reversed_probability: DEFAULT_REVERSED_PROBABILITY,
            default_spread: 3,
            assets_dir: PathBuf::from("assets/cards"),
            image_ext: "png".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_reversed_probability(mut self, p: f64) -> Self {
        self.reversed_probability = p;
        self
    }

    pub fn with_default_spread(mut self, size: usize) -> Self {
        self.default_spread = size;
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> DrawResult<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| DrawError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> DrawResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DrawError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> DrawResult<()> {
        check_reversed_probability(self.reversed_probability)?;
        get_spread(self.default_spread)?;
        if !IMAGE_EXTENSIONS.contains(&self.image_ext.as_str()) {
            return Err(DrawError::Config {
                message: format!(
                    "image_ext `{}` is not one of {}",
                    self.image_ext,
                    IMAGE_EXTENSIONS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// A request carrying this config's defaults.
    pub fn request(&self) -> DrawRequest {
        DrawRequest::new(self.default_spread).with_reversed_probability(self.reversed_probability)
    }

    /// Image path for a card under this config's asset directory.
    pub fn image_path(&self, slug: &str) -> PathBuf {
        crate::interpretation::card_image_path(&self.assets_dir, slug, &self.image_ext)
    }
}
