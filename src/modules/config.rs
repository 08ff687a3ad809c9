/*
Tuning knobs for the per-pixel scans.

Can be built in code or read from a TOML table, e.g.

    skip_pixels = 2   # test every second pixel in each direction
    parallel = false  # never use Rayon, even on native builds

Missing keys fall back to the defaults (exact scan, parallel when available).
*/

use serde::Deserialize;

use super::error::{CollisionError, Result};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CollisionConfig {
    /// Sampling stride of the pixel scans. 1 tests every pixel.
    pub skip_pixels: usize,
    /// Scan rows in parallel with Rayon (native builds with the `native` feature only).
    pub parallel: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            skip_pixels: 1,
            parallel: true,
        }
    }
}

impl CollisionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CollisionConfig = toml::from_str(source)?;
        config.validate()?;
        log::debug!("Loaded collision config: {config:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.skip_pixels == 0 {
            return Err(CollisionError::InvalidConfig(
                "skip_pixels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this build and this config allow Rayon scans.
    pub(crate) fn use_rayon(&self) -> bool {
        cfg!(all(feature = "native", not(target_arch = "wasm32"))) && self.parallel
    }
}
