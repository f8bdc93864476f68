use serde::{Deserialize, Serialize};

use crate::error::{ImgspectError, Result};

pub const DEFAULT_ZOOM_UNIT: f64 = 0.1;

/// Widget options as a host passes them in, e.g. `{"zoom_unit": 0.25}`.
/// Unknown keys are ignored so hosts can share one options object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgspectConfig {
    /// Step added to or removed from the zoom factor per zoom action.
    pub zoom_unit: f64,
}

impl Default for ImgspectConfig {
    fn default() -> Self {
        Self {
            zoom_unit: DEFAULT_ZOOM_UNIT,
        }
    }
}

impl ImgspectConfig {
    /// Parse and validate. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zoom_unit.is_finite() || self.zoom_unit <= 0.0 {
            return Err(ImgspectError::InvalidConfig(format!(
                "zoom_unit must be a positive number, got {}",
                self.zoom_unit
            )));
        }
        Ok(())
    }
}
