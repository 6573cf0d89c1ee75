use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Order in which cursored series are listed in the tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipSort {
    /// Series order as supplied by the host.
    #[default]
    Default,
    Alphabetical,
    Ascending,
    Descending,
    /// Closest to the cursor first, measured in pixels.
    Nearest,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Fraction of the visible range gained or lost per wheel pixel.
    pub scroll_zoom_speed_factor: f64,
    /// How long the "hold Alt to zoom" hint stays up after a plain scroll.
    #[serde(with = "duration_ms")]
    pub zoom_instruction_timeout: Duration,
    /// Lower bound on the per-step zoom scale, keeps large wheel bursts from inverting the range.
    pub min_zoom_scale: f64,
    /// Pixels per line for wheels reporting line deltas.
    pub wheel_line_height: f64,
    pub tooltip_sort: TooltipSort,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_zoom_speed_factor: 0.01,
            zoom_instruction_timeout: Duration::from_millis(3000),
            min_zoom_scale: 0.01,
            wheel_line_height: 20.0,
            tooltip_sort: TooltipSort::Default,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse interaction config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize interaction config")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scroll_zoom_speed_factor.is_finite() && self.scroll_zoom_speed_factor > 0.0) {
            bail!(
                "scroll_zoom_speed_factor must be positive, got {}",
                self.scroll_zoom_speed_factor
            );
        }
        if !(self.min_zoom_scale > 0.0 && self.min_zoom_scale < 1.0) {
            bail!(
                "min_zoom_scale must be in (0, 1), got {}",
                self.min_zoom_scale
            );
        }
        if !(self.wheel_line_height.is_finite() && self.wheel_line_height > 0.0) {
            bail!(
                "wheel_line_height must be positive, got {}",
                self.wheel_line_height
            );
        }
        if self.zoom_instruction_timeout.is_zero() {
            bail!("zoom_instruction_timeout must be non-zero");
        }
        Ok(())
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
