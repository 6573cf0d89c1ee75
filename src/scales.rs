//! Scales mapping between a data domain and a pixel range.
//!
//! The domain and the pixel range are passed on every call and a d3 scale is
//! configured inline for it; the view extent is owned upstream and changes
//! between events.

use d3rs::scale::Scale as D3Scale;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Smallest magnitude a logarithmic scale accepts; anything below is clamped.
pub const MIN_LOG_VALUE: f64 = 1e-300;

/// Forward/reverse coordinate transform for one axis.
///
/// `forward` maps a data value into `range` (pixels), `reverse` maps a pixel
/// back into `domain`. Implementations must be exact inverses of each other
/// for any in-range value, up to floating point error.
pub trait Scale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), value: f64) -> f64;

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), pixel: f64) -> f64;
}

pub type SharedScale = Arc<dyn Scale + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    #[default]
    Linear,
    Log10,
}

/// Widens a zero-width domain by half a unit on each side.
///
/// Zero-width means the bounds are equal to within one ulp of their
/// magnitude, so a genuinely narrow extent (e.g. `1e-17..2e-17`) is kept.
fn guard_domain(domain: (f64, f64)) -> (f64, f64) {
    let (d_min, d_max) = domain;
    let magnitude = d_min.abs().max(d_max.abs());
    if (d_max - d_min).abs() <= f64::EPSILON * magnitude {
        (d_min - 0.5, d_max + 0.5)
    } else {
        (d_min, d_max)
    }
}

fn is_flat_range(range: (f64, f64)) -> bool {
    range.0 == range.1
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearScale;

impl Scale for LinearScale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
        let (d_min, d_max) = guard_domain(domain);
        d3rs::scale::LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1)
            .scale(value)
    }

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), pixel: f64) -> f64 {
        if is_flat_range(range) {
            return domain.0;
        }
        let (d_min, d_max) = guard_domain(domain);
        d3rs::scale::LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1)
            .invert(pixel)
            .unwrap_or(domain.0)
    }
}

/// Base-10 logarithmic scale. Non-positive values are clamped to [`MIN_LOG_VALUE`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogScale;

impl LogScale {
    fn clamp(value: f64) -> f64 {
        value.max(MIN_LOG_VALUE)
    }

    /// Positive domain with distinct bounds; a flat one is widened by a decade.
    fn log_domain(domain: (f64, f64)) -> (f64, f64) {
        let (d_min, d_max) = (Self::clamp(domain.0), Self::clamp(domain.1));
        if (d_max - d_min).abs() <= f64::EPSILON * d_min.max(d_max) {
            (d_min / 10.0_f64.sqrt(), d_max * 10.0_f64.sqrt())
        } else {
            (d_min, d_max)
        }
    }
}

impl Scale for LogScale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
        let (d_min, d_max) = Self::log_domain(domain);
        d3rs::scale::LogScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1)
            .scale(Self::clamp(value))
    }

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), pixel: f64) -> f64 {
        if is_flat_range(range) {
            return Self::clamp(domain.0);
        }
        let (d_min, d_max) = Self::log_domain(domain);
        d3rs::scale::LogScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1)
            .invert(pixel)
            .map(Self::clamp)
            .unwrap_or(d_min)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartScale {
    Linear(LinearScale),
    Log(LogScale),
}

impl Default for ChartScale {
    fn default() -> Self {
        Self::Linear(LinearScale)
    }
}

impl ChartScale {
    pub fn new(scale_type: ScaleType) -> Self {
        match scale_type {
            ScaleType::Linear => Self::Linear(LinearScale),
            ScaleType::Log10 => Self::Log(LogScale),
        }
    }

    pub fn linear() -> Self {
        Self::Linear(LinearScale)
    }

    pub fn log() -> Self {
        Self::Log(LogScale)
    }

    pub fn scale_type(&self) -> ScaleType {
        match self {
            Self::Linear(_) => ScaleType::Linear,
            Self::Log(_) => ScaleType::Log10,
        }
    }

    pub fn shared(self) -> SharedScale {
        Arc::new(self)
    }
}

impl Scale for ChartScale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
        match self {
            Self::Linear(s) => s.forward(domain, range, value),
            Self::Log(s) => s.forward(domain, range, value),
        }
    }

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), pixel: f64) -> f64 {
        match self {
            Self::Linear(s) => s.reverse(domain, range, pixel),
            Self::Log(s) => s.reverse(domain, range, pixel),
        }
    }
}
