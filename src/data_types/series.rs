use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::find_closest_index;

/// A single sample of a line series, in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line series. Points must be sorted by ascending `x`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub id: String,
    pub points: Vec<DataPoint>,
}

impl DataSeries {
    pub fn new(id: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Index of the point whose x is nearest `x`, if any.
    pub fn closest_index(&self, x: f64) -> Option<usize> {
        find_closest_index(&self.points, x)
    }
}

/// Presentation metadata attached to a series by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub id: String,
    pub display_name: String,
    pub visible: bool,
    /// Auxiliary series (e.g. smoothing sources) never show up in tooltips.
    pub aux: bool,
    pub color: String,
    pub opacity: f32,
}

impl SeriesMetadata {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            visible: true,
            aux: false,
            color: "#425066".to_string(),
            opacity: 1.0,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_aux(mut self, aux: bool) -> Self {
        self.aux = aux;
        self
    }

    /// Whether the series takes part in cursor/tooltip resolution.
    pub fn is_tooltip_eligible(&self) -> bool {
        self.visible && !self.aux
    }
}

pub type SeriesMetadataMap = HashMap<String, SeriesMetadata>;
