use serde::{Deserialize, Serialize};

/// Visible range on a single axis, in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
}

impl AxisExtent {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl From<(f64, f64)> for AxisExtent {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// The visible data-space window of the chart.
///
/// The interaction layer never owns the authoritative value: it keeps the
/// last extent received from the host and proposes replacements through
/// [`InteractionEvent::ViewExtentChanged`](crate::InteractionEvent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewExtent {
    pub x: AxisExtent,
    pub y: AxisExtent,
}

impl ViewExtent {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn width(&self) -> f64 {
        self.x.span()
    }

    pub fn height(&self) -> f64 {
        self.y.span()
    }
}

/// Axis selector used by helpers that work on one dimension at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Size of the interactive container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A position in container pixels. Origin is the top-left corner, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in container pixels.
///
/// Used for the rubber band drawn while drag-zooming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle anchored at `origin`.
    pub fn at(origin: PixelPoint) -> Self {
        Self::new(origin.x, origin.y, 0.0, 0.0)
    }

    /// Smallest rectangle containing both corners, whichever way the drag went.
    pub fn spanning(a: PixelPoint, b: PixelPoint) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
