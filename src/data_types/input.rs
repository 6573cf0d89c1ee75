use serde::{Deserialize, Serialize};

use super::PixelPoint;

/// Keyboard modifiers held during a pointer or wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub alt: bool,
    pub control: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    /// Alt without Ctrl or Shift. Other combinations belong to the platform
    /// (page zoom, horizontal scroll).
    pub fn is_scroll_zoom(&self) -> bool {
        self.alt && !self.control && !self.shift
    }
}

/// Pointer event, positions relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub position: PixelPoint,
    /// Motion since the previous pointer event.
    pub movement: PixelPoint,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: PixelPoint::new(x, y),
            ..Default::default()
        }
    }

    pub fn with_movement(mut self, dx: f64, dy: f64) -> Self {
        self.movement = PixelPoint::new(dx, dy);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Pixels(PixelPoint),
    Lines(PixelPoint),
}

impl Default for ScrollDelta {
    fn default() -> Self {
        Self::Pixels(PixelPoint::default())
    }
}

impl ScrollDelta {
    pub fn to_pixels(&self, line_height: f64) -> PixelPoint {
        match *self {
            Self::Pixels(p) => p,
            Self::Lines(l) => PixelPoint::new(l.x * line_height, l.y * line_height),
        }
    }
}

/// Wheel event. Positive `delta.y` scrolls down, which zooms out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    pub position: PixelPoint,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

impl WheelInput {
    pub fn pixels(x: f64, y: f64, delta_x: f64, delta_y: f64) -> Self {
        Self {
            position: PixelPoint::new(x, y),
            delta: ScrollDelta::Pixels(PixelPoint::new(delta_x, delta_y)),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
