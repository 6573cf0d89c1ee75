//! Transform helper for coordinate projection

use crate::data_types::{Axis, DataPoint, Dimension, PixelPoint, Rect, ViewExtent};
use crate::scales::Scale;

/// Pixel range an axis spans inside a container of size `dim`.
///
/// X runs left to right (`[0, width]`), Y is flipped (`[height, 0]`) because
/// pixel y grows downward while data y grows upward.
pub fn scale_range_from_dom_dim(dim: &Dimension, axis: Axis) -> (f64, f64) {
    match axis {
        Axis::X => (0.0, dim.width),
        Axis::Y => (dim.height, 0.0),
    }
}

/// Projects between container pixels and data space for the current extent.
///
/// Must stay the exact inverse pairing the chart renderer uses, otherwise the
/// tooltip and the zoom box drift away from the drawn lines.
#[derive(Clone, Copy)]
pub struct PlotTransform<'a> {
    pub x_scale: &'a dyn Scale,
    pub y_scale: &'a dyn Scale,
    pub extent: ViewExtent,
    pub dom_dim: Dimension,
}

impl<'a> PlotTransform<'a> {
    pub fn new(
        x_scale: &'a dyn Scale,
        y_scale: &'a dyn Scale,
        extent: ViewExtent,
        dom_dim: Dimension,
    ) -> Self {
        Self {
            x_scale,
            y_scale,
            extent,
            dom_dim,
        }
    }

    fn x_range(&self) -> (f64, f64) {
        scale_range_from_dom_dim(&self.dom_dim, Axis::X)
    }

    fn y_range(&self) -> (f64, f64) {
        scale_range_from_dom_dim(&self.dom_dim, Axis::Y)
    }

    pub fn x_to_data(&self, pixel: f64) -> f64 {
        self.x_scale
            .reverse(self.extent.x.as_tuple(), self.x_range(), pixel)
    }

    pub fn y_to_data(&self, pixel: f64) -> f64 {
        self.y_scale
            .reverse(self.extent.y.as_tuple(), self.y_range(), pixel)
    }

    pub fn to_data(&self, point: PixelPoint) -> DataPoint {
        DataPoint::new(self.x_to_data(point.x), self.y_to_data(point.y))
    }

    pub fn x_to_display_pixel(&self, value: f64) -> f64 {
        self.x_scale
            .forward(self.extent.x.as_tuple(), self.x_range(), value)
    }

    pub fn y_to_display_pixel(&self, value: f64) -> f64 {
        self.y_scale
            .forward(self.extent.y.as_tuple(), self.y_range(), value)
    }

    pub fn to_display_pixel(&self, point: DataPoint) -> PixelPoint {
        PixelPoint::new(
            self.x_to_display_pixel(point.x),
            self.y_to_display_pixel(point.y),
        )
    }

    /// Extent covered by the pixel window `x_px` (left, right) and `y_px`
    /// (bottom, top). Bottom maps to the data minimum.
    pub fn pixel_window_to_extent(&self, x_px: (f64, f64), y_px: (f64, f64)) -> ViewExtent {
        ViewExtent::new(
            (self.x_to_data(x_px.0), self.x_to_data(x_px.1)),
            (self.y_to_data(y_px.0), self.y_to_data(y_px.1)),
        )
    }

    /// Extent covered by a rectangle drawn in container pixels.
    pub fn rect_to_extent(&self, rect: &Rect) -> ViewExtent {
        self.pixel_window_to_extent((rect.x, rect.right()), (rect.bottom(), rect.y))
    }
}
