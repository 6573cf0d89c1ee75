use crate::data_types::{Dimension, PixelPoint, Rect, ViewExtent};
use crate::transform::PlotTransform;

/// ViewController computes proposed view extents for pan and zoom gestures,
/// independently of the GPUI infrastructure to facilitate testing.
///
/// Every function is pure: it reads the current extent through the transform
/// and returns a new one. Applying it is the host's business.
pub struct ViewController;

impl ViewController {
    /// Extent after dragging the content by `movement` pixels.
    ///
    /// The window moves opposite to the pointer so the content follows it:
    /// dragging right reveals data on the left.
    pub fn pan_extent(transform: &PlotTransform, movement: PixelPoint) -> ViewExtent {
        let dx = -movement.x;
        let dy = -movement.y;
        let Dimension { width, height } = transform.dom_dim;
        transform.pixel_window_to_extent((dx, width + dx), (height + dy, dy))
    }

    /// Extent selected by a rubber band, or `None` when it has no area.
    pub fn zoom_box_extent(transform: &PlotTransform, zoom_box: &Rect) -> Option<ViewExtent> {
        if !zoom_box.has_area() {
            return None;
        }
        Some(transform.rect_to_extent(zoom_box))
    }

    /// The wheel axis that moved the most. Mice mostly report y, trackpads
    /// with shift or horizontal swipes report x.
    pub fn dominant_wheel_delta(delta: PixelPoint) -> f64 {
        if delta.y.abs() >= delta.x.abs() {
            delta.y
        } else {
            delta.x
        }
    }

    /// Scale applied to the visible window for one wheel step.
    /// Values above 1 zoom out, below 1 zoom in.
    pub fn compute_zoom_scale(delta: f64, speed_factor: f64, min_scale: f64) -> f64 {
        let scale = 1.0 + delta * speed_factor;
        if scale.is_nan() {
            return 1.0;
        }
        scale.max(min_scale)
    }

    /// Extent after scaling the visible window by `scale` around `pivot`.
    ///
    /// The data value under the pivot is unchanged. The pivot is clamped into
    /// the container.
    pub fn scroll_zoom_extent(
        transform: &PlotTransform,
        pivot: PixelPoint,
        scale: f64,
    ) -> ViewExtent {
        let Dimension { width, height } = transform.dom_dim;
        let px = pivot.x.clamp(0.0, width.max(0.0));
        let py = pivot.y.clamp(0.0, height.max(0.0));

        let left = px - px * scale;
        let right = px + (width - px) * scale;
        let top = py - py * scale;
        let bottom = py + (height - py) * scale;
        transform.pixel_window_to_extent((left, right), (bottom, top))
    }
}
