use crate::data_types::DataPoint;

#[cfg(feature = "view")]
use gpui::Pixels;

#[cfg(feature = "view")]
pub trait PixelsExt {
    fn as_f64(&self) -> f64;
}

#[cfg(feature = "view")]
impl PixelsExt for Pixels {
    fn as_f64(&self) -> f64 {
        f32::from(*self) as f64
    }
}

/// Index of the point whose x is nearest `x` in an x-ascending slice.
///
/// Distance is absolute. When two points are equally close, or several points
/// share the winning x, the lowest index is returned. Returns `None` for an
/// empty slice or a NaN target.
pub fn find_closest_index(points: &[DataPoint], x: f64) -> Option<usize> {
    if points.is_empty() || x.is_nan() {
        return None;
    }

    let idx = points.partition_point(|p| p.x < x);
    if idx == 0 {
        return Some(0);
    }

    let first_of = |target: f64| points.partition_point(|p| p.x < target);
    if idx == points.len() {
        return Some(first_of(points[idx - 1].x));
    }

    let d_prev = x - points[idx - 1].x;
    let d_next = points[idx].x - x;
    if d_next < d_prev {
        Some(idx)
    } else {
        Some(first_of(points[idx - 1].x))
    }
}
