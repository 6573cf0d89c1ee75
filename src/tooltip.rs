use tracing::trace;

use crate::data_types::{
    DataPoint, DataSeries, PixelPoint, SeriesMetadata, SeriesMetadataMap, TooltipSort,
};
use crate::transform::PlotTransform;

/// The point of one series closest to the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipDatum {
    pub id: String,
    pub metadata: SeriesMetadata,
    pub closest_point_index: usize,
    pub point: DataPoint,
}

/// Nearest point per tooltip-eligible series for a cursor at `cursor_x` (data units).
///
/// Series without metadata, hidden or auxiliary series are skipped, and so are
/// series with no points. Output keeps the input series order.
pub fn resolve_cursored_data(
    series_data: &[DataSeries],
    metadata_map: &SeriesMetadataMap,
    cursor_x: f64,
) -> Vec<TooltipDatum> {
    let data: Vec<TooltipDatum> = series_data
        .iter()
        .filter_map(|series| {
            let metadata = metadata_map.get(&series.id)?;
            if !metadata.is_tooltip_eligible() {
                return None;
            }
            let index = series.closest_index(cursor_x)?;
            let point = *series.points.get(index)?;
            Some(TooltipDatum {
                id: series.id.clone(),
                metadata: metadata.clone(),
                closest_point_index: index,
                point,
            })
        })
        .collect();
    trace!(cursor_x, resolved = data.len(), "resolved cursored data");
    data
}

/// Where the tooltip marker for `datum` is drawn, in container pixels.
pub fn tooltip_anchor(datum: &TooltipDatum, transform: &PlotTransform) -> PixelPoint {
    transform.to_display_pixel(datum.point)
}

/// Reorders tooltip rows. The sort is stable, equal keys keep the series order.
///
/// `Nearest` needs the cursor position and a transform to measure pixel
/// distance; without them the order is left untouched.
pub fn sort_tooltip_data(
    data: &mut [TooltipDatum],
    sort: TooltipSort,
    cursor: Option<PixelPoint>,
    transform: Option<&PlotTransform>,
) {
    match sort {
        TooltipSort::Default => {}
        TooltipSort::Alphabetical => {
            data.sort_by(|a, b| a.metadata.display_name.cmp(&b.metadata.display_name))
        }
        TooltipSort::Ascending => data.sort_by(|a, b| a.point.y.total_cmp(&b.point.y)),
        TooltipSort::Descending => data.sort_by(|a, b| b.point.y.total_cmp(&a.point.y)),
        TooltipSort::Nearest => {
            let (Some(cursor), Some(transform)) = (cursor, transform) else {
                return;
            };
            let distance = |d: &TooltipDatum| {
                let p = tooltip_anchor(d, transform);
                (p.x - cursor.x).hypot(p.y - cursor.y)
            };
            data.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
        }
    }
}
