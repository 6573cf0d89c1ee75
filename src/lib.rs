//! Pan, zoom and tooltip interaction for GPUI line charts.
//!
//! The core ([`InteractionController`]) is toolkit independent: it consumes
//! container-relative pointer and wheel input and proposes new view extents.
//! The optional `view` feature wraps it in a GPUI element.

#[cfg(feature = "view")]
pub mod chart_view;
pub mod data_types;
pub mod interaction;
pub mod scales;
pub mod tooltip;
pub mod transform;
pub mod utils;
pub mod view_controller;

#[cfg(feature = "view")]
pub use chart_view::{InteractionView, ResetView};
pub use data_types::{
    DataPoint, DataSeries, Dimension, InteractionConfig, InteractionEvent, InteractionState,
    SeriesMetadata, SeriesMetadataMap, TooltipSort, ViewExtent,
};
pub use interaction::{InstructionTicket, InteractionController, WheelOutcome};
pub use scales::{ChartScale, Scale, ScaleType};
pub use tooltip::TooltipDatum;
