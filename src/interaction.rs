//! Pointer and wheel state machine for an interactive line chart.
//!
//! [`InteractionController`] receives raw container-relative input, keeps the
//! gesture state, and answers with proposed [`InteractionEvent`]s. It never
//! mutates the view extent itself: the host owns it and feeds the accepted
//! value back through [`InteractionController::set_view_extent`].

use tracing::{debug, trace, warn};

use crate::data_types::{
    DataPoint, DataSeries, Dimension, InteractionConfig, InteractionEvent, InteractionState,
    Lifecycle, PixelPoint, PointerInput, Rect, SeriesMetadataMap, ViewExtent, WheelInput,
};
use crate::scales::SharedScale;
use crate::tooltip::{resolve_cursored_data, sort_tooltip_data, TooltipDatum};
use crate::transform::PlotTransform;
use crate::view_controller::ViewController;

/// Identifies one showing of the zoom instruction.
///
/// The host schedules [`InteractionController::hide_zoom_instruction`] with the
/// ticket after the configured timeout. Any later wheel event invalidates the
/// ticket, so only the most recent timer can hide the instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstructionTicket(u64);

/// Result of a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// The wheel was a zoom gesture; the host must prevent the default scroll.
    /// `event` is `None` when inputs are missing and no extent could be proposed.
    Zoom { event: Option<InteractionEvent> },
    /// Plain scroll: the instruction is showing, hide it after the timeout.
    ShowInstruction(InstructionTicket),
    /// The controller is not listening.
    Ignored,
}

impl WheelOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Zoom { .. })
    }

    pub fn event(&self) -> Option<InteractionEvent> {
        match self {
            Self::Zoom { event } => *event,
            _ => None,
        }
    }
}

pub struct InteractionController {
    config: InteractionConfig,
    lifecycle: Lifecycle,
    state: InteractionState,

    series_data: Vec<DataSeries>,
    series_metadata: SeriesMetadataMap,
    view_extent: Option<ViewExtent>,
    x_scale: Option<SharedScale>,
    y_scale: Option<SharedScale>,
    dom_dim: Option<Dimension>,

    drag_start: Option<PixelPoint>,
    zoom_box: Rect,

    cursor_inside: bool,
    cursor_position: Option<PixelPoint>,
    cursor_x_location: Option<f64>,
    cursored_data: Vec<TooltipDatum>,
    tooltip_attached: bool,

    show_zoom_instruction: bool,
    instruction_generation: u64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Pending,
            state: InteractionState::None,
            series_data: Vec::new(),
            series_metadata: SeriesMetadataMap::new(),
            view_extent: None,
            x_scale: None,
            y_scale: None,
            dom_dim: None,
            drag_start: None,
            zoom_box: Rect::default(),
            cursor_inside: false,
            cursor_position: None,
            cursor_x_location: None,
            cursored_data: Vec::new(),
            tooltip_attached: false,
            show_zoom_instruction: false,
            instruction_generation: 0,
        }
    }

    // --- Lifecycle ---

    /// Starts accepting input. Called once the host view is laid out.
    pub fn view_ready(&mut self) {
        if self.lifecycle != Lifecycle::Pending {
            warn!(lifecycle = ?self.lifecycle, "view_ready called twice or after teardown");
            return;
        }
        self.lifecycle = Lifecycle::Ready;
        debug!("interaction listeners attached");
    }

    /// Detaches everything at once: input is ignored afterwards and any
    /// outstanding instruction ticket becomes stale.
    pub fn teardown(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
        self.instruction_generation += 1;
        self.drag_start = None;
        self.state = InteractionState::None;
        debug!("interaction listeners detached");
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn is_listening(&self) -> bool {
        if self.lifecycle != Lifecycle::Ready {
            trace!(lifecycle = ?self.lifecycle, "input ignored");
            return false;
        }
        true
    }

    // --- Inputs from the host ---

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
        self.recompute_cursored_data();
    }

    pub fn set_view_extent(&mut self, extent: ViewExtent) {
        self.view_extent = Some(extent);
        self.recompute_cursored_data();
    }

    pub fn set_dom_dim(&mut self, dim: Dimension) {
        if self.dom_dim == Some(dim) {
            return;
        }
        self.dom_dim = Some(dim);
        self.recompute_cursored_data();
    }

    pub fn set_scales(&mut self, x_scale: SharedScale, y_scale: SharedScale) {
        self.x_scale = Some(x_scale);
        self.y_scale = Some(y_scale);
        self.recompute_cursored_data();
    }

    pub fn set_series_data(&mut self, series_data: Vec<DataSeries>) {
        self.series_data = series_data;
        self.recompute_cursored_data();
    }

    pub fn set_series_metadata(&mut self, metadata: SeriesMetadataMap) {
        self.series_metadata = metadata;
        self.recompute_cursored_data();
    }

    // --- Derived state ---

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn view_extent(&self) -> Option<ViewExtent> {
        self.view_extent
    }

    /// Rubber band in container pixels. Only meaningful while drag-zooming.
    pub fn zoom_box(&self) -> Option<Rect> {
        (self.state == InteractionState::DragZooming).then_some(self.zoom_box)
    }

    pub fn cursored_data(&self) -> &[TooltipDatum] {
        &self.cursored_data
    }

    pub fn tooltip_attached(&self) -> bool {
        self.tooltip_attached
    }

    pub fn show_zoom_instruction(&self) -> bool {
        self.show_zoom_instruction
    }

    pub fn cursor_x_location(&self) -> Option<f64> {
        self.cursor_x_location
    }

    pub fn is_cursor_inside(&self) -> bool {
        self.cursor_inside
    }

    /// Transform for the current inputs, or `None` while any of extent,
    /// scales or a non-empty dimension is missing.
    pub fn plot_transform(&self) -> Option<PlotTransform<'_>> {
        let extent = self.view_extent?;
        let dim = self.dom_dim.filter(|d| !d.is_empty())?;
        let x_scale = self.x_scale.as_deref()?;
        let y_scale = self.y_scale.as_deref()?;
        Some(PlotTransform::new(x_scale, y_scale, extent, dim))
    }

    pub fn to_data(&self, pixel: PixelPoint) -> Option<DataPoint> {
        self.plot_transform().map(|t| t.to_data(pixel))
    }

    /// Pixel position of a data point, used to place tooltip markers.
    pub fn to_display_pixel(&self, point: DataPoint) -> Option<PixelPoint> {
        self.plot_transform().map(|t| t.to_display_pixel(point))
    }

    fn require_transform(&self, gesture: &str) -> Option<PlotTransform<'_>> {
        let transform = self.plot_transform();
        if transform.is_none() {
            warn!(
                gesture,
                has_extent = self.view_extent.is_some(),
                has_scales = self.x_scale.is_some() && self.y_scale.is_some(),
                dom_dim = ?self.dom_dim,
                "missing chart inputs, gesture ignored"
            );
        }
        transform
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "interaction state changed");
            self.state = next;
        }
    }

    // --- Pointer events ---

    pub fn mouse_down(&mut self, input: &PointerInput) {
        if !self.is_listening() {
            return;
        }
        if input.modifiers.shift {
            self.transition(InteractionState::Panning);
        } else {
            self.transition(InteractionState::DragZooming);
            self.drag_start = Some(input.position);
            self.zoom_box = Rect::at(input.position);
        }
    }

    pub fn mouse_move(&mut self, input: &PointerInput) -> Option<InteractionEvent> {
        if !self.is_listening() {
            return None;
        }
        match self.state {
            InteractionState::DragZooming => {
                if let Some(start) = self.drag_start {
                    self.zoom_box = Rect::spanning(start, input.position);
                }
                None
            }
            InteractionState::Panning => {
                let transform = self.require_transform("pan")?;
                let extent = ViewController::pan_extent(&transform, input.movement);
                trace!(?extent, "pan proposed");
                Some(InteractionEvent::ViewExtentChanged(extent))
            }
            InteractionState::ScrollZooming => {
                self.transition(InteractionState::None);
                self.update_tooltip(input.position);
                None
            }
            InteractionState::None => {
                self.update_tooltip(input.position);
                None
            }
        }
    }

    pub fn mouse_up(&mut self, _input: &PointerInput) -> Option<InteractionEvent> {
        if !self.is_listening() {
            return None;
        }
        self.drag_start = None;

        let mut event = None;
        if self.state == InteractionState::DragZooming && self.zoom_box.has_area() {
            if let Some(transform) = self.require_transform("drag zoom") {
                let extent = ViewController::zoom_box_extent(&transform, &self.zoom_box);
                debug!(zoom_box = ?self.zoom_box, ?extent, "drag zoom committed");
                event = extent.map(InteractionEvent::ViewExtentChanged);
            }
        }
        self.zoom_box = Rect::default();
        self.transition(InteractionState::None);
        event
    }

    /// Cursor entered the container. `position` is known when the host
    /// reports it with the enter event.
    pub fn mouse_enter(&mut self, position: Option<PixelPoint>) {
        if !self.is_listening() {
            return;
        }
        self.cursor_inside = true;
        match position {
            Some(position) => self.update_tooltip(position),
            None => self.recompute_cursored_data(),
        }
    }

    pub fn mouse_leave(&mut self) {
        if !self.is_listening() {
            return;
        }
        self.drag_start = None;
        self.cursor_inside = false;
        self.recompute_cursored_data();
        self.transition(InteractionState::None);
    }

    pub fn double_click(&mut self) -> Option<InteractionEvent> {
        if !self.is_listening() {
            return None;
        }
        self.transition(InteractionState::None);
        debug!("view extent reset requested");
        Some(InteractionEvent::ViewExtentReset)
    }

    // --- Wheel ---

    pub fn wheel(&mut self, input: &WheelInput) -> WheelOutcome {
        if !self.is_listening() {
            return WheelOutcome::Ignored;
        }
        // Every wheel event supersedes the pending hide.
        self.instruction_generation += 1;

        if !input.modifiers.is_scroll_zoom() {
            self.show_zoom_instruction = true;
            return WheelOutcome::ShowInstruction(InstructionTicket(self.instruction_generation));
        }

        self.show_zoom_instruction = false;
        let Some(transform) = self.require_transform("scroll zoom") else {
            return WheelOutcome::Zoom { event: None };
        };
        let delta = input.delta.to_pixels(self.config.wheel_line_height);
        let scale = ViewController::compute_zoom_scale(
            ViewController::dominant_wheel_delta(delta),
            self.config.scroll_zoom_speed_factor,
            self.config.min_zoom_scale,
        );
        let extent = ViewController::scroll_zoom_extent(&transform, input.position, scale);
        trace!(scale, ?extent, "scroll zoom proposed");
        self.transition(InteractionState::ScrollZooming);
        WheelOutcome::Zoom {
            event: Some(InteractionEvent::ViewExtentChanged(extent)),
        }
    }

    /// Hides the zoom instruction if `ticket` is still the latest one.
    /// Returns whether anything changed.
    pub fn hide_zoom_instruction(&mut self, ticket: InstructionTicket) -> bool {
        if ticket.0 != self.instruction_generation || !self.show_zoom_instruction {
            return false;
        }
        self.show_zoom_instruction = false;
        true
    }

    // --- Tooltip ---

    fn update_tooltip(&mut self, position: PixelPoint) {
        self.cursor_position = Some(position);
        self.cursor_x_location = self.plot_transform().map(|t| t.x_to_data(position.x));
        self.recompute_cursored_data();
    }

    fn recompute_cursored_data(&mut self) {
        let Some(cursor_x) = self.cursor_x_location else {
            self.cursored_data.clear();
            self.tooltip_attached = false;
            return;
        };
        let mut data = resolve_cursored_data(&self.series_data, &self.series_metadata, cursor_x);
        let transform = self.plot_transform();
        sort_tooltip_data(
            &mut data,
            self.config.tooltip_sort,
            self.cursor_position,
            transform.as_ref(),
        );
        self.tooltip_attached = self.cursor_inside && !data.is_empty();
        self.cursored_data = data;
    }
}
