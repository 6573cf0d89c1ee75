pub mod actions;
pub mod input;

use crate::data_types::{
    DataSeries, Dimension, InteractionConfig, InteractionEvent, SeriesMetadataMap, ViewExtent,
};
use crate::interaction::{InstructionTicket, InteractionController};
use crate::scales::SharedScale;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

pub use actions::ResetView;

pub const ZOOM_INSTRUCTION_TEXT: &str = "Alt + Scroll to zoom";

/// Transparent overlay that turns GPUI pointer input into view extent proposals.
///
/// The view paints only the interaction chrome (rubber band, zoom hint). The
/// chart underneath subscribes to [`InteractionEvent`]s and pushes the
/// accepted extent back with [`InteractionView::set_view_extent`].
pub struct InteractionView {
    pub controller: InteractionController,

    bounds: Rc<RefCell<Bounds<Pixels>>>,
    last_mouse_pos: Option<Point<Pixels>>,
    instruction_task: Option<Task<()>>,
    focus_handle: FocusHandle,
}

impl EventEmitter<InteractionEvent> for InteractionView {}

impl Focusable for InteractionView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl InteractionView {
    pub fn new(config: InteractionConfig, cx: &mut Context<Self>) -> Self {
        cx.on_release(|this: &mut Self, _cx| this.controller.teardown())
            .detach();

        let mut controller = InteractionController::new(config);
        controller.view_ready();

        Self {
            controller,
            bounds: Rc::new(RefCell::new(Bounds::default())),
            last_mouse_pos: None,
            instruction_task: None,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn set_view_extent(&mut self, extent: ViewExtent, cx: &mut Context<Self>) {
        self.controller.set_view_extent(extent);
        cx.notify();
    }

    pub fn set_scales(
        &mut self,
        x_scale: SharedScale,
        y_scale: SharedScale,
        cx: &mut Context<Self>,
    ) {
        self.controller.set_scales(x_scale, y_scale);
        cx.notify();
    }

    pub fn set_series_data(&mut self, series_data: Vec<DataSeries>, cx: &mut Context<Self>) {
        self.controller.set_series_data(series_data);
        cx.notify();
    }

    pub fn set_series_metadata(&mut self, metadata: SeriesMetadataMap, cx: &mut Context<Self>) {
        self.controller.set_series_metadata(metadata);
        cx.notify();
    }

    /// Stops all input handling and cancels the pending instruction timer.
    pub fn teardown(&mut self, cx: &mut Context<Self>) {
        self.instruction_task = None;
        self.controller.teardown();
        cx.notify();
    }

    fn emit_event(&mut self, event: Option<InteractionEvent>, cx: &mut Context<Self>) {
        if let Some(event) = event {
            cx.emit(event);
        }
        cx.notify();
    }

    /// Replacing the task drops the previous one, which cancels its timer.
    fn schedule_instruction_hide(&mut self, ticket: InstructionTicket, cx: &mut Context<Self>) {
        let timeout = self.controller.config().zoom_instruction_timeout;
        self.instruction_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(timeout).await;
            this.update(cx, |view, cx| {
                if view.controller.hide_zoom_instruction(ticket) {
                    cx.notify();
                }
            })
            .ok();
        }));
    }

    fn sync_dom_dim(&mut self) {
        let bounds = *self.bounds.borrow();
        self.controller.set_dom_dim(Dimension::new(
            bounds.size.width.as_f64(),
            bounds.size.height.as_f64(),
        ));
    }
}

impl Render for InteractionView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bounds_rc = self.bounds.clone();
        let view = cx.entity().downgrade();

        let zoom_box = self.controller.zoom_box().filter(|r| r.has_area());
        let show_instruction = self.controller.show_zoom_instruction();

        div()
            .id(("chart-interaction", cx.entity_id()))
            .track_focus(&self.focus_handle)
            .size_full()
            .relative()
            .cursor(CursorStyle::Crosshair)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_hover(cx.listener(Self::handle_hover))
            .on_scroll_wheel(cx.listener(Self::handle_scroll_wheel))
            .on_action(cx.listener(Self::handle_reset_view))
            .child(
                canvas(|_, _, _| {}, move |bounds, (), _, cx| {
                    *bounds_rc.borrow_mut() = bounds;
                    // Resizes recompute the tooltip without waiting for pointer motion.
                    view.update(cx, |this, _| this.sync_dom_dim()).ok();
                })
                .size_full()
                .absolute(),
            )
            .children(zoom_box.map(|r| {
                div()
                    .absolute()
                    .left(px(r.x as f32))
                    .top(px(r.y as f32))
                    .w(px(r.width as f32))
                    .h(px(r.height as f32))
                    .bg(gpui::blue().alpha(0.15))
                    .border_1()
                    .border_color(gpui::blue().alpha(0.6))
            }))
            .children(show_instruction.then(|| {
                div()
                    .absolute()
                    .top(px(8.0))
                    .right(px(8.0))
                    .px_2()
                    .py_1()
                    .rounded_sm()
                    .bg(gpui::black().alpha(0.7))
                    .text_size(px(11.0))
                    .text_color(gpui::white())
                    .child(ZOOM_INSTRUCTION_TEXT)
            }))
    }
}
