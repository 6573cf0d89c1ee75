use super::InteractionView;
use crate::data_types::{Modifiers, PixelPoint, PointerInput, ScrollDelta, WheelInput};
use crate::interaction::WheelOutcome;
use crate::utils::PixelsExt;
use gpui::*;

/// Position relative to the top-left corner of `bounds`.
pub fn local_point(position: Point<Pixels>, bounds: &Bounds<Pixels>) -> PixelPoint {
    let local = position - bounds.origin;
    PixelPoint::new(local.x.as_f64(), local.y.as_f64())
}

pub fn modifiers_from(modifiers: &gpui::Modifiers) -> Modifiers {
    Modifiers {
        alt: modifiers.alt,
        control: modifiers.control,
        shift: modifiers.shift,
    }
}

/// GPUI reports content motion (positive y when scrolling up); the controller
/// expects wheel direction, so the sign is flipped here.
pub fn scroll_delta_from(delta: &gpui::ScrollDelta, line_height: f64) -> ScrollDelta {
    let pixels = delta.pixel_delta(px(line_height as f32));
    ScrollDelta::Pixels(PixelPoint::new(-pixels.x.as_f64(), -pixels.y.as_f64()))
}

impl InteractionView {
    fn pointer_input(
        &self,
        position: Point<Pixels>,
        movement: Point<Pixels>,
        modifiers: &gpui::Modifiers,
    ) -> PointerInput {
        PointerInput {
            position: local_point(position, &self.bounds.borrow()),
            movement: PixelPoint::new(movement.x.as_f64(), movement.y.as_f64()),
            modifiers: modifiers_from(modifiers),
        }
    }

    pub(super) fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        window.focus(&self.focus_handle);
        self.sync_dom_dim();

        if event.click_count >= 2 {
            let reset = self.controller.double_click();
            self.emit_event(reset, cx);
            return;
        }

        self.last_mouse_pos = Some(event.position);
        let input = self.pointer_input(event.position, Point::default(), &event.modifiers);
        self.controller.mouse_down(&input);
        cx.notify();
    }

    pub(super) fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let movement = self
            .last_mouse_pos
            .map(|last| event.position - last)
            .unwrap_or_default();
        self.last_mouse_pos = Some(event.position);

        let input = self.pointer_input(event.position, movement, &event.modifiers);
        let proposed = self.controller.mouse_move(&input);
        self.emit_event(proposed, cx);
    }

    pub(super) fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let input = self.pointer_input(event.position, Point::default(), &event.modifiers);
        let proposed = self.controller.mouse_up(&input);
        self.emit_event(proposed, cx);
    }

    pub(super) fn handle_hover(
        &mut self,
        hovered: &bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if *hovered {
            self.sync_dom_dim();
            let position = window.mouse_position();
            self.last_mouse_pos = Some(position);
            let local = local_point(position, &self.bounds.borrow());
            self.controller.mouse_enter(Some(local));
        } else {
            self.last_mouse_pos = None;
            self.controller.mouse_leave();
        }
        cx.notify();
    }

    pub(super) fn handle_scroll_wheel(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sync_dom_dim();
        let line_height = self.controller.config().wheel_line_height;
        let input = WheelInput {
            position: local_point(event.position, &self.bounds.borrow()),
            delta: scroll_delta_from(&event.delta, line_height),
            modifiers: modifiers_from(&event.modifiers),
        };

        match self.controller.wheel(&input) {
            WheelOutcome::Zoom { event } => {
                cx.stop_propagation();
                self.emit_event(event, cx);
            }
            WheelOutcome::ShowInstruction(ticket) => {
                self.schedule_instruction_hide(ticket, cx);
                cx.notify();
            }
            WheelOutcome::Ignored => {}
        }
    }
}
