use gpui_chart_interaction::data_types::{
    DataPoint, DataSeries, Dimension, InteractionConfig, InteractionEvent, InteractionState,
    Lifecycle, Modifiers, PixelPoint, PointerInput, Rect, ScrollDelta, SeriesMetadata,
    SeriesMetadataMap, ViewExtent, WheelInput,
};
use gpui_chart_interaction::interaction::{InteractionController, WheelOutcome};
use gpui_chart_interaction::scales::ChartScale;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn extent_of(event: Option<InteractionEvent>) -> ViewExtent {
    match event {
        Some(InteractionEvent::ViewExtentChanged(extent)) => extent,
        other => panic!("expected a view extent change, got {other:?}"),
    }
}

/// 100x100 px container showing data [0, 100] x [0, 100], listeners attached.
fn ready_controller() -> InteractionController {
    let mut controller = InteractionController::new(InteractionConfig::default());
    controller.set_scales(ChartScale::linear().shared(), ChartScale::linear().shared());
    controller.set_view_extent(ViewExtent::new((0.0, 100.0), (0.0, 100.0)));
    controller.set_dom_dim(Dimension::new(100.0, 100.0));
    controller.view_ready();
    controller
}

fn line(id: &str, xs: &[f64]) -> DataSeries {
    DataSeries::new(id, xs.iter().map(|&x| DataPoint::new(x, x * 2.0)).collect())
}

fn metadata(entries: &[SeriesMetadata]) -> SeriesMetadataMap {
    entries.iter().map(|m| (m.id.clone(), m.clone())).collect()
}

fn plain_wheel() -> WheelInput {
    WheelInput::pixels(0.0, 0.0, 0.0, 1.0)
}

fn alt_wheel(x: f64, y: f64, delta_y: f64) -> WheelInput {
    WheelInput::pixels(x, y, 0.0, delta_y).with_modifiers(Modifiers::alt())
}

// --- Drag zoom ---

#[test]
fn test_mouse_down_starts_drag_zoom() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    assert_eq!(c.state(), InteractionState::DragZooming);
    assert_eq!(c.zoom_box(), Some(Rect::new(10.0, 10.0, 0.0, 0.0)));
}

#[test]
fn test_drag_zoom_tracks_bounding_box() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(50.0, 40.0));
    // Dragging up and to the left still yields a positive-size box.
    assert_eq!(c.mouse_move(&PointerInput::at(10.0, 10.0)), None);
    assert_eq!(c.zoom_box(), Some(Rect::new(10.0, 10.0, 40.0, 30.0)));
    assert_eq!(c.state(), InteractionState::DragZooming);
}

#[test]
fn test_drag_zoom_commit() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    c.mouse_move(&PointerInput::at(50.0, 40.0));
    let extent = extent_of(c.mouse_up(&PointerInput::at(50.0, 40.0)));

    // x: data(10)..data(50); y: data(40)..data(10) because pixel y is flipped.
    assert_close(extent.x.min, 10.0);
    assert_close(extent.x.max, 50.0);
    assert_close(extent.y.min, 60.0);
    assert_close(extent.y.max, 90.0);
    assert_eq!(c.state(), InteractionState::None);
    assert_eq!(c.zoom_box(), None);
}

#[test]
fn test_drag_zoom_zero_area_emits_nothing() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    c.mouse_move(&PointerInput::at(10.0, 10.0));
    assert_eq!(c.mouse_up(&PointerInput::at(10.0, 10.0)), None);
    assert_eq!(c.state(), InteractionState::None);

    // A horizontal-only drag has no height either.
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    c.mouse_move(&PointerInput::at(60.0, 10.0));
    assert_eq!(c.mouse_up(&PointerInput::at(60.0, 10.0)), None);
}

#[test]
fn test_mouse_up_when_idle_is_noop() {
    let mut c = ready_controller();
    assert_eq!(c.mouse_up(&PointerInput::at(5.0, 5.0)), None);
    assert_eq!(c.state(), InteractionState::None);
}

// --- Panning ---

#[test]
fn test_shift_mouse_down_starts_panning() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0).with_modifiers(Modifiers::shift()));
    assert_eq!(c.state(), InteractionState::Panning);
    assert_eq!(c.zoom_box(), None);
}

#[test]
fn test_pan_emits_on_every_move() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0).with_modifiers(Modifiers::shift()));

    let extent = extent_of(c.mouse_move(&PointerInput::at(20.0, 10.0).with_movement(10.0, 0.0)));
    assert_close(extent.x.min, -10.0);
    assert_close(extent.x.max, 90.0);
    assert_close(extent.y.min, 0.0);
    assert_close(extent.y.max, 100.0);
    assert_close(extent.height(), 100.0);

    // Still panning; the host has not fed back the new extent, so the same
    // delta proposes the same window again.
    assert_eq!(c.state(), InteractionState::Panning);
    let again = extent_of(c.mouse_move(&PointerInput::at(30.0, 10.0).with_movement(10.0, 0.0)));
    assert_eq!(again, extent);
}

#[test]
fn test_pan_follows_fed_back_extent() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0).with_modifiers(Modifiers::shift()));
    let first = extent_of(c.mouse_move(&PointerInput::at(20.0, 10.0).with_movement(10.0, 0.0)));
    c.set_view_extent(first);
    let second = extent_of(c.mouse_move(&PointerInput::at(30.0, 10.0).with_movement(10.0, 0.0)));
    assert_close(second.x.min, -20.0);
    assert_close(second.x.max, 80.0);
}

#[test]
fn test_pan_without_inputs_is_noop() {
    let mut c = InteractionController::default();
    c.view_ready();
    c.mouse_down(&PointerInput::at(10.0, 10.0).with_modifiers(Modifiers::shift()));
    assert_eq!(c.mouse_move(&PointerInput::at(20.0, 10.0).with_movement(10.0, 0.0)), None);

    // An empty container counts as missing too.
    c.set_scales(ChartScale::linear().shared(), ChartScale::linear().shared());
    c.set_view_extent(ViewExtent::new((0.0, 1.0), (0.0, 1.0)));
    c.set_dom_dim(Dimension::new(0.0, 0.0));
    assert_eq!(c.mouse_move(&PointerInput::at(20.0, 10.0).with_movement(10.0, 0.0)), None);
}

// --- Wheel ---

#[test]
fn test_alt_wheel_zooms() {
    let mut c = ready_controller();
    let outcome = c.wheel(&alt_wheel(50.0, 50.0, 10.0));
    assert!(outcome.prevents_default());
    let extent = extent_of(outcome.event());
    // Scrolling down by 10px at speed 0.01 widens the window by 10% around the pointer.
    assert_close(extent.x.min, -5.0);
    assert_close(extent.x.max, 105.0);
    assert_close(extent.y.min, -5.0);
    assert_close(extent.y.max, 105.0);
    assert_eq!(c.state(), InteractionState::ScrollZooming);
    assert!(!c.show_zoom_instruction());
}

#[test]
fn test_alt_wheel_line_delta() {
    let mut c = ready_controller();
    let input = WheelInput {
        position: PixelPoint::new(50.0, 50.0),
        delta: ScrollDelta::Lines(PixelPoint::new(0.0, -1.0)),
        modifiers: Modifiers::alt(),
    };
    let extent = extent_of(c.wheel(&input).event());
    // One line up = 20px = 20% zoom in.
    assert_close(extent.x.min, 10.0);
    assert_close(extent.x.max, 90.0);
}

#[test]
fn test_wheel_without_alt_shows_instruction() {
    let mut c = ready_controller();
    let outcome = c.wheel(&WheelInput::pixels(50.0, 50.0, 0.0, 10.0));
    let WheelOutcome::ShowInstruction(ticket) = outcome else {
        panic!("expected instruction, got {outcome:?}");
    };
    assert!(!outcome.prevents_default());
    assert_eq!(outcome.event(), None);
    assert!(c.show_zoom_instruction());
    assert_eq!(c.state(), InteractionState::None);

    assert!(c.hide_zoom_instruction(ticket));
    assert!(!c.show_zoom_instruction());
}

#[test]
fn test_ctrl_alt_wheel_is_not_zoom() {
    let mut c = ready_controller();
    let modifiers = Modifiers {
        alt: true,
        control: true,
        ..Default::default()
    };
    let outcome = c.wheel(&WheelInput::pixels(50.0, 50.0, 0.0, 10.0).with_modifiers(modifiers));
    assert!(matches!(outcome, WheelOutcome::ShowInstruction(_)));
    assert_eq!(outcome.event(), None);
    assert!(c.show_zoom_instruction());

    let shift_alt = Modifiers {
        alt: true,
        shift: true,
        ..Default::default()
    };
    let outcome = c.wheel(&WheelInput::pixels(50.0, 50.0, 0.0, 10.0).with_modifiers(shift_alt));
    assert!(matches!(outcome, WheelOutcome::ShowInstruction(_)));
}

#[test]
fn test_instruction_timer_restarts() {
    let mut c = ready_controller();
    let WheelOutcome::ShowInstruction(first) = c.wheel(&plain_wheel()) else {
        panic!("expected instruction");
    };
    let WheelOutcome::ShowInstruction(second) = c.wheel(&plain_wheel()) else {
        panic!("expected instruction");
    };
    // The first timer was superseded.
    assert!(!c.hide_zoom_instruction(first));
    assert!(c.show_zoom_instruction());
    assert!(c.hide_zoom_instruction(second));
    assert!(!c.show_zoom_instruction());
}

#[test]
fn test_zoom_wheel_cancels_pending_hide() {
    let mut c = ready_controller();
    let WheelOutcome::ShowInstruction(ticket) = c.wheel(&plain_wheel()) else {
        panic!("expected instruction");
    };
    c.wheel(&WheelInput::pixels(50.0, 50.0, 0.0, 1.0).with_modifiers(Modifiers::alt()));
    assert!(!c.show_zoom_instruction());
    assert!(!c.hide_zoom_instruction(ticket));
}

#[test]
fn test_move_after_scroll_zoom_returns_to_idle() {
    let mut c = ready_controller();
    c.set_series_data(vec![line("a", &[0.0, 50.0, 100.0])]);
    c.set_series_metadata(metadata(&[SeriesMetadata::new("a")]));
    c.mouse_enter(None);
    c.wheel(&WheelInput::pixels(50.0, 50.0, 0.0, 10.0).with_modifiers(Modifiers::alt()));
    assert_eq!(c.state(), InteractionState::ScrollZooming);

    assert_eq!(c.mouse_move(&PointerInput::at(48.0, 50.0)), None);
    assert_eq!(c.state(), InteractionState::None);
    assert_eq!(c.cursored_data().len(), 1);
    assert!(c.tooltip_attached());
}

#[test]
fn test_alt_wheel_without_inputs_still_prevents_default() {
    let mut c = InteractionController::default();
    c.view_ready();
    let outcome = c.wheel(&WheelInput::pixels(0.0, 0.0, 0.0, 1.0).with_modifiers(Modifiers::alt()));
    assert_eq!(outcome, WheelOutcome::Zoom { event: None });
    assert!(outcome.prevents_default());
    assert_eq!(c.state(), InteractionState::None);
}

// --- Enter / leave / double click ---

#[test]
fn test_mouse_leave_forces_idle_and_detaches() {
    for shift in [false, true] {
        let mut c = ready_controller();
        c.set_series_data(vec![line("a", &[0.0, 50.0, 100.0])]);
        c.set_series_metadata(metadata(&[SeriesMetadata::new("a")]));
        c.mouse_enter(Some(PixelPoint::new(40.0, 40.0)));
        assert!(c.tooltip_attached());

        let modifiers = if shift { Modifiers::shift() } else { Modifiers::default() };
        c.mouse_down(&PointerInput::at(40.0, 40.0).with_modifiers(modifiers));
        assert_ne!(c.state(), InteractionState::None);

        c.mouse_leave();
        assert_eq!(c.state(), InteractionState::None);
        assert!(!c.tooltip_attached());
        assert!(!c.is_cursor_inside());
        // The last cursor position is kept, only the attachment goes away.
        assert_eq!(c.cursor_x_location(), Some(40.0));
        assert_eq!(c.cursored_data().len(), 1);
    }
}

#[test]
fn test_leave_during_drag_zoom_drops_the_box() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    c.mouse_move(&PointerInput::at(50.0, 40.0));
    c.mouse_leave();
    assert_eq!(c.mouse_up(&PointerInput::at(50.0, 40.0)), None);
}

#[test]
fn test_double_click_resets() {
    let mut c = ready_controller();
    c.mouse_down(&PointerInput::at(10.0, 10.0));
    assert_eq!(c.double_click(), Some(InteractionEvent::ViewExtentReset));
    assert_eq!(c.state(), InteractionState::None);
}

// --- Lifecycle ---

#[test]
fn test_events_before_ready_are_ignored() {
    let mut c = InteractionController::default();
    assert_eq!(c.lifecycle(), Lifecycle::Pending);
    c.mouse_down(&PointerInput::at(1.0, 1.0));
    assert_eq!(c.state(), InteractionState::None);
    assert_eq!(c.double_click(), None);
}

#[test]
fn test_teardown_detaches_everything() {
    let mut c = ready_controller();
    let WheelOutcome::ShowInstruction(ticket) = c.wheel(&plain_wheel()) else {
        panic!("expected instruction");
    };
    c.mouse_down(&PointerInput::at(10.0, 10.0).with_modifiers(Modifiers::shift()));
    c.teardown();

    assert_eq!(c.lifecycle(), Lifecycle::TornDown);
    assert_eq!(c.state(), InteractionState::None);
    assert!(!c.hide_zoom_instruction(ticket), "timers must not fire after teardown");
    assert_eq!(c.mouse_move(&PointerInput::at(20.0, 10.0).with_movement(10.0, 0.0)), None);
    assert_eq!(c.double_click(), None);
    assert_eq!(
        c.wheel(&WheelInput::pixels(0.0, 0.0, 0.0, 1.0).with_modifiers(Modifiers::alt())),
        WheelOutcome::Ignored
    );

    c.view_ready();
    assert_eq!(c.lifecycle(), Lifecycle::TornDown);
}
