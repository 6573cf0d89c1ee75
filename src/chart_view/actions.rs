use super::InteractionView;
use gpui::*;

actions!(gpui_chart_interaction, [ResetView]);

impl InteractionView {
    /// Keyboard counterpart of double-clicking the chart.
    pub(super) fn handle_reset_view(
        &mut self,
        _: &ResetView,
        _win: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let reset = self.controller.double_click();
        self.emit_event(reset, cx);
    }
}
