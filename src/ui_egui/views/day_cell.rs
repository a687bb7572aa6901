//! Day cell rendering for the dual-month view.

use egui::{Align2, FontId, Rect, Sense, Stroke, Vec2};

use super::dual_month_view::DayHighlight;
use crate::models::calendar_date::CalendarDate;
use crate::ui_egui::theme::DayCellPalette;

pub(crate) const CELL_SIZE: Vec2 = Vec2::new(30.0, 26.0);
const CELL_ROUNDING: f32 = 4.0;

#[derive(Clone, Copy, Debug)]
pub(crate) struct DayCellState {
    pub date: CalendarDate,
    pub highlight: DayHighlight,
    /// Highlight comes from a live drag rather than the committed range
    pub is_preview: bool,
    pub is_today: bool,
}

/// Empty cell before day 1.
pub(crate) fn render_blank_cell(ui: &mut egui::Ui) {
    ui.allocate_exact_size(CELL_SIZE, Sense::hover());
}

/// Paint one day and return its rect for pointer hit-testing.
pub(crate) fn render_day_cell(
    ui: &mut egui::Ui,
    state: DayCellState,
    palette: &DayCellPalette,
) -> Rect {
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());

    let bg_color = match (state.highlight, state.is_preview) {
        (DayHighlight::Endpoint, false) => palette.endpoint_bg,
        (DayHighlight::Endpoint, true) => palette.preview_endpoint_bg,
        (DayHighlight::InRange, false) => palette.range_bg,
        (DayHighlight::InRange, true) => palette.preview_range_bg,
        (DayHighlight::None, _) if state.date.is_weekend() => palette.weekend_bg,
        (DayHighlight::None, _) => palette.regular_bg,
    };
    ui.painter().rect_filled(rect, CELL_ROUNDING, bg_color);

    if state.is_today {
        ui.painter()
            .rect_stroke(rect.shrink(0.5), CELL_ROUNDING, Stroke::new(1.5, palette.today_border));
    } else if response.hovered() {
        ui.painter()
            .rect_stroke(rect.shrink(0.5), CELL_ROUNDING, Stroke::new(1.0, palette.hover_border));
    }

    let text_color = if state.highlight == DayHighlight::Endpoint {
        palette.endpoint_text
    } else {
        palette.text
    };
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        state.date.day().to_string(),
        FontId::proportional(13.0),
        text_color,
    );

    rect
}
