use egui::{RichText, Vec2};

use super::day_cell::{self, DayCellState};
use crate::models::calendar_date::CalendarDate;
use crate::models::range::CommittedRange;
use crate::models::view_cursor::ViewCursor;
use crate::services::calendar_month::{self, CalendarMonth, WEEKDAY_LABELS};
use crate::services::range_geometry;
use crate::ui_egui::drag::DragSelectionState;
use crate::ui_egui::events::PickerEvent;
use crate::ui_egui::theme::DayCellPalette;

const GRID_SPACING: f32 = 2.0;
const MONTH_GAP: f32 = 16.0;

/// How a day cell is highlighted against the active range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayHighlight {
    None,
    /// Inside the range but not one of its bounds
    InRange,
    /// Equal to a bound of the range
    Endpoint,
}

/// Two adjacent months plus the drag gesture running across them.
///
/// The left month is the view cursor; the right month is always its
/// successor. A drag may start in one month and end in the other.
#[derive(Debug, Clone, PartialEq)]
pub struct DualMonthView {
    cursor: ViewCursor,
    drag: DragSelectionState,
}

impl DualMonthView {
    pub fn new(cursor: ViewCursor) -> Self {
        Self {
            cursor,
            drag: DragSelectionState::Idle,
        }
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: ViewCursor) {
        self.cursor = cursor;
    }

    /// The left and right months, in display order.
    pub fn months(&self) -> [CalendarMonth; 2] {
        [
            calendar_month::generate_for(self.cursor),
            calendar_month::generate_for(self.cursor.successor()),
        ]
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.predecessor();
    }

    pub fn next(&mut self) {
        self.cursor = self.cursor.successor();
    }

    pub fn previous_year(&mut self) {
        self.cursor = self.cursor.shift(-12);
    }

    pub fn next_year(&mut self) {
        self.cursor = self.cursor.shift(12);
    }

    pub fn drag(&self) -> &DragSelectionState {
        &self.drag
    }

    pub fn press(&mut self, day: CalendarDate) {
        self.drag.press(day);
    }

    pub fn hover_enter(&mut self, day: CalendarDate) {
        self.drag.hover_enter(day);
    }

    /// Finish the gesture, returning the range to commit.
    pub fn release(&mut self) -> Option<CommittedRange> {
        self.drag.release()
    }

    pub fn pointer_left(&mut self) -> bool {
        self.drag.pointer_left()
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Discard any drag and return the empty range for the host to commit.
    pub fn clear(&mut self) -> CommittedRange {
        self.drag.cancel();
        log::debug!("Selection cleared");
        CommittedRange::empty()
    }

    /// Highlight for `day`. A live drag replaces the committed range rather
    /// than blending with it.
    pub fn highlight(&self, day: CalendarDate, committed: &CommittedRange) -> DayHighlight {
        let (a, b) = match self.drag.session() {
            Some(session) => (Some(session.anchor), Some(session.cursor)),
            None => (committed.start, committed.end),
        };

        if range_geometry::is_endpoint(day, &[a, b]) {
            DayHighlight::Endpoint
        } else if range_geometry::contains(day, a, b) {
            DayHighlight::InRange
        } else {
            DayHighlight::None
        }
    }

    /// Render both months and translate pointer input into events.
    ///
    /// Returns every day cell drawn this frame with its screen rect.
    pub(crate) fn show(
        &self,
        ui: &mut egui::Ui,
        committed: &CommittedRange,
        palette: &DayCellPalette,
        events: &mut Vec<PickerEvent>,
    ) -> Vec<(CalendarDate, egui::Rect)> {
        let (pressed, released, hover_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.hover_pos(),
            )
        });
        let today = CalendarDate::today();
        let dragging = self.drag.session();
        let mut pressed_on_day = false;
        let mut day_cells = Vec::with_capacity(62);

        let panel = ui.vertical(|ui| {
            self.show_header(ui, events);
            ui.add_space(4.0);

            ui.horizontal_top(|ui| {
                for (index, month) in self.months().iter().enumerate() {
                    if index > 0 {
                        ui.add_space(MONTH_GAP);
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(month.cursor.label()).strong());
                        egui::Grid::new(("range_picker_month", index))
                            .num_columns(7)
                            .spacing(Vec2::splat(GRID_SPACING))
                            .show(ui, |ui| {
                                for label in WEEKDAY_LABELS {
                                    ui.label(
                                        RichText::new(label).small().color(palette.header_text),
                                    );
                                }
                                ui.end_row();

                                let mut cells = month.cells();
                                for _ in 0..month.week_rows() {
                                    for cell in cells.by_ref().take(7) {
                                        let Some(day) = cell else {
                                            day_cell::render_blank_cell(ui);
                                            continue;
                                        };
                                        let state = DayCellState {
                                            date: day,
                                            highlight: self.highlight(day, committed),
                                            is_preview: dragging.is_some(),
                                            is_today: day == today,
                                        };
                                        let rect = day_cell::render_day_cell(ui, state, palette);
                                        day_cells.push((day, rect));

                                        let over = hover_pos.is_some_and(|pos| rect.contains(pos));
                                        if over && pressed {
                                            pressed_on_day = true;
                                            events.push(PickerEvent::Press(day));
                                        } else if over
                                            && dragging.is_some_and(|session| session.cursor != day)
                                        {
                                            events.push(PickerEvent::HoverEnter(day));
                                        }
                                    }
                                    ui.end_row();
                                }
                            });
                    });
                }
            });
        });

        let rect = panel.response.rect;
        let inside = hover_pos.is_some_and(|pos| rect.contains(pos));
        if dragging.is_some() && !inside {
            events.push(PickerEvent::PointerLeft);
        } else if released && (dragging.is_some() || pressed_on_day) {
            events.push(PickerEvent::Release);
        }

        day_cells
    }

    fn show_header(&self, ui: &mut egui::Ui, events: &mut Vec<PickerEvent>) {
        ui.horizontal(|ui| {
            if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                events.push(PickerEvent::PreviousYear);
            }
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                events.push(PickerEvent::PreviousMonth);
            }
            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                events.push(PickerEvent::NextMonth);
            }
            if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                events.push(PickerEvent::NextYear);
            }
        });
    }
}
