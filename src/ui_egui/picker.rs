//! Host-facing date range picker.
//!
//! The host owns the committed range and passes it in each frame; the picker
//! never mutates it. Completed gestures and clears are reported through the
//! `on_change` callback (and `PickerOutput::changed`), exactly once each.
//! Navigation, open/close and aborted drags never report a change.

use egui::{Id, Order, RichText};

use super::events::PickerEvent;
use super::popover::{ListenerRegistry, PopoverController};
use super::theme::{DayCellPalette, PickerTheme};
use super::views::DualMonthView;
use crate::models::calendar_date::CalendarDate;
use crate::models::range::CommittedRange;
use crate::models::view_cursor::ViewCursor;
use crate::services::formatter::RangeFormatter;

/// Widget-private state kept by the host between frames.
///
/// The drag session and displayed months live here and are not exposed as
/// mutable state; hosts only feed events and read the outcome.
#[derive(Debug)]
pub struct DateRangePickerState {
    popover: PopoverController,
    view: DualMonthView,
    remember_view: bool,
    opened_before: bool,
    /// Day cells drawn in the last frame the panel was open
    day_cells: Vec<(CalendarDate, egui::Rect)>,
}

impl Default for DateRangePickerState {
    fn default() -> Self {
        Self::new(ListenerRegistry::new())
    }
}

impl DateRangePickerState {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            popover: PopoverController::new(registry),
            view: DualMonthView::new(ViewCursor::from_date(CalendarDate::today())),
            remember_view: true,
            opened_before: false,
            day_cells: Vec::new(),
        }
    }

    /// Keep the displayed months across reopen (default) or re-anchor them on
    /// the committed start every time the panel opens.
    pub fn with_remember_view(mut self, remember_view: bool) -> Self {
        self.remember_view = remember_view;
        self
    }

    pub fn set_remember_view(&mut self, remember_view: bool) {
        self.remember_view = remember_view;
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn view(&self) -> &DualMonthView {
        &self.view
    }

    pub fn registry(&self) -> &ListenerRegistry {
        self.popover.registry()
    }

    /// Record where the trigger and panel were drawn, for outside-click
    /// detection. Has no effect while closed.
    pub fn set_bounds(&mut self, bounds: egui::Rect) {
        self.popover.set_bounds(bounds);
    }

    /// Where `date` was drawn in the last frame, if it is on screen.
    pub fn day_cell_rect(&self, date: CalendarDate) -> Option<egui::Rect> {
        self.day_cells
            .iter()
            .find(|(day, _)| *day == date)
            .map(|(_, rect)| *rect)
    }

    fn set_layout(&mut self, bounds: egui::Rect, day_cells: Vec<(CalendarDate, egui::Rect)>) {
        self.popover.set_bounds(bounds);
        self.day_cells = day_cells;
    }

    /// Apply one event. Returns the new range when the host must be told.
    ///
    /// Pointer events over days are only honoured while the panel is open.
    pub fn handle(&mut self, event: PickerEvent, value: &CommittedRange) -> Option<CommittedRange> {
        match event {
            PickerEvent::Toggle => {
                if self.is_open() {
                    self.close();
                } else {
                    self.open(value);
                }
                None
            }
            PickerEvent::Interaction(pos) => {
                if self.popover.handle_interaction(pos) {
                    self.view.cancel_drag();
                    self.day_cells.clear();
                }
                None
            }
            PickerEvent::Escape => {
                self.close();
                None
            }
            PickerEvent::Press(day) if self.is_open() => {
                self.view.press(day);
                None
            }
            PickerEvent::HoverEnter(day) if self.is_open() => {
                self.view.hover_enter(day);
                None
            }
            PickerEvent::Release if self.is_open() => {
                let committed = self.view.release()?;
                log::info!(
                    "Committed range {:?} .. {:?}",
                    committed.start.map(|d| d.to_string()),
                    committed.end.map(|d| d.to_string())
                );
                Some(committed)
            }
            PickerEvent::PointerLeft => {
                self.view.pointer_left();
                None
            }
            PickerEvent::Clear => Some(self.view.clear()),
            PickerEvent::PreviousMonth => {
                self.view.previous();
                None
            }
            PickerEvent::NextMonth => {
                self.view.next();
                None
            }
            PickerEvent::PreviousYear => {
                self.view.previous_year();
                None
            }
            PickerEvent::NextYear => {
                self.view.next_year();
                None
            }
            PickerEvent::Press(_) | PickerEvent::HoverEnter(_) | PickerEvent::Release => {
                log::trace!("Ignoring {:?} while closed", event);
                None
            }
        }
    }

    fn open(&mut self, value: &CommittedRange) {
        if !(self.remember_view && self.opened_before) {
            let anchor = value.start.or(value.end).unwrap_or_else(CalendarDate::today);
            self.view.set_cursor(ViewCursor::from_date(anchor));
        }
        self.opened_before = true;
        self.popover.open();
    }

    /// Close the panel, discarding any unreleased drag.
    pub fn close(&mut self) {
        self.view.cancel_drag();
        self.popover.close();
        self.day_cells.clear();
    }
}

/// Result of showing the picker for one frame.
pub struct PickerOutput {
    /// Response of the trigger button
    pub response: egui::Response,
    /// New range to store, if the user committed or cleared this frame
    pub changed: Option<CommittedRange>,
}

/// Trigger button plus popover calendar for choosing a date range.
///
/// # Examples
/// ```no_run
/// use date_range_picker::models::range::CommittedRange;
/// use date_range_picker::ui_egui::picker::{DateRangePicker, DateRangePickerState};
///
/// fn ui(ui: &mut egui::Ui, state: &mut DateRangePickerState, range: &mut CommittedRange) {
///     let current = *range;
///     DateRangePicker::new(state, &current)
///         .placeholder("Any dates")
///         .on_change(|next| *range = next)
///         .show(ui);
/// }
/// ```
pub struct DateRangePicker<'a> {
    state: &'a mut DateRangePickerState,
    value: &'a CommittedRange,
    placeholder: String,
    formatter: RangeFormatter,
    theme: PickerTheme,
    id_source: Id,
    on_change: Option<Box<dyn FnMut(CommittedRange) + 'a>>,
}

impl<'a> DateRangePicker<'a> {
    pub fn new(state: &'a mut DateRangePickerState, value: &'a CommittedRange) -> Self {
        Self {
            state,
            value,
            placeholder: "Select date range".to_string(),
            formatter: RangeFormatter::default(),
            theme: PickerTheme::default(),
            id_source: Id::new("date_range_picker"),
            on_change: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn formatter(mut self, formatter: RangeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn theme(mut self, theme: PickerTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Distinguish several pickers in the same `Ui`.
    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id_source = Id::new(id_source);
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(CommittedRange) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> PickerOutput {
        let mut events = Vec::new();

        let label = self.formatter.format(self.value, &self.placeholder);
        let text = if self.value.is_empty() {
            RichText::new(format!("📅 {}", label)).color(self.theme.text_secondary)
        } else {
            RichText::new(format!("📅 {}", label))
        };
        let response = ui.button(text);
        if response.clicked() {
            events.push(PickerEvent::Toggle);
        }

        if self.state.is_open() {
            let palette = DayCellPalette::from_theme(&self.theme);
            let area_id = ui.make_persistent_id(self.id_source).with("popover");
            let value = self.value;
            let view = &self.state.view;

            let area = egui::Area::new(area_id)
                .order(Order::Foreground)
                .fixed_pos(response.rect.left_bottom() + egui::vec2(0.0, 4.0))
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(self.theme.panel_background)
                        .show(ui, |ui| {
                            let day_cells = view.show(ui, value, &palette, &mut events);
                            ui.separator();
                            ui.horizontal(|ui| {
                                if ui.button("Clear").clicked() {
                                    events.push(PickerEvent::Clear);
                                }
                                if ui.button("Done").clicked() {
                                    events.push(PickerEvent::Toggle);
                                }
                            });
                            day_cells
                        })
                        .inner
                });

            self.state
                .set_layout(response.rect.union(area.response.rect), area.inner);

            let (pressed_at, escape) = ui.input(|i| {
                (
                    i.pointer.any_pressed().then(|| i.pointer.interact_pos()).flatten(),
                    i.key_pressed(egui::Key::Escape),
                )
            });
            if let Some(pos) = pressed_at {
                events.push(PickerEvent::Interaction(pos));
            }
            if escape {
                events.push(PickerEvent::Escape);
            }
        }

        let mut changed = None;
        for event in events {
            if let Some(next) = self.state.handle(event, self.value) {
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(next);
                }
                changed = Some(next);
            }
        }

        PickerOutput { response, changed }
    }
}

impl egui::Widget for DateRangePicker<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.show(ui).response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_open_anchors_view_on_committed_start() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::between(date(2024, 1, 15), date(2024, 1, 20));

        state.handle(PickerEvent::Toggle, &value);
        assert!(state.is_open());
        assert_eq!(state.view().cursor(), ViewCursor::new(2024, 0));
    }

    #[test]
    fn test_remember_view_across_reopen() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::single(date(2024, 1, 15));

        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::NextMonth, &value);
        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::Toggle, &value);
        assert_eq!(state.view().cursor(), ViewCursor::new(2024, 1));
    }

    #[test]
    fn test_reanchor_when_not_remembering_view() {
        let mut state = DateRangePickerState::default().with_remember_view(false);
        let value = CommittedRange::single(date(2024, 1, 15));

        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::NextMonth, &value);
        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::Toggle, &value);
        assert_eq!(state.view().cursor(), ViewCursor::new(2024, 0));
    }

    #[test]
    fn test_day_events_ignored_while_closed() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::empty();

        assert_eq!(state.handle(PickerEvent::Press(date(2024, 3, 1)), &value), None);
        assert_eq!(state.handle(PickerEvent::Release, &value), None);
        assert!(!state.view().drag().is_active());
    }

    #[test]
    fn test_close_discards_drag() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::empty();

        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::Press(date(2024, 3, 1)), &value);
        state.handle(PickerEvent::Escape, &value);

        assert!(!state.is_open());
        assert!(!state.view().drag().is_active());
        assert_eq!(state.registry().active_count(), 0);
    }

    #[test]
    fn test_interaction_before_bounds_keeps_open() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::empty();

        state.handle(PickerEvent::Toggle, &value);
        state.handle(PickerEvent::Interaction(pos2(900.0, 900.0)), &value);
        assert!(state.is_open());
    }

    #[test]
    fn test_clear_reports_empty_range() {
        let mut state = DateRangePickerState::default();
        let value = CommittedRange::single(date(2024, 3, 1));
        assert_eq!(
            state.handle(PickerEvent::Clear, &value),
            Some(CommittedRange::empty())
        );
    }
}
