// Picker input events
//
// The egui layer translates raw pointer/keyboard input into these events and
// the picker state consumes them in delivery order.

use egui::Pos2;

use crate::models::calendar_date::CalendarDate;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerEvent {
    /// Trigger clicked
    Toggle,
    /// Primary button pressed over a day cell
    Press(CalendarDate),
    /// Pointer entered a day cell
    HoverEnter(CalendarDate),
    /// Primary button released anywhere inside the panel
    Release,
    /// Pointer left the panel with the button still held
    PointerLeft,
    Clear,
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    /// Pointer pressed somewhere on the page
    Interaction(Pos2),
    /// Escape pressed while the panel is open
    Escape,
}
