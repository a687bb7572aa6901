mod app;
pub mod drag;
pub mod events;
pub mod picker;
pub mod popover;
pub mod theme;
pub mod views;

pub use app::RangePickerApp;
pub use picker::{DateRangePicker, DateRangePickerState, PickerOutput};
