mod day_cell;
pub mod dual_month_view;

pub use dual_month_view::{DayHighlight, DualMonthView};
