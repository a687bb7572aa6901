// Module exports for models

pub mod calendar_date;
pub mod range;
pub mod settings;
pub mod view_cursor;
