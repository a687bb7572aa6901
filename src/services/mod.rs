// Service module exports

pub mod calendar_month;
pub mod formatter;
pub mod range_geometry;
pub mod settings;
