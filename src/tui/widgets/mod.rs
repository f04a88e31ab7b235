pub mod field_rows;
pub mod status_bar;

pub use field_rows::{FieldRow, draw_field_rows};
pub use status_bar::{StatusBarContext, draw_status_bar};
