pub mod form_entry;
pub mod help;
pub mod submissions;
