// Utilities
pub mod error;
pub mod formatter;
pub mod glob;
pub mod path_display;
