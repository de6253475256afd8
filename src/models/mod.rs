// Data Models
pub mod combine;
pub mod file_filter;
pub mod selection_set;

pub use combine::{CombineReport, SkipReason, SkippedFile};
pub use file_filter::{FileFilter, FILTER_PRESETS};
pub use selection_set::SelectionSet;
