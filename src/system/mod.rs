// System Layer
pub mod combiner;
pub mod filesystem;
pub mod picker;

pub use combiner::Combiner;
pub use filesystem::FileSystem;
pub use picker::FilePicker;
