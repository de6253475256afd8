// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH};
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    CommandBar, CommandItem, Dialog, DialogKind, InputPurpose, SelectionList, StatusBar, TitleBar,
    WarningScreen,
};
