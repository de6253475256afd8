// Core Layer
pub mod actions;
