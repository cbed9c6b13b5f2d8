//! UI components.

pub mod blueprint;
pub mod documentation;
pub mod screens;
pub mod shell;
