//! Shared components for the converter UI.

pub mod controls;
pub mod dropdown;
pub mod status_line;
pub mod theme_toggle;
