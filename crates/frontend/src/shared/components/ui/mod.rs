pub mod badge;
pub mod chips;
pub mod select;

pub use badge::{Badge, StatusBadge};
pub use chips::{ChipToggleGroup, FilterChip, FilterChips};
pub use select::Select;
