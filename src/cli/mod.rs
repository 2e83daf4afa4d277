//! CLI Interface: menus and terminal rendering
//!
//! # Components
//! - `display.rs`: colored drill transcript rendering
//! - `menu.rs`: stdin menus (practice mode, device pick, round pause)

pub mod display;
pub mod menu;

pub use display::Display;
pub use menu::PracticeMode;
