//! Application services
//!
//! This module coordinates loading, the registries and the interactive menu.

pub mod app;
pub mod menu;

pub use app::Application;
pub use menu::MenuChoice;
