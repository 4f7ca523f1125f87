pub mod catalog;
pub mod nav;
pub mod theme;

pub use catalog::{ProjectRecord, RESUME_URL};
pub use nav::{MenuState, NavMenu, Section, is_mobile};

#[cfg(feature = "gui")]
pub mod gui;
