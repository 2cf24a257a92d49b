//! Input adapters for the explorer.
//!
//! `keys` and `translator` are host independent; `gui` maps winit events onto
//! them.

pub mod keys;
pub mod translator;

#[cfg(feature = "gui")]
pub mod gui;
