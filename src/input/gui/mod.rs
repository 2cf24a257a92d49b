//! Windowed host: winit for the window and events, pixels for the
//! framebuffer, egui for the help overlay.

pub mod app;
pub mod commands;
pub mod keymap;
