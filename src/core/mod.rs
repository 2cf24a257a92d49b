pub mod actions;
pub mod data;
pub mod flight;
pub mod fractals;
pub mod palette;
