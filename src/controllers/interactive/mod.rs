//! Interactive explorer: owns the view, motion, detail and palette state and
//! drives one render per tick for whichever host schedules it.
//!
//! Hosts talk to [`ExplorerController`] through intents and resizes, present
//! frames through [`FramePresenterPort`], and keep calling `tick` while it
//! returns [`TickOutcome::Continue`].

pub mod controller;
pub mod data;
pub mod errors;
pub mod flight;
pub mod ports;

pub use controller::ExplorerController;
pub use data::explorer_config::ExplorerConfig;
pub use errors::ExplorerError;
pub use flight::scheduler::{TickOutcome, TickScheduler};
pub use ports::presenter::FramePresenterPort;
