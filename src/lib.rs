pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::cli::flight_snapshot::FlightSnapshotController;
pub use controllers::interactive::{
    ExplorerConfig, ExplorerController, ExplorerError, FramePresenterPort, TickOutcome,
};
pub use crate::core::data::surface::SurfaceSize;
pub use crate::core::flight::controls::{Intent, PointerTarget};
pub use input::translator::InputTranslator;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::memory::recording::RecordingPresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
