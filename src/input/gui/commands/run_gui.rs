use std::error::Error;

use tracing::info;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::controllers::interactive::controller::ExplorerController;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::core::data::surface::SurfaceSize;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and blocks until it is closed.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let controller =
            ExplorerController::new(self.config, SurfaceSize::new(size.width, size.height))?;
        let presenter = PixelsPresenter::new(window, controller.frame().dims())?;

        info!(
            width = size.width,
            height = size.height,
            "window opened"
        );

        GuiApp::new(window, &event_loop, presenter, controller).run(event_loop)?;

        Ok(())
    }
}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}
