use std::path::Path;

use tracing::info;

use crate::controllers::interactive::controller::ExplorerController;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::ExplorerError;
use crate::controllers::interactive::flight::scheduler::TickOutcome;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::surface::SurfaceSize;
use crate::core::flight::controls::{Intent, PointerTarget};
use crate::presenters::memory::recording::RecordingPresenter;

/// Upper bound on settling ticks; a 64 pixel block settles in 7.
const SETTLE_TICK_LIMIT: usize = 16;

/// Flies the explorer without a window: holds the pointer down on a target
/// for a number of ticks, releases it, lets detail settle and keeps the
/// final frame for writing to disk.
pub struct FlightSnapshotController<P: FilePresenterPort> {
    presenter: P,
    explorer: ExplorerController,
    recorder: RecordingPresenter,
}

impl<P: FilePresenterPort> FlightSnapshotController<P> {
    pub fn new(
        presenter: P,
        config: ExplorerConfig,
        surface: SurfaceSize,
    ) -> Result<Self, ExplorerError> {
        Ok(Self {
            presenter,
            explorer: ExplorerController::with_seed(config, surface, 0)?,
            recorder: RecordingPresenter::new(),
        })
    }

    /// Returns the number of frames rendered along the way.
    pub fn fly(&mut self, target: PointerTarget, zoom_ticks: usize) -> usize {
        let dims = self.explorer.frame().dims();
        info!(
            width = dims.width,
            height = dims.height,
            u = target.u(),
            v = target.v(),
            zoom_ticks,
            "flight started"
        );

        if self.explorer.start() {
            self.settle();
        }

        let _ = self.explorer.apply(Intent::PointerZoom(target));
        for _ in 0..zoom_ticks {
            let _ = self.explorer.tick(&mut self.recorder);
        }

        let _ = self.explorer.apply(Intent::PointerRelease);
        self.settle();

        let status = self.explorer.status();
        info!(
            frames = self.recorder.frame_count(),
            center_re = status.center.real,
            center_im = status.center.imag,
            half_width = status.half_width,
            max_iterations = status.max_iterations,
            "flight finished"
        );

        self.recorder.frame_count()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.presenter.present(self.explorer.frame(), &filepath)?;
        info!(path = %filepath.as_ref().display(), "frame written");

        Ok(())
    }

    #[must_use]
    pub fn explorer(&self) -> &ExplorerController {
        &self.explorer
    }

    #[must_use]
    pub fn recorder(&self) -> &RecordingPresenter {
        &self.recorder
    }

    fn settle(&mut self) {
        for _ in 0..SETTLE_TICK_LIMIT {
            if self.explorer.tick(&mut self.recorder) == TickOutcome::Idle {
                return;
            }
        }
    }
}
