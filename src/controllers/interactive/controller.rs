use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::ExplorerError;
use crate::controllers::interactive::flight::scheduler::{TickOutcome, TickScheduler};
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::flight::controls::{Axis, Intent, ZoomDirection};
use crate::core::flight::detail::DetailLevel;
use crate::core::flight::motion::{MotionState, pan_velocity, steer_pointer_zoom, step_motion};
use crate::core::flight::status::{FlightPhase, FlightStatus, FlightWarning};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::palette::palette::Palette;
use crate::core::palette::seeds::{rainbow_seeds, random_seeds};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Owns the whole explorer state and advances it one tick at a time.
///
/// The host feeds intents through [`apply`](Self::apply), resizes through
/// [`resize`](Self::resize), and calls [`tick`](Self::tick) whenever either of
/// them (or the previous tick) asks for one.
pub struct ExplorerController {
    config: ExplorerConfig,
    viewport: Viewport,
    motion: MotionState,
    detail: DetailLevel,
    palette: Palette,
    frame: FrameBuffer,
    scheduler: TickScheduler,
    help_visible: bool,
    status: FlightStatus,
    rng: StdRng,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig, surface: SurfaceSize) -> Result<Self, ExplorerError> {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a reproducible recolor sequence.
    pub fn with_seed(
        config: ExplorerConfig,
        surface: SurfaceSize,
        seed: u64,
    ) -> Result<Self, ExplorerError> {
        Self::with_rng(config, surface, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: ExplorerConfig,
        surface: SurfaceSize,
        rng: StdRng,
    ) -> Result<Self, ExplorerError> {
        let config = config.validated();
        let dims = surface.align(config.max_buffer_width, config.limits.max_pixel_block);
        let viewport = config.mandelbrot.default_viewport(dims)?;
        let palette = Palette::build(
            &rainbow_seeds(config.mandelbrot.seed_hue_count),
            config.mandelbrot.total_colours,
        )?;

        debug!(
            width = dims.width,
            height = dims.height,
            colours = palette.len(),
            "explorer created"
        );

        let mut controller = Self {
            config,
            viewport,
            motion: MotionState::default(),
            detail: DetailLevel::new(config.limits.max_pixel_block),
            palette,
            frame: FrameBuffer::new(dims),
            scheduler: TickScheduler::new(),
            help_visible: true,
            status: FlightStatus::default(),
            rng,
        };
        controller.status = controller.snapshot(FlightPhase::Idle);

        Ok(controller)
    }

    /// Requests the initial frame. Returns `true` if the host must schedule a tick.
    pub fn start(&mut self) -> bool {
        self.scheduler.request()
    }

    /// Replaces the frame buffer for a new surface size and restarts the
    /// render loop. Returns `true` if the host must schedule a tick.
    pub fn resize(&mut self, surface: SurfaceSize) -> bool {
        let dims = surface.align(
            self.config.max_buffer_width,
            self.config.limits.max_pixel_block,
        );

        debug!(
            surface_width = surface.width,
            surface_height = surface.height,
            width = dims.width,
            height = dims.height,
            "resize"
        );

        if let Err(err) = self.viewport.set_dims(dims) {
            warn!(error = %err, "resize ignored");
            return false;
        }
        self.frame = FrameBuffer::new(dims);

        self.scheduler.request()
    }

    /// Applies one intent. Returns `true` if the view changed while the
    /// render loop was idle, meaning the host must schedule a tick.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let mut changed = match intent {
            Intent::Pan { axis, direction } => {
                let velocity = pan_velocity(&self.viewport, axis, direction, &self.config.limits);
                self.set_velocity(axis, velocity)
            }
            Intent::StopPan { axis } => self.set_velocity(axis, 0.0),
            Intent::Zoom(ZoomDirection::In) => self.set_zoom(self.config.limits.zoom_in_factor),
            Intent::Zoom(ZoomDirection::Out) => self.set_zoom(self.config.limits.zoom_out_factor),
            Intent::StopZoom => self.set_zoom(1.0),
            Intent::PointerZoom(target) => {
                let before = self.motion;
                self.motion.pointer_zoom_active = true;
                self.motion.pointer_target = target;
                steer_pointer_zoom(&mut self.motion, &self.viewport, &self.config.limits);
                self.motion != before
            }
            Intent::PointerRelease => {
                let before = self.motion;
                self.motion.pointer_zoom_active = false;
                self.motion.stop();
                self.motion != before
            }
            Intent::Reset => self.reset_view(),
            Intent::Recolor => self.recolor(),
            Intent::ToggleHelp => {
                self.help_visible = !self.help_visible;
                true
            }
        };

        if intent.hides_help() && self.help_visible {
            self.help_visible = false;
            changed = true;
        }

        if !changed {
            return false;
        }

        debug!(?intent, help_visible = self.help_visible, "intent applied");

        self.scheduler.request()
    }

    /// Renders and presents one frame, then advances motion and detail.
    pub fn tick<P: FramePresenterPort>(&mut self, presenter: &mut P) -> TickOutcome {
        let phase = self.phase();
        let pixel_block = self.detail.pixel_block();
        let max_iterations = self.config.mandelbrot.max_iterations(self.viewport.half_width());

        let started = Instant::now();
        let rendered = self.render(pixel_block, max_iterations);
        let duration = started.elapsed();

        self.status = self.snapshot(phase);
        self.status.last_frame_duration = Some(duration);

        if let Err(message) = rendered {
            warn!(pixel_block, max_iterations, error = %message, "render failed");
            self.status.last_warning = Some(FlightWarning::RenderFailed);
        }

        trace!(
            phase = phase.display_name(),
            pixel_block,
            max_iterations,
            duration_us = duration.as_micros() as u64,
            "tick"
        );

        presenter.present(&self.frame, &self.status);

        let outcome = self.advance();
        self.scheduler.finish(outcome);

        outcome
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    #[must_use]
    pub fn detail(&self) -> DetailLevel {
        self.detail
    }

    #[must_use]
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Status of the most recently presented frame.
    #[must_use]
    pub fn status(&self) -> &FlightStatus {
        &self.status
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_ticking()
    }

    fn render(&mut self, pixel_block: u32, max_iterations: u32) -> Result<(), String> {
        let algorithm = MandelbrotAlgorithm::new(max_iterations).map_err(|e| e.to_string())?;

        render_frame(
            &self.viewport,
            pixel_block,
            &algorithm,
            &self.palette,
            &mut self.frame,
        )
        .map_err(|e| e.to_string())
    }

    fn advance(&mut self) -> TickOutcome {
        steer_pointer_zoom(&mut self.motion, &self.viewport, &self.config.limits);

        if self.motion.is_active() {
            let report = step_motion(&self.motion, &mut self.viewport);

            if let Some(warning) = report.warning {
                warn!(
                    ?warning,
                    half_width = self.viewport.half_width(),
                    "motion step rejected"
                );
                self.status.last_warning = Some(warning);
            }

            if report.moved {
                self.detail.coarsen();
            }

            return TickOutcome::Continue;
        }

        if !self.detail.is_full() {
            self.detail.refine();
            return TickOutcome::Continue;
        }

        TickOutcome::Idle
    }

    fn phase(&self) -> FlightPhase {
        if self.motion.is_active() {
            FlightPhase::Moving
        } else if !self.detail.is_full() {
            FlightPhase::Settling
        } else {
            FlightPhase::Idle
        }
    }

    fn snapshot(&self, phase: FlightPhase) -> FlightStatus {
        FlightStatus {
            phase,
            pixel_block: self.detail.pixel_block(),
            max_iterations: self.config.mandelbrot.max_iterations(self.viewport.half_width()),
            center: self.viewport.center(),
            half_width: self.viewport.half_width(),
            help_visible: self.help_visible,
            last_frame_duration: None,
            last_warning: self.status.last_warning,
        }
    }

    fn set_velocity(&mut self, axis: Axis, velocity: f64) -> bool {
        let slot = &mut self.motion.velocity[axis.index()];
        let changed = *slot != velocity;
        *slot = velocity;

        changed
    }

    fn set_zoom(&mut self, factor: f64) -> bool {
        let changed = self.motion.zoom_factor != factor;
        self.motion.zoom_factor = factor;

        changed
    }

    fn reset_view(&mut self) -> bool {
        let defaults = &self.config.mandelbrot;

        if let Err(err) = self
            .viewport
            .reset(defaults.default_center, defaults.default_half_width)
        {
            warn!(error = %err, "reset rejected");
            return false;
        }

        self.motion = MotionState::default();
        self.help_visible = true;

        true
    }

    fn recolor(&mut self) -> bool {
        let seeds = random_seeds(self.config.mandelbrot.seed_hue_count, &mut self.rng);

        match Palette::build(&seeds, self.config.mandelbrot.total_colours) {
            Ok(palette) => {
                self.palette = palette;
                true
            }
            Err(err) => {
                warn!(error = %err, "recolor rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::flight::controls::{PanDirection, PointerTarget};

    #[derive(Default)]
    struct CountingPresenter {
        frames: usize,
        blocks: Vec<u32>,
        last_status: Option<FlightStatus>,
    }

    impl FramePresenterPort for CountingPresenter {
        fn present(&mut self, _frame: &FrameBuffer, status: &FlightStatus) {
            self.frames += 1;
            self.blocks.push(status.pixel_block);
            self.last_status = Some(status.clone());
        }
    }

    fn controller() -> ExplorerController {
        ExplorerController::with_seed(ExplorerConfig::default(), SurfaceSize::new(64, 48), 7)
            .unwrap()
    }

    fn run_until_idle(
        controller: &mut ExplorerController,
        presenter: &mut CountingPresenter,
    ) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if controller.tick(presenter) == TickOutcome::Idle {
                return ticks;
            }
            assert!(ticks < 100, "render loop never settled");
        }
    }

    #[test]
    fn test_new_controller_starts_at_default_view() {
        let controller = controller();

        assert_eq!(controller.viewport().center(), Complex::new(-0.5, 0.0));
        assert_eq!(controller.viewport().half_width(), 3.0);
        assert_eq!(controller.frame().dims(), controller.viewport().dims());
        assert!(controller.help_visible());
        assert!(!controller.motion().is_active());
        assert!(!controller.is_ticking());
    }

    #[test]
    fn test_buffer_is_aligned_to_max_block() {
        let controller =
            ExplorerController::with_seed(ExplorerConfig::default(), SurfaceSize::new(1023, 767), 1)
                .unwrap();
        let dims = controller.frame().dims();

        assert_eq!(dims.width, 800);
        assert!(dims.is_aligned_to(8));
    }

    #[test]
    fn test_start_schedules_once() {
        let mut controller = controller();

        assert!(controller.start());
        assert!(!controller.start());
    }

    #[test]
    fn test_idle_tick_renders_and_stops() {
        let mut controller = controller();
        let mut presenter = CountingPresenter::default();
        let _ = controller.start();

        let outcome = controller.tick(&mut presenter);

        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(presenter.frames, 1);
        assert!(!controller.is_ticking());
        assert!(controller.status().last_frame_duration.is_some());
    }

    #[test]
    fn test_pan_intent_requests_tick_only_when_idle() {
        let mut controller = controller();
        let pan = Intent::Pan {
            axis: Axis::Horizontal,
            direction: PanDirection::Positive,
        };

        assert!(controller.apply(pan));
        assert!(!controller.apply(Intent::Zoom(ZoomDirection::In)));
        assert!(controller.motion().is_active());
    }

    #[test]
    fn test_repeated_intent_is_not_a_change() {
        let mut controller = controller();
        let pan = Intent::Pan {
            axis: Axis::Vertical,
            direction: PanDirection::Negative,
        };
        let mut presenter = CountingPresenter::default();

        assert!(controller.apply(pan));
        let _ = controller.tick(&mut presenter);
        controller.scheduler.finish(TickOutcome::Idle);

        assert!(!controller.apply(pan));
    }

    #[test]
    fn test_moving_ticks_coarsen_detail() {
        let mut controller = controller();
        let mut presenter = CountingPresenter::default();
        let _ = controller.apply(Intent::Zoom(ZoomDirection::In));

        for _ in 0..5 {
            assert_eq!(controller.tick(&mut presenter), TickOutcome::Continue);
        }

        assert_eq!(presenter.blocks, vec![1, 2, 4, 8, 8]);
        assert_eq!(controller.detail().pixel_block(), 8);
        assert!(controller.viewport().half_width() < 3.0);
    }

    #[test]
    fn test_stopping_motion_settles_back_to_full_detail() {
        let mut controller = controller();
        let mut presenter = CountingPresenter::default();
        let _ = controller.apply(Intent::Zoom(ZoomDirection::Out));
        for _ in 0..4 {
            let _ = controller.tick(&mut presenter);
        }
        presenter.blocks.clear();

        let _ = controller.apply(Intent::StopZoom);
        let ticks = run_until_idle(&mut controller, &mut presenter);

        assert_eq!(ticks, 4);
        assert_eq!(presenter.blocks, vec![8, 4, 2, 1]);
        assert_eq!(
            presenter.last_status.map(|status| status.phase),
            Some(FlightPhase::Idle)
        );
    }

    #[test]
    fn test_reset_restores_default_view_and_help() {
        let mut controller = controller();
        let mut presenter = CountingPresenter::default();
        let _ = controller.apply(Intent::Zoom(ZoomDirection::In));
        let _ = controller.apply(Intent::Pan {
            axis: Axis::Horizontal,
            direction: PanDirection::Negative,
        });
        for _ in 0..10 {
            let _ = controller.tick(&mut presenter);
        }
        assert!(!controller.help_visible());

        let _ = controller.apply(Intent::Reset);

        assert_eq!(controller.viewport().center(), Complex::new(-0.5, 0.0));
        assert_eq!(controller.viewport().half_width(), 3.0);
        assert!(controller.help_visible());
        assert!(!controller.motion().is_active());
    }

    #[test]
    fn test_recolor_replaces_palette_and_hides_help() {
        let mut controller = controller();
        let before = controller.palette().entries().to_vec();

        assert!(controller.apply(Intent::Recolor));

        assert_ne!(controller.palette().entries(), before.as_slice());
        assert_eq!(controller.palette().len(), before.len());
        assert!(!controller.help_visible());
    }

    #[test]
    fn test_toggle_help_flips_visibility() {
        let mut controller = controller();

        let _ = controller.apply(Intent::ToggleHelp);
        assert!(!controller.help_visible());

        let _ = controller.apply(Intent::ToggleHelp);
        assert!(controller.help_visible());
    }

    #[test]
    fn test_pointer_release_stops_pointer_zoom() {
        let mut controller = controller();
        let target = PointerTarget::new(0.25, 0.75).unwrap();

        assert!(controller.apply(Intent::PointerZoom(target)));
        assert!(controller.motion().pointer_zoom_active);
        assert_eq!(controller.motion().zoom_factor, 0.975);

        let _ = controller.apply(Intent::PointerRelease);

        assert!(!controller.motion().pointer_zoom_active);
        assert!(!controller.motion().is_active());
    }

    #[test]
    fn test_pointer_release_without_drag_is_ignored() {
        let mut controller = controller();

        assert!(!controller.apply(Intent::PointerRelease));
    }

    #[test]
    fn test_resize_reallocates_buffer_and_restarts_loop() {
        let mut controller = controller();

        assert!(controller.resize(SurfaceSize::new(160, 120)));

        assert_eq!(controller.frame().dims().width, 160);
        assert_eq!(controller.frame().dims().height, 120);
        assert_eq!(controller.viewport().dims(), controller.frame().dims());
    }

    #[test]
    fn test_rejected_zoom_is_reported_and_view_kept() {
        let mut config = ExplorerConfig::default();
        config.limits.zoom_out_factor = 1e200;
        let mut controller =
            ExplorerController::with_seed(config, SurfaceSize::new(64, 48), 3).unwrap();
        let mut presenter = CountingPresenter::default();
        let _ = controller.apply(Intent::Zoom(ZoomDirection::Out));

        for _ in 0..3 {
            let _ = controller.tick(&mut presenter);
        }

        assert_eq!(controller.viewport().half_width(), 3e200);
        assert_eq!(
            controller.status().last_warning,
            Some(FlightWarning::ZoomRejected)
        );
    }
}
