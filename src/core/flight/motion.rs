use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::flight::controls::{Axis, PanDirection, PointerTarget};
use crate::core::flight::limits::FlightLimits;
use crate::core::flight::status::FlightWarning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Plane units per tick, `[x, y]`.
    pub velocity: [f64; 2],
    /// Per-tick multiplier applied to the half width, 1.0 when stationary.
    pub zoom_factor: f64,
    pub pointer_zoom_active: bool,
    pub pointer_target: PointerTarget,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: [0.0, 0.0],
            zoom_factor: 1.0,
            pointer_zoom_active: false,
            pointer_target: PointerTarget::default(),
        }
    }
}

impl MotionState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.velocity[0] != 0.0 || self.velocity[1] != 0.0 || self.zoom_factor != 1.0
    }

    pub fn stop(&mut self) {
        self.velocity = [0.0, 0.0];
        self.zoom_factor = 1.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionStepReport {
    pub moved: bool,
    pub warning: Option<FlightWarning>,
}

/// Pan speed along `axis`, a fixed number of pixels per tick at the current zoom.
#[must_use]
pub fn pan_velocity(
    viewport: &Viewport,
    axis: Axis,
    direction: PanDirection,
    limits: &FlightLimits,
) -> f64 {
    let dims = viewport.dims();
    let per_pixel = match axis {
        Axis::Horizontal => viewport.half_width() / f64::from(dims.width),
        Axis::Vertical => viewport.half_height() / f64::from(dims.height),
    };

    direction.sign() * limits.pan_step_pixels * per_pixel
}

/// Recomputes velocity and zoom so the plane point under the pointer stays
/// under the pointer while the view zooms in.
pub fn steer_pointer_zoom(motion: &mut MotionState, viewport: &Viewport, limits: &FlightLimits) {
    if !motion.pointer_zoom_active {
        return;
    }

    let half_width = viewport.half_width();
    let half_height = viewport.half_height();
    let offset_x = -half_width + 2.0 * half_width * motion.pointer_target.u();
    let offset_y = -half_height + 2.0 * half_height * motion.pointer_target.v();
    let zoom = limits.pointer_zoom_factor;

    motion.zoom_factor = zoom;
    motion.velocity = [(1.0 - zoom) * offset_x, (1.0 - zoom) * offset_y];
}

/// Integrates one tick: pans by the velocity, then scales the half width.
///
/// A step that would leave the viewport invalid is skipped and reported.
pub fn step_motion(motion: &MotionState, viewport: &mut Viewport) -> MotionStepReport {
    let mut report = MotionStepReport::default();

    if motion.velocity != [0.0, 0.0] {
        match viewport.pan_by(Complex::new(motion.velocity[0], motion.velocity[1])) {
            Ok(()) => report.moved = true,
            Err(_) => report.warning = Some(FlightWarning::PanRejected),
        }
    }

    if motion.zoom_factor != 1.0 {
        match viewport.zoom_by(motion.zoom_factor) {
            Ok(()) => report.moved = true,
            Err(_) => report.warning = Some(FlightWarning::ZoomRejected),
        }
    }

    report
}
