pub mod controls;
pub mod detail;
pub mod limits;
pub mod motion;
pub mod status;

pub use controls::{Axis, Intent, PanDirection, PointerTarget, ZoomDirection};
pub use detail::DetailLevel;
pub use limits::FlightLimits;
pub use motion::{MotionState, MotionStepReport, pan_velocity, steer_pointer_zoom, step_motion};
pub use status::{FlightPhase, FlightStatus, FlightWarning};
